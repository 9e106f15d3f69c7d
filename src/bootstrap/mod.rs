//! Composition root: configuration, tracing and adapter wiring.

pub mod config;
pub mod tracing;
pub mod wiring;

pub use config::{apply_env_overrides, load_config, load_config_from_env};
pub use self::tracing::init_tracing_subscriber;
pub use wiring::{app_options, build_app, build_deps};
