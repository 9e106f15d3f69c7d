//! Folio portfolio site: composition root.
//!
//! The domain lives in `folio-core`, use cases and controllers in
//! `folio-app`, adapters in `folio-infra`. This crate wires them together.

pub mod bootstrap;

pub use folio_app::FolioApp;
pub use folio_core::FolioConfig;

/// Load configuration, initialize tracing and wire the application.
pub fn init() -> anyhow::Result<FolioApp> {
    let config = bootstrap::load_config_from_env()?;
    bootstrap::init_tracing_subscriber(&config.logging)?;
    bootstrap::build_app(&config)
}
