//! # Configuration Loader
//!
//! Reads the TOML configuration file and layers environment overrides on
//! top. Every field has a default, so a missing section is not an error; a
//! missing or unparsable file is.

use std::path::Path;

use anyhow::Context;
use folio_core::FolioConfig;

/// Content store project id.
pub const ENV_SANITY_PROJECT_ID: &str = "FOLIO_SANITY_PROJECT_ID";
/// Content store dataset.
pub const ENV_SANITY_DATASET: &str = "FOLIO_SANITY_DATASET";
/// Contact form endpoint URL.
pub const ENV_CONTACT_ENDPOINT: &str = "FOLIO_CONTACT_ENDPOINT";
/// Path of the configuration file used by [`load_config_from_env`].
pub const ENV_CONFIG_PATH: &str = "FOLIO_CONFIG";

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns error if the file cannot be read or is not a valid configuration
/// document.
pub fn load_config(config_path: &Path) -> anyhow::Result<FolioConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", config_path.display()))
}

/// Overwrite config values with non-empty environment values.
///
/// `lookup` is usually `std::env::var(..).ok()`.
pub fn apply_env_overrides<F>(config: &mut FolioConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(project_id) = get(ENV_SANITY_PROJECT_ID) {
        config.content.project_id = project_id;
    }
    if let Some(dataset) = get(ENV_SANITY_DATASET) {
        config.content.dataset = dataset;
    }
    if let Some(endpoint) = get(ENV_CONTACT_ENDPOINT) {
        config.contact.endpoint = endpoint;
    }
}

/// Load `.env`, then the file named by `FOLIO_CONFIG` (defaults when unset),
/// then apply environment overrides.
pub fn load_config_from_env() -> anyhow::Result<FolioConfig> {
    // A missing .env file is normal outside development.
    let _ = dotenvy::dotenv();

    let mut config = match std::env::var(ENV_CONFIG_PATH) {
        Ok(path) => load_config(Path::new(&path))?,
        Err(_) => FolioConfig::default(),
    };
    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    Ok(config)
}
