//! Application configuration domain model
//!
//! Every section has defaults, so a partial (or empty) configuration file
//! still yields a usable [`FolioConfig`].

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::navigation::ScrollConfig;
use crate::project::{CARD_PLACEHOLDER, DETAIL_PLACEHOLDER};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    pub content: ContentConfig,
    pub messages: MessagesConfig,
    pub contact: ContactConfig,
    pub images: ImageConfig,
    pub navigation: ScrollConfig,
    pub logging: LoggingConfig,
}

/// Headless content store (Sanity) connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    pub project_id: String,
    pub dataset: String,
    /// Dated API version, e.g. `2024-01-01`.
    pub api_version: String,
    pub use_cdn: bool,
    /// Overrides the host derived from `project_id` and `use_cdn`.
    pub api_base_url: Option<String>,
    /// Upper bound for one fetch (both collections together).
    pub timeout_ms: u64,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            project_id: "your-project-id".to_string(),
            dataset: "production".to_string(),
            api_version: "2024-01-01".to_string(),
            use_cdn: true,
            api_base_url: None,
            timeout_ms: 10_000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessagesConfig {
    /// Directory holding one `<locale>.json` file per locale.
    pub dir: PathBuf,
    pub default_locale: String,
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("messages"),
            default_locale: crate::locale::DEFAULT_LOCALE.code().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub endpoint: String,
    pub timeout_ms: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:3000/api/contact".to_string(),
            timeout_ms: 15_000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    pub card_placeholder: String,
    pub detail_placeholder: String,
    /// Static images for projects without an image, keyed by project title.
    pub title_fallbacks: BTreeMap<String, String>,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            card_placeholder: CARD_PLACEHOLDER.to_string(),
            detail_placeholder: DETAIL_PLACEHOLDER.to_string(),
            title_fallbacks: BTreeMap::from([(
                "Olav Solberg AS".to_string(),
                "/olavsolberg.png".to_string(),
            )]),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Tracing filter directives; `RUST_LOG` takes precedence.
    pub filter: Option<String>,
    /// When set, logs are also written to daily files in this directory.
    pub dir: Option<PathBuf>,
}
