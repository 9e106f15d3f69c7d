//! Supported locales and URL path handling.
//!
//! The site is served under a locale path segment (`/en`, `/no`). Content
//! requests carry a raw [`LocaleCode`] instead, so the content store stays in
//! charge of its own fallback for codes outside this set.

pub mod messages;

pub use messages::Messages;

use serde::{Deserialize, Serialize};

use crate::ids::LocaleCode;

/// Locale served when the request names none or an unsupported one.
pub const DEFAULT_LOCALE: Locale = Locale::En;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    No,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::No];

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::No => "no",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Locale::En),
            "no" => Some(Locale::No),
            _ => None,
        }
    }

    /// Resolve the locale from the first path segment, falling back to the default.
    pub fn from_path(path: &str) -> Self {
        first_segment(path)
            .and_then(Locale::from_code)
            .unwrap_or(DEFAULT_LOCALE)
    }

    /// Rewrite `path` so that it is served under `self`.
    ///
    /// A leading locale segment is replaced in place; any other path is sent to
    /// the locale root.
    pub fn switch_path(self, path: &str) -> String {
        let mut segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.first() {
            Some(first) if Locale::from_code(first).is_some() => {
                segments[0] = self.code();
                format!("/{}", segments.join("/"))
            }
            _ => format!("/{}", self.code()),
        }
    }

    pub fn to_code(self) -> LocaleCode {
        LocaleCode::from_str(self.code())
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl From<Locale> for LocaleCode {
    fn from(locale: Locale) -> Self {
        locale.to_code()
    }
}

fn first_segment(path: &str) -> Option<&str> {
    path.split('/').find(|s| !s.is_empty())
}
