use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use folio_core::ports::{MessageCatalogError, MessageCatalogPort};
use folio_core::{LocaleCode, Messages};
use tracing::debug;

/// Message catalogs stored as `<dir>/<locale>.json`.
#[derive(Debug, Clone)]
pub struct JsonMessageCatalog {
    dir: PathBuf,
}

impl JsonMessageCatalog {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// `None` for codes that cannot name a catalog file.
    fn path_for(&self, locale: &LocaleCode) -> Option<PathBuf> {
        let code = locale.as_str();
        let valid = !code.is_empty()
            && code
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        valid.then(|| self.dir.join(format!("{code}.json")))
    }
}

#[async_trait]
impl MessageCatalogPort for JsonMessageCatalog {
    async fn load(&self, locale: &LocaleCode) -> Result<Messages, MessageCatalogError> {
        let path = self
            .path_for(locale)
            .ok_or_else(|| MessageCatalogError::NotFound(locale.to_string()))?;

        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(MessageCatalogError::NotFound(locale.to_string()));
            }
            Err(e) => {
                return Err(MessageCatalogError::Io {
                    locale: locale.to_string(),
                    reason: e.to_string(),
                });
            }
        };

        let document: serde_json::Value =
            serde_json::from_str(&raw).map_err(|e| MessageCatalogError::Malformed {
                locale: locale.to_string(),
                reason: e.to_string(),
            })?;
        if !document.is_object() {
            return Err(MessageCatalogError::Malformed {
                locale: locale.to_string(),
                reason: "top level must be an object".to_string(),
            });
        }

        let messages = Messages::from_json(&document);
        debug!(locale = %locale, path = %path.display(), entries = messages.len(), "loaded message catalog");
        Ok(messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn catalog_with(files: &[(&str, &str)]) -> (TempDir, JsonMessageCatalog) {
        let dir = TempDir::new().unwrap();
        for (name, content) in files {
            fs::write(dir.path().join(name), content).unwrap();
        }
        let catalog = JsonMessageCatalog::new(dir.path());
        (dir, catalog)
    }

    #[tokio::test]
    async fn test_loads_and_flattens_catalog() {
        let (_dir, catalog) = catalog_with(&[(
            "no.json",
            r#"{"nav": {"home": "Hjem", "contact": "Kontakt"}, "contact": {"form": {"error": {"required": "Fyll ut alle feltene"}}}}"#,
        )]);

        let messages = catalog.load(&LocaleCode::from_str("no")).await.unwrap();

        assert_eq!(messages.get("nav.home"), Some("Hjem"));
        assert_eq!(messages.t("contact.form.error.required"), "Fyll ut alle feltene");
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let (_dir, catalog) = catalog_with(&[]);

        let err = catalog.load(&LocaleCode::from_str("de")).await.unwrap_err();

        assert_eq!(err, MessageCatalogError::NotFound("de".into()));
    }

    #[tokio::test]
    async fn test_invalid_json_is_malformed() {
        let (_dir, catalog) = catalog_with(&[("en.json", "{ not json")]);

        let err = catalog.load(&LocaleCode::from_str("en")).await.unwrap_err();

        assert!(matches!(err, MessageCatalogError::Malformed { .. }));
    }

    #[tokio::test]
    async fn test_path_like_locale_is_rejected() {
        let (_dir, catalog) = catalog_with(&[("en.json", "{}")]);

        let err = catalog
            .load(&LocaleCode::from_str("../en"))
            .await
            .unwrap_err();

        assert_eq!(err, MessageCatalogError::NotFound("../en".into()));
    }
}
