//! Flat key→string message dictionary.

use std::collections::BTreeMap;

use serde_json::Value;

/// Translated UI strings for one locale, keyed by dotted path
/// (`contact.form.error.required`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Messages {
    entries: BTreeMap<String, String>,
}

impl Messages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Flatten a nested JSON message document.
    ///
    /// Objects contribute their keys as path segments, arrays their indices.
    /// Numbers and booleans are kept in their JSON text form; `null` is dropped.
    pub fn from_json(document: &Value) -> Self {
        let mut entries = BTreeMap::new();
        flatten_into(&mut entries, String::new(), document);
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Look up `key`, answering with the key itself when it is missing.
    pub fn t(&self, key: &str) -> String {
        self.get(key).unwrap_or(key).to_string()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

fn flatten_into(entries: &mut BTreeMap<String, String>, prefix: String, value: &Value) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                flatten_into(entries, join(&prefix, key), child);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                flatten_into(entries, join(&prefix, &index.to_string()), child);
            }
        }
        Value::String(s) => {
            entries.insert(prefix, s.clone());
        }
        Value::Number(n) => {
            entries.insert(prefix, n.to_string());
        }
        Value::Bool(b) => {
            entries.insert(prefix, b.to_string());
        }
        Value::Null => {}
    }
}

fn join(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_flattens_nested_objects() {
        let messages = Messages::from_json(&json!({
            "nav": { "home": "Home", "work": "Work" },
            "contact": { "form": { "error": { "required": "Please fill in all fields" } } }
        }));

        assert_eq!(messages.get("nav.home"), Some("Home"));
        assert_eq!(
            messages.get("contact.form.error.required"),
            Some("Please fill in all fields")
        );
        assert_eq!(messages.len(), 3);
    }

    #[test]
    fn test_from_json_handles_arrays_and_scalars() {
        let messages = Messages::from_json(&json!({
            "hero": { "roles": ["Developer", "Designer"] },
            "stats": { "years": 5, "available": true, "missing": null }
        }));

        assert_eq!(messages.get("hero.roles.1"), Some("Designer"));
        assert_eq!(messages.get("stats.years"), Some("5"));
        assert_eq!(messages.get("stats.available"), Some("true"));
        assert_eq!(messages.get("stats.missing"), None);
    }

    #[test]
    fn test_t_falls_back_to_key() {
        let messages = Messages::from_entries([("nav.home", "Hjem")]);
        assert_eq!(messages.t("nav.home"), "Hjem");
        assert_eq!(messages.t("nav.unknown"), "nav.unknown");
    }
}
