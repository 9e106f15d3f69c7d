use std::sync::Arc;

use folio_core::ports::{MessageCatalogError, MessageCatalogPort};
use folio_core::{LocaleCode, Messages};

/// Messages for a locale, with the locale that actually served them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedMessages {
    pub requested: LocaleCode,
    pub served: LocaleCode,
    pub messages: Messages,
}

impl LoadedMessages {
    pub fn is_fallback(&self) -> bool {
        self.requested != self.served
    }
}

/// Load the message dictionary for a locale, falling back to the default
/// locale's dictionary when the requested one cannot be loaded.
pub struct GetMessages {
    catalog: Arc<dyn MessageCatalogPort>,
    fallback: LocaleCode,
}

impl GetMessages {
    pub fn new(catalog: Arc<dyn MessageCatalogPort>, fallback: LocaleCode) -> Self {
        Self { catalog, fallback }
    }

    #[tracing::instrument(
        name = "usecase.messages.get.execute",
        skip(self, locale),
        fields(locale = %locale)
    )]
    pub async fn execute(&self, locale: &LocaleCode) -> Result<LoadedMessages, MessageCatalogError> {
        match self.catalog.load(locale).await {
            Ok(messages) => Ok(LoadedMessages {
                requested: locale.clone(),
                served: locale.clone(),
                messages,
            }),
            Err(err) if *locale != self.fallback => {
                tracing::warn!(
                    error = %err,
                    fallback = %self.fallback,
                    "message catalog unavailable, using fallback locale"
                );
                let messages = self.catalog.load(&self.fallback).await?;
                Ok(LoadedMessages {
                    requested: locale.clone(),
                    served: self.fallback.clone(),
                    messages,
                })
            }
            Err(err) => Err(err),
        }
    }
}
