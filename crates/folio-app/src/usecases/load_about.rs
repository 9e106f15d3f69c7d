use std::sync::Arc;
use std::time::Duration;

use folio_core::ports::ContentRepositoryPort;
use folio_core::{AboutContent, LocaleCode};

use super::{ContentLoadError, DEFAULT_CONTENT_TIMEOUT};

/// Fetch technical expertise and the localized about document together.
pub struct LoadAboutContent {
    content: Arc<dyn ContentRepositoryPort>,
    timeout: Duration,
}

impl LoadAboutContent {
    pub fn new(content: Arc<dyn ContentRepositoryPort>, timeout: Duration) -> Self {
        Self { content, timeout }
    }

    pub fn from_arc(content: Arc<dyn ContentRepositoryPort>) -> Self {
        Self::new(content, DEFAULT_CONTENT_TIMEOUT)
    }

    #[tracing::instrument(
        name = "usecase.about.load.execute",
        skip(self, locale),
        fields(locale = %locale)
    )]
    pub async fn execute(&self, locale: &LocaleCode) -> AboutContent {
        match self.try_execute(locale).await {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!(error = %err, "about content fetch failed, showing defaults");
                AboutContent::empty()
            }
        }
    }

    pub async fn try_execute(&self, locale: &LocaleCode) -> Result<AboutContent, ContentLoadError> {
        let fetch = async {
            tokio::join!(
                self.content.technical_expertise(),
                self.content.about(locale)
            )
        };
        let (expertise, about) = tokio::time::timeout(self.timeout, fetch)
            .await
            .map_err(|_| ContentLoadError::TimedOut(self.timeout))?;
        Ok(AboutContent {
            expertise: expertise?,
            about: about?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FakeContent;
    use folio_core::TechnicalExpertise;

    fn expertise() -> Vec<TechnicalExpertise> {
        vec![TechnicalExpertise {
            id: "fe".to_string(),
            category: "frontend".to_string(),
            skills: vec!["React".to_string(), "TypeScript".to_string()],
            color: "teal".to_string(),
            order: Some(1.0),
        }]
    }

    #[tokio::test]
    async fn test_execute_combines_expertise_and_about() {
        let content = FakeContent {
            expertise: expertise(),
            ..FakeContent::default()
        }
        .with_about("no");
        let usecase = LoadAboutContent::from_arc(Arc::new(content));

        let loaded = usecase.execute(&LocaleCode::from_str("no")).await;

        assert_eq!(loaded.expertise.len(), 1);
        assert_eq!(loaded.about.unwrap().id, "about-no");
    }

    #[tokio::test]
    async fn test_missing_about_document_is_not_an_error() {
        let content = FakeContent {
            expertise: expertise(),
            ..FakeContent::default()
        };
        let usecase = LoadAboutContent::from_arc(Arc::new(content));

        let loaded = usecase.try_execute(&LocaleCode::from_str("en")).await.unwrap();

        assert!(loaded.about.is_none());
        assert_eq!(loaded.expertise.len(), 1);
    }

    #[tokio::test]
    async fn test_failure_degrades_to_empty_content() {
        let usecase = LoadAboutContent::from_arc(Arc::new(FakeContent::failing()));

        let loaded = usecase.execute(&LocaleCode::from_str("en")).await;

        assert!(loaded.is_empty());
    }
}
