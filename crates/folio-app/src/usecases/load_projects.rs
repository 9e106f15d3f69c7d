use std::sync::Arc;
use std::time::Duration;

use folio_core::ports::ContentRepositoryPort;
use folio_core::{LocaleCode, ProjectCollections};

use super::{ContentLoadError, DEFAULT_CONTENT_TIMEOUT};

/// Fetch all projects and the featured subset for one locale.
pub struct LoadProjects {
    content: Arc<dyn ContentRepositoryPort>,
    timeout: Duration,
}

impl LoadProjects {
    pub fn new(content: Arc<dyn ContentRepositoryPort>, timeout: Duration) -> Self {
        Self { content, timeout }
    }

    pub fn from_arc(content: Arc<dyn ContentRepositoryPort>) -> Self {
        Self::new(content, DEFAULT_CONTENT_TIMEOUT)
    }

    /// Both collections, or both empty when anything went wrong.
    ///
    /// The two requests run concurrently and share one timeout. Failures are
    /// logged here and never returned.
    #[tracing::instrument(
        name = "usecase.projects.load.execute",
        skip(self, locale),
        fields(locale = %locale)
    )]
    pub async fn execute(&self, locale: &LocaleCode) -> ProjectCollections {
        match self.try_execute(locale).await {
            Ok(collections) => {
                tracing::debug!(
                    all = collections.all.len(),
                    featured = collections.featured.len(),
                    "projects loaded"
                );
                collections
            }
            Err(err) => {
                tracing::warn!(error = %err, "project fetch failed, showing no projects");
                ProjectCollections::empty()
            }
        }
    }

    /// Same as [`Self::execute`] but reports the failure instead of degrading.
    pub async fn try_execute(
        &self,
        locale: &LocaleCode,
    ) -> Result<ProjectCollections, ContentLoadError> {
        let fetch = async {
            tokio::join!(
                self.content.all_projects(locale),
                self.content.featured_projects(locale)
            )
        };
        let (all, featured) = tokio::time::timeout(self.timeout, fetch)
            .await
            .map_err(|_| ContentLoadError::TimedOut(self.timeout))?;
        Ok(ProjectCollections::new(all?, featured?))
    }
}
