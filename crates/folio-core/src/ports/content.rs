use async_trait::async_trait;

use crate::about::{About, TechnicalExpertise};
use crate::ids::LocaleCode;
use crate::ports::errors::ContentError;
use crate::project::Project;

/// Read-only access to the headless content store.
///
/// Collections come back in the store's display order. The language tag is
/// passed through untouched; falling back for unknown tags is up to the store.
#[async_trait]
pub trait ContentRepositoryPort: Send + Sync {
    async fn all_projects(&self, lang: &LocaleCode) -> Result<Vec<Project>, ContentError>;
    async fn featured_projects(&self, lang: &LocaleCode) -> Result<Vec<Project>, ContentError>;
    async fn technical_expertise(&self) -> Result<Vec<TechnicalExpertise>, ContentError>;
    async fn about(&self, lang: &LocaleCode) -> Result<Option<About>, ContentError>;
}
