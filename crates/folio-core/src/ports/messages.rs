use async_trait::async_trait;

use crate::ids::LocaleCode;
use crate::locale::Messages;
use crate::ports::errors::MessageCatalogError;

#[async_trait]
pub trait MessageCatalogPort: Send + Sync {
    async fn load(&self, locale: &LocaleCode) -> Result<Messages, MessageCatalogError>;
}
