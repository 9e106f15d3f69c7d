use async_trait::async_trait;

use crate::contact::ContactSubmission;
use crate::ports::errors::ContactSendError;

#[async_trait]
pub trait ContactSenderPort: Send + Sync {
    async fn send(&self, submission: &ContactSubmission) -> Result<(), ContactSendError>;
}
