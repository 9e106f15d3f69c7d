use std::sync::Arc;

use folio_core::contact::ContactFormStatus;
use folio_core::ports::{ClockPort, ContactSenderPort};
use folio_core::ContactForm;

/// Validate the contact form and, when valid, send it.
pub struct SubmitContactForm {
    sender: Arc<dyn ContactSenderPort>,
    clock: Arc<dyn ClockPort>,
}

impl SubmitContactForm {
    pub fn new(sender: Arc<dyn ContactSenderPort>, clock: Arc<dyn ClockPort>) -> Self {
        Self { sender, clock }
    }

    /// Returns the resulting form status. Validation failures never reach the
    /// sender.
    #[tracing::instrument(name = "usecase.contact.submit.execute", skip_all)]
    pub async fn execute(&self, form: &mut ContactForm) -> ContactFormStatus {
        let submission = match form.begin_submit() {
            Ok(submission) => submission,
            Err(err) => {
                tracing::debug!(error = %err, "contact form incomplete, not sending");
                return form.status().clone();
            }
        };

        let outcome = self.sender.send(&submission).await;
        if let Err(err) = &outcome {
            tracing::warn!(error = %err, "contact submission failed");
        }
        form.finish_submit(outcome, self.clock.now_ms());
        form.status().clone()
    }
}
