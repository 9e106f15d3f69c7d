//! Contact form: draft, validation and submission status.
//!
//! The form itself performs no I/O. A submission is split into
//! [`ContactForm::begin_submit`], which validates and hands out the message to
//! send, and [`ContactForm::finish_submit`], which records the outcome.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::locale::Messages;
use crate::ports::ContactSendError;

/// How long the success banner stays up after a sent message.
pub const SUCCESS_BANNER_MS: i64 = 5_000;

/// Message key shown when a required field is empty.
pub const REQUIRED_MESSAGE_KEY: &str = "contact.form.error.required";
/// Message key shown when the submission endpoint could not be reached.
pub const NETWORK_MESSAGE_KEY: &str = "contact.form.error.network";
/// Used when the endpoint rejects a message without saying why.
pub const DEFAULT_REJECTION: &str = "Failed to send message";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [ContactField::Name, ContactField::Email, ContactField::Message];

    pub fn as_str(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        }
    }
}

impl std::fmt::Display for ContactField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactValidationError {
    #[error("required field is empty: {0}")]
    Required(ContactField),
}

/// Body posted to the contact endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    fn field_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }

    /// Every field must be non-empty after trimming. Reports the first empty one.
    pub fn validate(&self) -> Result<(), ContactValidationError> {
        match ContactField::ALL
            .into_iter()
            .find(|f| self.field(*f).trim().is_empty())
        {
            Some(field) => Err(ContactValidationError::Required(field)),
            None => Ok(()),
        }
    }
}

/// Error shown inline under the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ContactFormError {
    Required(ContactField),
    /// The endpoint answered with an error; its message is shown verbatim.
    Rejected(String),
    /// The endpoint could not be reached. Resubmitting may help.
    Network,
}

impl ContactFormError {
    pub fn user_message(&self, messages: &Messages) -> String {
        match self {
            ContactFormError::Required(_) => messages.t(REQUIRED_MESSAGE_KEY),
            ContactFormError::Rejected(message) => message.clone(),
            ContactFormError::Network => messages.t(NETWORK_MESSAGE_KEY),
        }
    }

    pub fn is_retryable(&self) -> bool {
        matches!(self, ContactFormError::Network)
    }
}

impl From<ContactValidationError> for ContactFormError {
    fn from(err: ContactValidationError) -> Self {
        match err {
            ContactValidationError::Required(field) => ContactFormError::Required(field),
        }
    }
}

impl From<ContactSendError> for ContactFormError {
    fn from(err: ContactSendError) -> Self {
        match err {
            ContactSendError::Rejected(message) if message.trim().is_empty() => {
                ContactFormError::Rejected(DEFAULT_REJECTION.to_string())
            }
            ContactSendError::Rejected(message) => ContactFormError::Rejected(message),
            ContactSendError::Transport(_) => ContactFormError::Network,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ContactFormStatus {
    pub loading: bool,
    pub success: bool,
    pub error: Option<ContactFormError>,
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    draft: ContactSubmission,
    status: ContactFormStatus,
    succeeded_at_ms: Option<i64>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &ContactSubmission {
        &self.draft
    }

    pub fn status(&self) -> &ContactFormStatus {
        &self.status
    }

    /// Update a field. Typing clears any error on display.
    pub fn edit(&mut self, field: ContactField, value: impl Into<String>) {
        *self.draft.field_mut(field) = value.into();
        self.status.error = None;
    }

    /// Validate the draft and enter the loading state.
    ///
    /// On a validation failure the error is recorded and nothing should be sent.
    pub fn begin_submit(&mut self) -> Result<ContactSubmission, ContactValidationError> {
        if let Err(err) = self.draft.validate() {
            self.status = ContactFormStatus {
                loading: false,
                success: false,
                error: Some(err.clone().into()),
            };
            return Err(err);
        }
        self.status = ContactFormStatus {
            loading: true,
            success: false,
            error: None,
        };
        Ok(self.draft.clone())
    }

    /// Record the outcome of a send started by [`Self::begin_submit`].
    pub fn finish_submit(&mut self, outcome: Result<(), ContactSendError>, now_ms: i64) {
        match outcome {
            Ok(()) => {
                self.draft = ContactSubmission::default();
                self.status = ContactFormStatus {
                    loading: false,
                    success: true,
                    error: None,
                };
                self.succeeded_at_ms = Some(now_ms);
            }
            Err(err) => {
                self.status = ContactFormStatus {
                    loading: false,
                    success: false,
                    error: Some(err.into()),
                };
                self.succeeded_at_ms = None;
            }
        }
    }

    pub fn success_visible(&self, now_ms: i64) -> bool {
        match self.succeeded_at_ms {
            Some(at) => self.status.success && now_ms - at < SUCCESS_BANNER_MS,
            None => false,
        }
    }

    /// Drop the success banner once it has been up long enough.
    pub fn expire_success(&mut self, now_ms: i64) {
        if self.status.success && !self.success_visible(now_ms) {
            self.status.success = false;
            self.succeeded_at_ms = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.edit(ContactField::Name, "Kari");
        form.edit(ContactField::Email, "kari@example.no");
        form.edit(ContactField::Message, "Hei!");
        form
    }

    #[test]
    fn test_blank_fields_fail_validation() {
        let submission = ContactSubmission::new("  ", "a@b.c", "hi");
        assert_eq!(
            submission.validate(),
            Err(ContactValidationError::Required(ContactField::Name))
        );
        let submission = ContactSubmission::new("Ola", "a@b.c", "\n\t");
        assert_eq!(
            submission.validate(),
            Err(ContactValidationError::Required(ContactField::Message))
        );
    }

    #[test]
    fn test_begin_submit_with_empty_name_records_required_error() {
        let mut form = filled();
        form.edit(ContactField::Name, "");
        assert!(form.begin_submit().is_err());
        assert_eq!(
            form.status().error,
            Some(ContactFormError::Required(ContactField::Name))
        );
        assert!(!form.status().loading);
    }

    #[test]
    fn test_editing_clears_error() {
        let mut form = ContactForm::new();
        let _ = form.begin_submit();
        assert!(form.status().error.is_some());
        form.edit(ContactField::Name, "K");
        assert!(form.status().error.is_none());
    }

    #[test]
    fn test_success_resets_draft_and_expires() {
        let mut form = filled();
        let submission = form.begin_submit().unwrap();
        assert_eq!(submission.name, "Kari");
        assert!(form.status().loading);

        form.finish_submit(Ok(()), 1_000);
        assert!(form.status().success);
        assert_eq!(form.draft(), &ContactSubmission::default());
        assert!(form.success_visible(5_999));

        form.expire_success(6_000);
        assert!(!form.status().success);
    }

    #[test]
    fn test_rejection_message_is_kept_verbatim() {
        let mut form = filled();
        form.begin_submit().unwrap();
        form.finish_submit(Err(ContactSendError::Rejected("Invalid email".into())), 0);
        assert_eq!(
            form.status().error,
            Some(ContactFormError::Rejected("Invalid email".into()))
        );
        assert_eq!(form.draft().name, "Kari");
    }

    #[test]
    fn test_empty_rejection_uses_default_message() {
        let err: ContactFormError = ContactSendError::Rejected(String::new()).into();
        assert_eq!(err, ContactFormError::Rejected(DEFAULT_REJECTION.into()));
    }

    #[test]
    fn test_user_messages_come_from_catalog() {
        let messages = Messages::from_entries([
            (REQUIRED_MESSAGE_KEY, "Fyll ut alle feltene"),
            (NETWORK_MESSAGE_KEY, "Nettverksfeil"),
        ]);
        assert_eq!(
            ContactFormError::Required(ContactField::Email).user_message(&messages),
            "Fyll ut alle feltene"
        );
        assert_eq!(ContactFormError::Network.user_message(&messages), "Nettverksfeil");
        assert!(ContactFormError::Network.is_retryable());
        assert_eq!(
            ContactFormError::Rejected("Rate limited".into()).user_message(&messages),
            "Rate limited"
        );
    }
}
