use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    #[error("content request failed: {0}")]
    Transport(String),

    #[error("content service returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("malformed content response: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageCatalogError {
    #[error("no message catalog for locale {0}")]
    NotFound(String),

    #[error("failed to read message catalog {locale}: {reason}")]
    Io { locale: String, reason: String },

    #[error("malformed message catalog {locale}: {reason}")]
    Malformed { locale: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactSendError {
    /// The endpoint answered with an error status. Carries its message.
    #[error("{0}")]
    Rejected(String),

    #[error("network error: {0}")]
    Transport(String),
}
