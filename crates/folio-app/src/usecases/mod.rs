//! Business logic use cases
//!
//! Every content use case catches its own failures: a broken content store
//! degrades to "nothing shown", never to an error reaching the view.
//!
//! [locale change]
//!        ↓
//! LoadProjects / LoadAboutContent / GetMessages
//!        ↓
//! ProjectsController / AboutController → view state

use std::time::Duration;

use folio_core::ports::ContentError;
use thiserror::Error;

pub mod get_messages;
pub mod load_about;
pub mod load_projects;
pub mod submit_contact;

pub use get_messages::{GetMessages, LoadedMessages};
pub use load_about::LoadAboutContent;
pub use load_projects::LoadProjects;
pub use submit_contact::SubmitContactForm;

/// Default upper bound for one content fetch.
pub const DEFAULT_CONTENT_TIMEOUT: Duration = Duration::from_secs(10);

/// Why a content fetch produced nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentLoadError {
    #[error(transparent)]
    Content(#[from] ContentError),

    #[error("content request timed out after {0:?}")]
    TimedOut(Duration),
}
