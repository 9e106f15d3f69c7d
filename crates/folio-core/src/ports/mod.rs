//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations. The content store, the message
//! catalogs and the contact endpoint all live behind these traits so use
//! cases can be exercised against in-memory fakes.

mod clock;
pub mod contact;
pub mod content;
pub mod errors;
pub mod messages;

pub use clock::*;
pub use contact::ContactSenderPort;
pub use content::ContentRepositoryPort;
pub use errors::{ContactSendError, ContentError, MessageCatalogError};
pub use messages::MessageCatalogPort;
