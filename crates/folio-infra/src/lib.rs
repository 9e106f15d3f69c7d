//! Adapters implementing the `folio-core` ports: the Sanity content store,
//! JSON message catalogs on disk, the HTTP contact endpoint and the system
//! clock.

pub mod contact;
pub mod content;
pub mod messages;
pub mod time;

pub use contact::HttpContactSender;
pub use content::SanityContentRepository;
pub use messages::JsonMessageCatalog;
pub use time::SystemClock;
