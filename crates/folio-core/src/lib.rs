//! # folio-core
//!
//! Core domain models and business logic for the Folio portfolio site.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod about;
pub mod config;
pub mod contact;
pub mod ids;
pub mod locale;
pub mod navigation;
pub mod ports;
pub mod project;

// Re-export commonly used types at the crate root
pub use about::{About, AboutContent, Statistic, TechnicalExpertise};
pub use config::FolioConfig;
pub use contact::{ContactField, ContactForm, ContactFormError, ContactSubmission};
pub use ids::{LocaleCode, ProjectId, RequestSeq, SectionId};
pub use locale::{Locale, Messages, DEFAULT_LOCALE};
pub use navigation::{NavState, ScrollConfig, ScrollTracker, SectionBounds, SectionLayout};
pub use project::{
    ImageRef, ImageResolver, Project, ProjectCatalog, ProjectCollections, ProjectsView,
};
