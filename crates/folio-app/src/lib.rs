//! Folio Application Orchestration Layer
//!
//! This crate contains the use cases and the stateful controllers the
//! presentation layer talks to. All I/O goes through the ports defined in
//! `folio-core`.

pub mod app;
pub mod controllers;
pub mod deps;
pub mod usecases;

pub use app::{AppOptions, FolioApp, LocaleSwitch};
pub use controllers::{AboutController, AboutState, LoadOutcome, ProjectsController};
pub use deps::AppDeps;
pub use usecases::{
    ContentLoadError, GetMessages, LoadAboutContent, LoadProjects, LoadedMessages,
    SubmitContactForm,
};

#[cfg(test)]
mod test_support;
