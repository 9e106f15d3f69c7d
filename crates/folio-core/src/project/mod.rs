//! Portfolio projects: model, category filtering, image resolution and the
//! "All Projects" view state machine.

pub mod catalog;
pub mod image;
pub mod model;
pub mod view;

pub use catalog::{apply_filter, derive_categories, CategoryFilter, ALL_CATEGORIES};
pub use image::{ImageResolver, CARD_PLACEHOLDER, DETAIL_PLACEHOLDER};
pub use model::{ImageRef, Project, ProjectCollections, KNOWN_CATEGORIES};
pub use view::{
    ProjectCatalog, ProjectsAction, ProjectsEvent, ProjectsStateMachine, ProjectsView,
};
