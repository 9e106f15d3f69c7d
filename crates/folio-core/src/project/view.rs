//! "All Projects" view state machine.
//!
//! Defines a pure state transition function for the project listing:
//! `Loading → Ready → Detail`, with a locale change restarting from `Loading`.
//! Results are tagged with the [`RequestSeq`] that asked for them, and a
//! result whose tag does not match the pending request is ignored.

use serde::{Deserialize, Serialize};

use super::catalog::{derive_categories, CategoryFilter};
use super::model::{Project, ProjectCollections};
use crate::ids::{LocaleCode, ProjectId, RequestSeq};

/// Loaded projects for one locale plus the active category filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectCatalog {
    locale: LocaleCode,
    all: Vec<Project>,
    featured: Vec<Project>,
    categories: Vec<String>,
    filter: CategoryFilter,
}

impl ProjectCatalog {
    pub fn new(locale: LocaleCode, collections: ProjectCollections) -> Self {
        let categories = derive_categories(&collections.all);
        Self {
            locale,
            all: collections.all,
            featured: collections.featured,
            categories,
            filter: CategoryFilter::All,
        }
    }

    pub fn locale(&self) -> &LocaleCode {
        &self.locale
    }

    pub fn all(&self) -> &[Project] {
        &self.all
    }

    pub fn featured(&self) -> &[Project] {
        &self.featured
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    /// Projects passing the active filter, in collection order.
    pub fn visible(&self) -> Vec<&Project> {
        self.all.iter().filter(|p| self.filter.matches(p)).collect()
    }

    pub fn find(&self, id: &ProjectId) -> Option<&Project> {
        self.all
            .iter()
            .chain(self.featured.iter())
            .find(|p| p.id == *id)
    }

    fn with_filter(mut self, filter: CategoryFilter) -> Self {
        self.filter = filter;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ProjectsView {
    /// Waiting for the response to `request`.
    Loading {
        locale: LocaleCode,
        request: RequestSeq,
    },
    Ready(ProjectCatalog),
    /// A project is opened in the detail view on top of the catalog.
    Detail {
        catalog: ProjectCatalog,
        selected: Project,
    },
}

impl ProjectsView {
    /// Initial state: loading, with no request issued yet.
    pub fn initial(locale: LocaleCode) -> Self {
        ProjectsView::Loading {
            locale,
            request: RequestSeq::ZERO,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ProjectsView::Loading { .. })
    }

    pub fn locale(&self) -> &LocaleCode {
        match self {
            ProjectsView::Loading { locale, .. } => locale,
            ProjectsView::Ready(catalog) | ProjectsView::Detail { catalog, .. } => catalog.locale(),
        }
    }

    pub fn catalog(&self) -> Option<&ProjectCatalog> {
        match self {
            ProjectsView::Loading { .. } => None,
            ProjectsView::Ready(catalog) | ProjectsView::Detail { catalog, .. } => Some(catalog),
        }
    }

    pub fn selected(&self) -> Option<&Project> {
        match self {
            ProjectsView::Detail { selected, .. } => Some(selected),
            _ => None,
        }
    }

    pub fn pending_request(&self) -> Option<RequestSeq> {
        match self {
            ProjectsView::Loading { request, .. } => Some(*request),
            _ => None,
        }
    }
}

/// Events that drive the project view.
#[derive(Debug, Clone, PartialEq)]
pub enum ProjectsEvent {
    /// The page locale changed (or the first load was requested).
    LocaleChanged {
        locale: LocaleCode,
        request: RequestSeq,
    },
    /// A fetch settled. Failed fetches arrive as empty collections.
    Loaded {
        request: RequestSeq,
        collections: ProjectCollections,
    },
    FilterSelected { category: String },
    /// Selecting `None` is the same as clearing the selection.
    ProjectSelected { project: Option<Project> },
    SelectionCleared,
}

/// Side-effects produced by state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectsAction {
    FetchProjects {
        locale: LocaleCode,
        request: RequestSeq,
    },
}

/// Pure project view state machine.
pub struct ProjectsStateMachine;

impl ProjectsStateMachine {
    pub fn transition(state: ProjectsView, event: ProjectsEvent) -> (ProjectsView, Vec<ProjectsAction>) {
        match (state, event) {
            (_, ProjectsEvent::LocaleChanged { locale, request }) => (
                ProjectsView::Loading {
                    locale: locale.clone(),
                    request,
                },
                vec![ProjectsAction::FetchProjects { locale, request }],
            ),
            (
                ProjectsView::Loading { locale, request },
                ProjectsEvent::Loaded {
                    request: settled,
                    collections,
                },
            ) => {
                if settled != request {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(%settled, pending = %request, "discarding stale project result");
                    return (ProjectsView::Loading { locale, request }, Vec::new());
                }
                (
                    ProjectsView::Ready(ProjectCatalog::new(locale, collections)),
                    Vec::new(),
                )
            }
            (ProjectsView::Ready(catalog), ProjectsEvent::FilterSelected { category }) => (
                ProjectsView::Ready(catalog.with_filter(CategoryFilter::from_label(&category))),
                Vec::new(),
            ),
            (
                ProjectsView::Detail { catalog, selected },
                ProjectsEvent::FilterSelected { category },
            ) => (
                ProjectsView::Detail {
                    catalog: catalog.with_filter(CategoryFilter::from_label(&category)),
                    selected,
                },
                Vec::new(),
            ),
            (
                ProjectsView::Ready(catalog),
                ProjectsEvent::ProjectSelected {
                    project: Some(project),
                },
            )
            | (
                ProjectsView::Detail { catalog, .. },
                ProjectsEvent::ProjectSelected {
                    project: Some(project),
                },
            ) => (
                ProjectsView::Detail {
                    catalog,
                    selected: project,
                },
                Vec::new(),
            ),
            (ProjectsView::Detail { catalog, .. }, ProjectsEvent::SelectionCleared)
            | (
                ProjectsView::Detail { catalog, .. },
                ProjectsEvent::ProjectSelected { project: None },
            ) => (ProjectsView::Ready(catalog), Vec::new()),
            (state, _) => (state, Vec::new()),
        }
    }
}
