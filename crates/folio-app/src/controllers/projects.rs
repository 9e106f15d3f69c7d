use std::sync::{Mutex, MutexGuard, PoisonError};

use folio_core::project::{ProjectsAction, ProjectsEvent, ProjectsStateMachine};
use folio_core::{LocaleCode, Project, ProjectCollections, ProjectId, ProjectsView, RequestSeq};

use super::{LoadOutcome, RequestSequencer};
use crate::usecases::LoadProjects;

/// Owns the "All Projects" view state and runs the fetches it asks for.
pub struct ProjectsController {
    load: LoadProjects,
    sequencer: RequestSequencer,
    view: Mutex<ProjectsView>,
}

impl ProjectsController {
    pub fn new(load: LoadProjects, locale: LocaleCode) -> Self {
        Self {
            load,
            sequencer: RequestSequencer::new(),
            view: Mutex::new(ProjectsView::initial(locale)),
        }
    }

    /// Snapshot of the current view state.
    pub fn view(&self) -> ProjectsView {
        self.lock().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.lock().is_loading()
    }

    /// Reload for a locale. Resolves once this request's result has either
    /// been applied or discarded in favour of a newer one.
    pub async fn change_locale(&self, locale: LocaleCode) -> LoadOutcome {
        let request = self.sequencer.issue();
        let actions = self.dispatch(ProjectsEvent::LocaleChanged { locale, request });

        let mut outcome = LoadOutcome::Superseded;
        for action in actions {
            match action {
                ProjectsAction::FetchProjects { locale, request } => {
                    let collections = self.load.execute(&locale).await;
                    outcome = self.apply_loaded(request, collections);
                }
            }
        }
        outcome
    }

    pub fn select_category(&self, category: &str) {
        self.dispatch(ProjectsEvent::FilterSelected {
            category: category.to_string(),
        });
    }

    pub fn select_project(&self, project: Option<Project>) {
        self.dispatch(ProjectsEvent::ProjectSelected { project });
    }

    /// Open a project from the loaded catalog. Returns false when the id is
    /// not in the catalog.
    pub fn select_project_by_id(&self, id: &ProjectId) -> bool {
        let project = self
            .lock()
            .catalog()
            .and_then(|catalog| catalog.find(id))
            .cloned();
        let found = project.is_some();
        if found {
            self.select_project(project);
        }
        found
    }

    pub fn clear_selection(&self) {
        self.dispatch(ProjectsEvent::SelectionCleared);
    }

    fn apply_loaded(&self, request: RequestSeq, collections: ProjectCollections) -> LoadOutcome {
        let mut view = self.lock();
        if view.pending_request() != Some(request) {
            tracing::debug!(%request, latest = %self.sequencer.latest(), "project result superseded");
            return LoadOutcome::Superseded;
        }
        let (next, _) = ProjectsStateMachine::transition(
            view.clone(),
            ProjectsEvent::Loaded {
                request,
                collections,
            },
        );
        *view = next;
        LoadOutcome::Applied
    }

    fn dispatch(&self, event: ProjectsEvent) -> Vec<ProjectsAction> {
        let mut view = self.lock();
        let (next, actions) = ProjectsStateMachine::transition(view.clone(), event);
        *view = next;
        actions
    }

    fn lock(&self) -> MutexGuard<'_, ProjectsView> {
        self.view.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
