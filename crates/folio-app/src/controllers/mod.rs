//! Stateful controllers that own view state between user events.
//!
//! Controllers are cheap to share behind an `Arc`. Each one tags the fetches
//! it starts so that a slow, superseded response can never overwrite the
//! state of a newer locale.

mod about;
mod projects;
mod sequencer;

pub use about::{AboutController, AboutState};
pub use projects::ProjectsController;
pub use sequencer::RequestSequencer;

/// What happened to the result of a fetch once it settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The result was applied to the view state.
    Applied,
    /// A newer request was issued while this one was in flight; the result
    /// was dropped.
    Superseded,
}

impl LoadOutcome {
    pub fn is_applied(self) -> bool {
        matches!(self, LoadOutcome::Applied)
    }
}
