use std::sync::{Mutex, MutexGuard, PoisonError};

use folio_core::{AboutContent, LocaleCode};
use serde::Serialize;

use super::{LoadOutcome, RequestSequencer};
use crate::usecases::LoadAboutContent;

/// What the about section renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AboutState {
    pub loading: bool,
    pub locale: LocaleCode,
    pub content: AboutContent,
}

impl AboutState {
    fn initial(locale: LocaleCode) -> Self {
        Self {
            loading: true,
            locale,
            content: AboutContent::empty(),
        }
    }
}

pub struct AboutController {
    load: LoadAboutContent,
    sequencer: RequestSequencer,
    state: Mutex<AboutState>,
}

impl AboutController {
    pub fn new(load: LoadAboutContent, locale: LocaleCode) -> Self {
        Self {
            load,
            sequencer: RequestSequencer::new(),
            state: Mutex::new(AboutState::initial(locale)),
        }
    }

    pub fn state(&self) -> AboutState {
        self.lock().clone()
    }

    /// Content from the previous locale stays visible until the new one
    /// arrives.
    pub async fn change_locale(&self, locale: LocaleCode) -> LoadOutcome {
        let request = self.sequencer.issue();
        {
            let mut state = self.lock();
            if self.sequencer.is_latest(request) {
                state.loading = true;
                state.locale = locale.clone();
            }
        }

        let content = self.load.execute(&locale).await;

        let mut state = self.lock();
        if !self.sequencer.is_latest(request) {
            tracing::debug!(%request, latest = %self.sequencer.latest(), "about result superseded");
            return LoadOutcome::Superseded;
        }
        state.loading = false;
        state.content = content;
        LoadOutcome::Applied
    }

    fn lock(&self) -> MutexGuard<'_, AboutState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;
    use crate::test_support::FakeContent;

    fn controller(content: FakeContent) -> AboutController {
        AboutController::new(
            LoadAboutContent::from_arc(Arc::new(content)),
            LocaleCode::from_str("en"),
        )
    }

    #[tokio::test]
    async fn test_load_applies_content() {
        let controller = controller(FakeContent::default().with_about("en"));
        assert!(controller.state().loading);

        let outcome = controller.change_locale(LocaleCode::from_str("en")).await;

        assert!(outcome.is_applied());
        let state = controller.state();
        assert!(!state.loading);
        assert_eq!(state.content.about.unwrap().passionate_title, "Title en");
    }

    #[tokio::test]
    async fn test_failure_clears_loading() {
        let controller = controller(FakeContent::failing());

        controller.change_locale(LocaleCode::from_str("en")).await;

        let state = controller.state();
        assert!(!state.loading);
        assert!(state.content.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_only_latest_locale_is_applied() {
        let content = FakeContent::default()
            .with_about("en")
            .with_about("no")
            .with_delay("en", Duration::from_millis(300));
        let controller = controller(content);

        let (en, no) = tokio::join!(
            controller.change_locale(LocaleCode::from_str("en")),
            async {
                tokio::time::sleep(Duration::from_millis(1)).await;
                controller.change_locale(LocaleCode::from_str("no")).await
            }
        );

        assert_eq!(en, LoadOutcome::Superseded);
        assert_eq!(no, LoadOutcome::Applied);
        let state = controller.state();
        assert_eq!(state.locale.as_str(), "no");
        assert!(!state.loading);
        assert_eq!(state.content.about.unwrap().id, "about-no");
    }
}
