//! Application facade handed to the presentation layer.

use std::sync::Arc;
use std::time::Duration;

use folio_core::contact::ContactFormStatus;
use folio_core::ports::MessageCatalogError;
use folio_core::{ContactForm, ImageResolver, LocaleCode, ScrollConfig, ScrollTracker, SectionLayout};

use crate::controllers::{AboutController, LoadOutcome, ProjectsController};
use crate::deps::AppDeps;
use crate::usecases::{
    GetMessages, LoadAboutContent, LoadProjects, LoadedMessages, SubmitContactForm,
    DEFAULT_CONTENT_TIMEOUT,
};

/// Knobs that come from configuration rather than from ports.
#[derive(Debug, Clone)]
pub struct AppOptions {
    pub content_timeout: Duration,
    pub fallback_locale: LocaleCode,
    pub initial_locale: LocaleCode,
    pub card_images: ImageResolver,
    pub detail_images: ImageResolver,
    pub scroll: ScrollConfig,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            content_timeout: DEFAULT_CONTENT_TIMEOUT,
            fallback_locale: folio_core::DEFAULT_LOCALE.to_code(),
            initial_locale: folio_core::DEFAULT_LOCALE.to_code(),
            card_images: ImageResolver::card(),
            detail_images: ImageResolver::detail(),
            scroll: ScrollConfig::default(),
        }
    }
}

/// Result of switching every locale-bound part of the site at once.
#[derive(Debug)]
pub struct LocaleSwitch {
    pub locale: LocaleCode,
    pub projects: LoadOutcome,
    pub about: LoadOutcome,
    pub messages: Result<LoadedMessages, MessageCatalogError>,
}

pub struct FolioApp {
    projects: Arc<ProjectsController>,
    about: Arc<AboutController>,
    messages: GetMessages,
    contact: SubmitContactForm,
    card_images: ImageResolver,
    detail_images: ImageResolver,
    scroll: ScrollConfig,
}

impl FolioApp {
    pub fn new(deps: AppDeps, options: AppOptions) -> Self {
        let AppDeps {
            content,
            message_catalog,
            contact_sender,
            clock,
        } = deps;

        let projects = ProjectsController::new(
            LoadProjects::new(content.clone(), options.content_timeout),
            options.initial_locale.clone(),
        );
        let about = AboutController::new(
            LoadAboutContent::new(content, options.content_timeout),
            options.initial_locale,
        );

        Self {
            projects: Arc::new(projects),
            about: Arc::new(about),
            messages: GetMessages::new(message_catalog, options.fallback_locale),
            contact: SubmitContactForm::new(contact_sender, clock),
            card_images: options.card_images,
            detail_images: options.detail_images,
            scroll: options.scroll,
        }
    }

    pub fn projects(&self) -> Arc<ProjectsController> {
        self.projects.clone()
    }

    pub fn about(&self) -> Arc<AboutController> {
        self.about.clone()
    }

    pub fn messages(&self) -> &GetMessages {
        &self.messages
    }

    pub fn card_images(&self) -> &ImageResolver {
        &self.card_images
    }

    pub fn detail_images(&self) -> &ImageResolver {
        &self.detail_images
    }

    /// A fresh tracker over the default page sections.
    pub fn scroll_tracker(&self) -> ScrollTracker {
        ScrollTracker::new(self.scroll.clone(), SectionLayout::with_default_sections())
    }

    pub async fn submit_contact(&self, form: &mut ContactForm) -> ContactFormStatus {
        self.contact.execute(form).await
    }

    /// Load projects, about content and messages for `locale` concurrently.
    #[tracing::instrument(name = "app.switch_locale", skip(self, locale), fields(locale = %locale))]
    pub async fn switch_locale(&self, locale: LocaleCode) -> LocaleSwitch {
        let (projects, about, messages) = tokio::join!(
            self.projects.change_locale(locale.clone()),
            self.about.change_locale(locale.clone()),
            self.messages.execute(&locale),
        );
        LocaleSwitch {
            locale,
            projects,
            about,
            messages,
        }
    }
}
