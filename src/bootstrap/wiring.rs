//! Adapter construction and dependency injection.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use folio_app::{AppDeps, AppOptions, FolioApp};
use folio_core::{FolioConfig, ImageResolver, Locale, LocaleCode};
use folio_infra::{HttpContactSender, JsonMessageCatalog, SanityContentRepository, SystemClock};

/// Build every port adapter from configuration.
pub fn build_deps(config: &FolioConfig) -> anyhow::Result<AppDeps> {
    let content = SanityContentRepository::new(&config.content)
        .context("Failed to create content repository")?;
    let contact_sender =
        HttpContactSender::new(&config.contact).context("Failed to create contact sender")?;

    Ok(AppDeps {
        content: Arc::new(content),
        message_catalog: Arc::new(JsonMessageCatalog::new(&config.messages.dir)),
        contact_sender: Arc::new(contact_sender),
        clock: Arc::new(SystemClock),
    })
}

/// Application options derived from configuration.
pub fn app_options(config: &FolioConfig) -> AppOptions {
    let images = &config.images;
    // Unknown codes fall back to the default locale for the first render.
    let default_locale = Locale::from_code(&config.messages.default_locale)
        .unwrap_or_default()
        .to_code();

    AppOptions {
        content_timeout: Duration::from_millis(config.content.timeout_ms),
        fallback_locale: LocaleCode::from_str(&config.messages.default_locale),
        initial_locale: default_locale,
        card_images: ImageResolver::new(&images.card_placeholder)
            .with_title_fallbacks(images.title_fallbacks.clone()),
        detail_images: ImageResolver::new(&images.detail_placeholder)
            .with_title_fallbacks(images.title_fallbacks.clone()),
        scroll: config.navigation.clone(),
    }
}

/// Wire the application from configuration.
pub fn build_app(config: &FolioConfig) -> anyhow::Result<FolioApp> {
    let deps = build_deps(config)?;
    tracing::info!(
        dataset = %config.content.dataset,
        cdn = config.content.use_cdn,
        messages = %config.messages.dir.display(),
        "application wired"
    );
    Ok(FolioApp::new(deps, app_options(config)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{ImageRef, Project, ProjectId};

    fn bare_project(title: &str) -> Project {
        Project {
            id: ProjectId::from_str("p"),
            title: title.to_string(),
            category: "Web Design".to_string(),
            description: String::new(),
            technologies: Vec::new(),
            website: String::new(),
            github: None,
            image: ImageRef::Absent,
            featured: false,
            nordcode: false,
            order: None,
        }
    }

    #[test]
    fn test_options_carry_configured_images() {
        let options = app_options(&FolioConfig::default());

        assert_eq!(
            options.card_images.resolve(&bare_project("Olav Solberg AS")),
            "/olavsolberg.png"
        );
        assert_eq!(
            options.card_images.resolve(&bare_project("Anything")),
            "/api/placeholder/400/300"
        );
        assert_eq!(
            options.detail_images.resolve(&bare_project("Anything")),
            "/api/placeholder/800/600"
        );
        assert_eq!(options.content_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_unknown_default_locale_still_renders_english_first() {
        let mut config = FolioConfig::default();
        config.messages.default_locale = "xx".to_string();

        let options = app_options(&config);

        assert_eq!(options.initial_locale.as_str(), "en");
        assert_eq!(options.fallback_locale.as_str(), "xx");
    }

    #[tokio::test]
    async fn test_build_app_from_defaults() {
        let app = build_app(&FolioConfig::default()).unwrap();

        assert!(app.projects().is_loading());
        assert_eq!(app.scroll_tracker().state().active_section.as_str(), "hero");
    }
}
