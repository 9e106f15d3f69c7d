//! Displayable image locator for a project.

use std::collections::HashMap;

use super::model::{ImageRef, Project};

/// Placeholder used by list cards.
pub const CARD_PLACEHOLDER: &str = "/api/placeholder/400/300";
/// Placeholder used by the detail view and the project strip.
pub const DETAIL_PLACEHOLDER: &str = "/api/placeholder/800/600";

/// Resolves a project's image to something the view can display.
///
/// Resolution never fails and performs no I/O: a resolved asset URL wins, an
/// unresolved reference or empty URL gets the placeholder, and a project with
/// no image at all may be mapped to a bundled static asset by its title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageResolver {
    placeholder: String,
    title_fallbacks: HashMap<String, String>,
}

impl ImageResolver {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            title_fallbacks: HashMap::new(),
        }
    }

    pub fn card() -> Self {
        Self::new(CARD_PLACEHOLDER)
    }

    pub fn detail() -> Self {
        Self::new(DETAIL_PLACEHOLDER)
    }

    pub fn with_title_fallback(mut self, title: impl Into<String>, locator: impl Into<String>) -> Self {
        self.title_fallbacks.insert(title.into(), locator.into());
        self
    }

    pub fn with_title_fallbacks<T, L>(mut self, fallbacks: impl IntoIterator<Item = (T, L)>) -> Self
    where
        T: Into<String>,
        L: Into<String>,
    {
        self.title_fallbacks
            .extend(fallbacks.into_iter().map(|(t, l)| (t.into(), l.into())));
        self
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn resolve<'a>(&'a self, project: &'a Project) -> &'a str {
        match &project.image {
            ImageRef::Resolved { url, .. } if !url.trim().is_empty() => url.as_str(),
            ImageRef::Resolved { .. } | ImageRef::Unresolved { .. } => self.placeholder.as_str(),
            ImageRef::Absent => self
                .title_fallbacks
                .get(&project.title)
                .map(String::as_str)
                .unwrap_or(self.placeholder.as_str()),
        }
    }

    /// Whether `locator` is this resolver's placeholder, i.e. the view should
    /// render its fallback tile instead of an image.
    pub fn is_placeholder(&self, locator: &str) -> bool {
        locator == self.placeholder
    }
}

impl Default for ImageResolver {
    fn default() -> Self {
        Self::card()
    }
}
