//! Scroll tracking.
//!
//! Translates the vertical scroll offset into discrete navigation state. The
//! active section is the first measured section whose `[top, bottom)` span
//! contains `offset + header_offset`; when no section matches the previous
//! one is kept.

use serde::{Deserialize, Serialize};

use super::items::{nav_items, NavItem, DEFAULT_SECTIONS, HERO};
use crate::ids::SectionId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Height compensated for the fixed header, in px.
    pub header_offset: f64,
    /// Offsets below this count as "at top", in px.
    pub top_threshold: f64,
    /// Downward movement tolerated before the bar hides, in px.
    pub hide_margin: f64,
    pub track_progress: bool,
    pub auto_hide: bool,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            header_offset: 100.0,
            top_threshold: 50.0,
            hide_margin: 10.0,
            track_progress: true,
            auto_hide: true,
        }
    }
}

impl ScrollConfig {
    /// Section highlighting and the "scrolled" flag only.
    pub fn basic() -> Self {
        Self {
            track_progress: false,
            auto_hide: false,
            ..Self::default()
        }
    }
}

/// Measured vertical extent of a rendered section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionBounds {
    pub id: SectionId,
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<SectionId>, top: f64, bottom: f64) -> Self {
        Self {
            id: id.into(),
            top,
            bottom,
        }
    }

    pub fn contains(&self, probe: f64) -> bool {
        probe >= self.top && probe < self.bottom
    }
}

/// Section table: the known section ids in document order and the bounds of
/// those currently rendered.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SectionLayout {
    order: Vec<SectionId>,
    measured: Vec<SectionBounds>,
}

impl SectionLayout {
    pub fn new(ids: impl IntoIterator<Item = SectionId>) -> Self {
        Self {
            order: ids.into_iter().collect(),
            measured: Vec::new(),
        }
    }

    pub fn with_default_sections() -> Self {
        Self::new(DEFAULT_SECTIONS.iter().map(|s| SectionId::from_str(s)))
    }

    /// Build a fully measured table from explicit bounds.
    pub fn from_bounds(bounds: impl IntoIterator<Item = SectionBounds>) -> Self {
        let measured: Vec<SectionBounds> = bounds.into_iter().collect();
        Self {
            order: measured.iter().map(|b| b.id.clone()).collect(),
            measured,
        }
    }

    pub fn first(&self) -> Option<&SectionId> {
        self.order.first()
    }

    pub fn ids(&self) -> &[SectionId] {
        &self.order
    }

    /// Measured bounds in document order; unrendered sections are absent.
    pub fn bounds(&self) -> &[SectionBounds] {
        &self.measured
    }

    /// Record the geometry of a rendered section. Returns `false` for ids not
    /// in the table.
    pub fn measure(&mut self, id: &SectionId, top: f64, height: f64) -> bool {
        let Some(rank) = self.rank(id) else {
            return false;
        };
        self.measured.retain(|b| b.id != *id);
        let at = self
            .measured
            .iter()
            .position(|b| self.rank(&b.id).is_some_and(|r| r > rank))
            .unwrap_or(self.measured.len());
        self.measured
            .insert(at, SectionBounds::new(id.clone(), top, top + height.max(0.0)));
        true
    }

    /// Drop the geometry of a section that is no longer rendered.
    pub fn forget(&mut self, id: &SectionId) {
        self.measured.retain(|b| b.id != *id);
    }

    fn rank(&self, id: &SectionId) -> Option<usize> {
        self.order.iter().position(|s| s == id)
    }
}

/// First section containing `probe`, in iteration order.
pub fn active_section_at<'a>(
    probe: f64,
    sections: impl IntoIterator<Item = &'a SectionBounds>,
) -> Option<&'a SectionId> {
    sections
        .into_iter()
        .find(|bounds| bounds.contains(probe))
        .map(|bounds| &bounds.id)
}

/// Scroll position as a ratio in `[0, 1]`. A document that does not scroll
/// reports 0.
pub fn scroll_progress(offset: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if !(scrollable > 0.0) {
        return 0.0;
    }
    (offset.max(0.0) / scrollable).clamp(0.0, 1.0)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavState {
    pub active_section: SectionId,
    pub progress: f64,
    pub visible: bool,
    /// Within the top threshold; the bar is always shown here.
    pub at_top: bool,
    /// Strictly past the top threshold; drives the opaque bar style.
    pub scrolled: bool,
    pub menu_open: bool,
}

impl NavState {
    pub fn new(active_section: SectionId) -> Self {
        Self {
            active_section,
            progress: 0.0,
            visible: true,
            at_top: true,
            scrolled: false,
            menu_open: false,
        }
    }

    /// Whether the bar should switch to its opaque "scrolled" look.
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }
}

/// One scroll sample.
#[derive(Debug, Clone, Copy)]
pub struct ScrollInput<'a> {
    pub current_offset: f64,
    pub last_offset: f64,
    pub sections: &'a [SectionBounds],
    pub document_height: f64,
    pub viewport_height: f64,
}

/// Compute the navigation state after a scroll sample.
///
/// Pure: identical inputs yield identical outputs, so it can run on every frame.
pub fn on_scroll(config: &ScrollConfig, previous: &NavState, input: &ScrollInput<'_>) -> NavState {
    let current = input.current_offset.max(0.0);
    let last = input.last_offset.max(0.0);

    let active_section = active_section_at(current + config.header_offset, input.sections)
        .cloned()
        .unwrap_or_else(|| previous.active_section.clone());

    let progress = if config.track_progress {
        scroll_progress(current, input.document_height, input.viewport_height)
    } else {
        previous.progress
    };

    let at_top = current < config.top_threshold;
    let scrolled = current > config.top_threshold;
    let mut visible = previous.visible;
    let mut menu_open = previous.menu_open;
    if !config.auto_hide || at_top || current < last {
        visible = true;
    } else if current > last + config.hide_margin {
        visible = false;
        menu_open = false;
    }

    NavState {
        active_section,
        progress,
        visible,
        at_top,
        scrolled,
        menu_open,
    }
}

/// Stateful wrapper around [`on_scroll`] that remembers the last offset.
#[derive(Debug, Clone)]
pub struct ScrollTracker {
    config: ScrollConfig,
    layout: SectionLayout,
    state: NavState,
    last_offset: f64,
}

impl ScrollTracker {
    pub fn new(config: ScrollConfig, layout: SectionLayout) -> Self {
        let first = layout
            .first()
            .cloned()
            .unwrap_or_else(|| SectionId::from_str(HERO));
        Self {
            config,
            layout,
            state: NavState::new(first),
            last_offset: 0.0,
        }
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    pub fn state(&self) -> &NavState {
        &self.state
    }

    pub fn layout(&self) -> &SectionLayout {
        &self.layout
    }

    pub fn measure(&mut self, id: &SectionId, top: f64, height: f64) -> bool {
        self.layout.measure(id, top, height)
    }

    pub fn forget(&mut self, id: &SectionId) {
        self.layout.forget(id);
    }

    pub fn on_scroll(&mut self, offset: f64, document_height: f64, viewport_height: f64) -> &NavState {
        let input = ScrollInput {
            current_offset: offset,
            last_offset: self.last_offset,
            sections: self.layout.bounds(),
            document_height,
            viewport_height,
        };
        self.state = on_scroll(&self.config, &self.state, &input);
        self.last_offset = offset.max(0.0);
        &self.state
    }

    pub fn toggle_menu(&mut self) {
        self.state.menu_open = !self.state.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.state.menu_open = false;
    }

    pub fn nav_items(&self) -> Vec<NavItem> {
        nav_items(&self.state.active_section)
    }
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(ScrollConfig::default(), SectionLayout::with_default_sections())
    }
}
