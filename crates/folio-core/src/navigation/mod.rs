//! Navigation chrome state: which section is active, how far the page is
//! scrolled, and whether the bar is shown.

pub mod items;
pub mod scroll;

pub use items::{nav_items, shows_navigation, NavItem, DEFAULT_SECTIONS};
pub use scroll::{
    active_section_at, on_scroll, scroll_progress, NavState, ScrollConfig, ScrollInput,
    ScrollTracker, SectionBounds, SectionLayout,
};
