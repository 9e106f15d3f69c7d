use serde::Serialize;

use crate::ids::SectionId;

pub const HERO: &str = "hero";
pub const ABOUT: &str = "about";
pub const WORK: &str = "work";
pub const SERVICES: &str = "services";
pub const CONTACT: &str = "contact";

/// Page sections in document order.
pub const DEFAULT_SECTIONS: [&str; 5] = [HERO, ABOUT, WORK, SERVICES, CONTACT];

/// Routes under this prefix host the content studio and render no site navigation.
const STUDIO_PREFIX: &str = "/studio";

/// One entry of the navigation bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Message key under the `nav` namespace.
    pub key: &'static str,
    pub section: SectionId,
    pub is_active: bool,
    /// Rendered as the call-to-action button rather than a plain link.
    pub is_cta: bool,
}

impl NavItem {
    pub fn href(&self) -> String {
        format!("#{}", self.section)
    }

    pub fn message_key(&self) -> String {
        format!("nav.{}", self.key)
    }
}

/// Navigation entries with the one matching `active` flagged.
pub fn nav_items(active: &SectionId) -> Vec<NavItem> {
    const LINKS: [(&str, &str, bool); 5] = [
        ("home", HERO, false),
        ("about", ABOUT, false),
        ("work", WORK, false),
        ("services", SERVICES, false),
        ("contact", CONTACT, true),
    ];

    LINKS
        .iter()
        .map(|&(key, section, is_cta)| NavItem {
            key,
            section: SectionId::from_str(section),
            is_active: active.as_str() == section,
            is_cta,
        })
        .collect()
}

pub fn shows_navigation(path: &str) -> bool {
    !path.starts_with(STUDIO_PREFIX)
}
