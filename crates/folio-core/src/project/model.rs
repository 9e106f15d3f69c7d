use serde::{Deserialize, Serialize};

use crate::ids::ProjectId;

/// Categories offered by the content schema. Other values are passed through.
pub const KNOWN_CATEGORIES: [&str; 6] = [
    "Web Development",
    "Mobile App",
    "Web Design",
    "Data Visualization",
    "E-commerce",
    "Other",
];

/// Image attached to a project, as far as the content store resolved it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ImageRef {
    /// Asset dereferenced to a CDN URL.
    Resolved { url: String, alt: Option<String> },
    /// Only the asset reference is known.
    Unresolved {
        asset_ref: String,
        alt: Option<String>,
    },
    /// No image field, or an image without an asset.
    #[default]
    Absent,
}

impl ImageRef {
    pub fn alt(&self) -> Option<&str> {
        match self {
            ImageRef::Resolved { alt, .. } | ImageRef::Unresolved { alt, .. } => alt.as_deref(),
            ImageRef::Absent => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, ImageRef::Absent)
    }
}

/// One portfolio work item, as returned for a single locale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub category: String,
    pub description: String,
    /// Display order is significant.
    pub technologies: Vec<String>,
    pub website: String,
    pub github: Option<String>,
    #[serde(default)]
    pub image: ImageRef,
    pub featured: bool,
    /// Delivered through Nordcode AS.
    pub nordcode: bool,
    /// Sort key applied by the content store (ascending).
    pub order: Option<f64>,
}

impl Project {
    pub fn has_known_category(&self) -> bool {
        KNOWN_CATEGORIES.contains(&self.category.as_str())
    }
}

/// Result of one project fetch: the full ordered list and the featured subset.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectCollections {
    pub all: Vec<Project>,
    pub featured: Vec<Project>,
}

impl ProjectCollections {
    pub fn new(all: Vec<Project>, featured: Vec<Project>) -> Self {
        Self { all, featured }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty() && self.featured.is_empty()
    }
}
