//! About-section content: technical expertise groups and the localized
//! about document.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::ids::LocaleCode;

/// A group of skills shown under the "Technical Expertise" heading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalExpertise {
    pub id: String,
    /// `frontend`, `backend` or `tools`; other values pass through.
    pub category: String,
    pub skills: Vec<String>,
    /// Accent colour name (`teal`, `emerald`, `cyan`).
    pub color: String,
    pub order: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistic {
    /// Display value such as `"2+"`.
    pub value: String,
    pub label: String,
    pub color: String,
    pub order: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct About {
    pub id: String,
    pub passionate_title: String,
    pub passionate_subtitle: String,
    pub description1: String,
    pub description2: String,
    pub statistics: Vec<Statistic>,
    pub lang: Option<LocaleCode>,
}

impl About {
    pub fn has_statistics(&self) -> bool {
        !self.statistics.is_empty()
    }

    /// Order statistics for display: ascending `order`, unordered ones last.
    /// Ties keep their document order.
    pub fn sort_statistics(&mut self) {
        self.statistics
            .sort_by(|a, b| display_order(a.order, b.order));
    }
}

fn display_order(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Everything the about section renders. Empty when the content store failed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AboutContent {
    pub expertise: Vec<TechnicalExpertise>,
    pub about: Option<About>,
}

impl AboutContent {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.expertise.is_empty() && self.about.is_none()
    }
}
