//! Raw documents as returned by the content store, and their mapping to the
//! domain model.
//!
//! The store answers `null` for any field that was never filled in, so every
//! field is optional here and defaults are applied while mapping.

use folio_core::{About, ImageRef, LocaleCode, Project, ProjectId, Statistic, TechnicalExpertise};
use serde::Deserialize;

/// `{"result": ...}` envelope around every query response.
#[derive(Debug, Deserialize)]
pub(crate) struct QueryResponse<T> {
    pub result: T,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProjectDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub website: Option<String>,
    pub github: Option<String>,
    pub image: Option<ImageDocument>,
    pub featured: Option<bool>,
    pub nordcode: Option<bool>,
    pub order: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ImageDocument {
    pub asset: Option<AssetDocument>,
    pub alt: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct AssetDocument {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    #[serde(rename = "_ref")]
    pub reference: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ExpertiseDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub category: Option<String>,
    pub skills: Option<Vec<String>>,
    pub color: Option<String>,
    pub order: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AboutDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub passionate_title: Option<String>,
    pub passionate_subtitle: Option<String>,
    pub description1: Option<String>,
    pub description2: Option<String>,
    pub statistics: Option<Vec<StatisticDocument>>,
    #[serde(rename = "__i18n_lang")]
    pub lang: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StatisticDocument {
    pub value: Option<String>,
    pub label: Option<String>,
    pub color: Option<String>,
    pub order: Option<f64>,
}

fn image_ref(image: Option<ImageDocument>) -> ImageRef {
    let Some(ImageDocument { asset, alt }) = image else {
        return ImageRef::Absent;
    };
    match asset {
        Some(AssetDocument { url: Some(url), .. }) => ImageRef::Resolved { url, alt },
        Some(AssetDocument {
            id: Some(asset_ref), ..
        })
        | Some(AssetDocument {
            reference: Some(asset_ref),
            ..
        }) => ImageRef::Unresolved { asset_ref, alt },
        _ => ImageRef::Absent,
    }
}

impl From<ProjectDocument> for Project {
    fn from(doc: ProjectDocument) -> Self {
        Project {
            id: ProjectId::from(doc.id),
            title: doc.title.unwrap_or_default(),
            category: doc.category.unwrap_or_default(),
            description: doc.description.unwrap_or_default(),
            technologies: doc.technologies.unwrap_or_default(),
            website: doc.website.unwrap_or_default(),
            github: doc.github.filter(|g| !g.is_empty()),
            image: image_ref(doc.image),
            featured: doc.featured.unwrap_or(false),
            nordcode: doc.nordcode.unwrap_or(false),
            order: doc.order,
        }
    }
}

impl From<ExpertiseDocument> for TechnicalExpertise {
    fn from(doc: ExpertiseDocument) -> Self {
        TechnicalExpertise {
            id: doc.id,
            category: doc.category.unwrap_or_default(),
            skills: doc.skills.unwrap_or_default(),
            color: doc.color.unwrap_or_default(),
            order: doc.order,
        }
    }
}

impl From<AboutDocument> for About {
    fn from(doc: AboutDocument) -> Self {
        let mut about = About {
            id: doc.id,
            passionate_title: doc.passionate_title.unwrap_or_default(),
            passionate_subtitle: doc.passionate_subtitle.unwrap_or_default(),
            description1: doc.description1.unwrap_or_default(),
            description2: doc.description2.unwrap_or_default(),
            statistics: doc
                .statistics
                .unwrap_or_default()
                .into_iter()
                .map(|s| Statistic {
                    value: s.value.unwrap_or_default(),
                    label: s.label.unwrap_or_default(),
                    color: s.color.unwrap_or_default(),
                    order: s.order,
                })
                .collect(),
            lang: doc.lang.map(LocaleCode::from),
        };
        about.sort_statistics();
        about
    }
}
