use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use folio_core::config::ContentConfig;
use folio_core::ports::{ContentError, ContentRepositoryPort};
use folio_core::{About, LocaleCode, Project, TechnicalExpertise};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::documents::{
    AboutDocument, ExpertiseDocument, ProjectDocument, QueryResponse,
};
use super::queries;

/// Host serving queries for `config`, without a trailing slash.
pub fn query_base_url(config: &ContentConfig) -> String {
    if let Some(base) = &config.api_base_url {
        return base.trim_end_matches('/').to_string();
    }
    let host = if config.use_cdn {
        "apicdn.sanity.io"
    } else {
        "api.sanity.io"
    };
    format!("https://{}.{}", config.project_id, host)
}

/// Read-only client for the Sanity HTTP query API.
pub struct SanityContentRepository {
    http: reqwest::Client,
    query_url: String,
}

impl SanityContentRepository {
    pub fn new(config: &ContentConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .context("failed to build content store HTTP client")?;
        Ok(Self::with_client(http, config))
    }

    pub fn with_client(http: reqwest::Client, config: &ContentConfig) -> Self {
        let version = config.api_version.trim_start_matches('v');
        let query_url = format!(
            "{}/v{}/data/query/{}",
            query_base_url(config),
            version,
            config.dataset
        );
        Self { http, query_url }
    }

    pub fn query_url(&self) -> &str {
        &self.query_url
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        query: &str,
        lang: Option<&LocaleCode>,
    ) -> Result<T, ContentError> {
        let mut params = vec![("query", query.to_string())];
        if let Some(lang) = lang {
            // Parameters are JSON literals.
            params.push(("$lang", serde_json::Value::from(lang.as_str()).to_string()));
        }

        let response = self
            .http
            .get(&self.query_url)
            .query(&params)
            .send()
            .await
            .map_err(|e| ContentError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| ContentError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(ContentError::Status {
                status: status.as_u16(),
                message: String::from_utf8_lossy(&body).trim().to_string(),
            });
        }

        let envelope: QueryResponse<T> =
            serde_json::from_slice(&body).map_err(|e| ContentError::Decode(e.to_string()))?;
        Ok(envelope.result)
    }

    async fn projects(&self, query: &str, lang: &LocaleCode) -> Result<Vec<Project>, ContentError> {
        let docs: Option<Vec<ProjectDocument>> = self.fetch(query, Some(lang)).await?;
        let projects: Vec<Project> = docs
            .unwrap_or_default()
            .into_iter()
            .map(Project::from)
            .collect();
        debug!(lang = %lang, count = projects.len(), "fetched projects");
        Ok(projects)
    }
}

#[async_trait]
impl ContentRepositoryPort for SanityContentRepository {
    async fn all_projects(&self, lang: &LocaleCode) -> Result<Vec<Project>, ContentError> {
        self.projects(&queries::all_projects(), lang).await
    }

    async fn featured_projects(&self, lang: &LocaleCode) -> Result<Vec<Project>, ContentError> {
        self.projects(&queries::featured_projects(), lang).await
    }

    async fn technical_expertise(&self) -> Result<Vec<TechnicalExpertise>, ContentError> {
        let docs: Option<Vec<ExpertiseDocument>> =
            self.fetch(queries::TECHNICAL_EXPERTISE, None).await?;
        Ok(docs
            .unwrap_or_default()
            .into_iter()
            .map(TechnicalExpertise::from)
            .collect())
    }

    async fn about(&self, lang: &LocaleCode) -> Result<Option<About>, ContentError> {
        let doc: Option<AboutDocument> = self.fetch(queries::ABOUT, Some(lang)).await?;
        Ok(doc.map(About::from))
    }
}
