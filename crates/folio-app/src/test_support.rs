//! In-memory port fakes shared by the unit tests of this crate.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use folio_core::ports::{
    ClockPort, ContactSendError, ContactSenderPort, ContentError, ContentRepositoryPort,
    MessageCatalogError, MessageCatalogPort,
};
use folio_core::{
    About, ContactSubmission, ImageRef, LocaleCode, Messages, Project, ProjectId,
    TechnicalExpertise,
};

pub(crate) fn project(id: &str, category: &str, featured: bool) -> Project {
    Project {
        id: ProjectId::from_str(id),
        title: format!("Project {id}"),
        category: category.to_string(),
        description: format!("About {id}"),
        technologies: vec!["Next.js".to_string(), "Sanity".to_string()],
        website: format!("https://{id}.example.com"),
        github: None,
        image: ImageRef::Absent,
        featured,
        nordcode: false,
        order: None,
    }
}

pub(crate) fn about(lang: &str) -> About {
    About {
        id: format!("about-{lang}"),
        passionate_title: format!("Title {lang}"),
        passionate_subtitle: String::new(),
        description1: String::new(),
        description2: String::new(),
        statistics: Vec::new(),
        lang: Some(LocaleCode::from_str(lang)),
    }
}

#[derive(Default)]
pub(crate) struct FakeContent {
    pub projects: HashMap<String, Vec<Project>>,
    pub about: HashMap<String, About>,
    pub expertise: Vec<TechnicalExpertise>,
    pub fail_all: bool,
    pub fail_featured: bool,
    pub delays: HashMap<String, Duration>,
    pub calls: AtomicUsize,
}

impl FakeContent {
    pub fn with_projects(mut self, lang: &str, projects: Vec<Project>) -> Self {
        self.projects.insert(lang.to_string(), projects);
        self
    }

    pub fn with_about(mut self, lang: &str) -> Self {
        self.about.insert(lang.to_string(), about(lang));
        self
    }

    pub fn with_delay(mut self, lang: &str, delay: Duration) -> Self {
        self.delays.insert(lang.to_string(), delay);
        self
    }

    pub fn failing() -> Self {
        Self {
            fail_all: true,
            ..Self::default()
        }
    }

    async fn wait(&self, lang: &LocaleCode) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delays.get(lang.as_str()) {
            tokio::time::sleep(*delay).await;
        }
    }
}

#[async_trait]
impl ContentRepositoryPort for FakeContent {
    async fn all_projects(&self, lang: &LocaleCode) -> Result<Vec<Project>, ContentError> {
        self.wait(lang).await;
        if self.fail_all {
            return Err(ContentError::Transport("connection refused".into()));
        }
        Ok(self.projects.get(lang.as_str()).cloned().unwrap_or_default())
    }

    async fn featured_projects(&self, lang: &LocaleCode) -> Result<Vec<Project>, ContentError> {
        self.wait(lang).await;
        if self.fail_all || self.fail_featured {
            return Err(ContentError::Status {
                status: 500,
                message: "internal error".into(),
            });
        }
        Ok(self
            .projects
            .get(lang.as_str())
            .map(|all| all.iter().filter(|p| p.featured).cloned().collect())
            .unwrap_or_default())
    }

    async fn technical_expertise(&self) -> Result<Vec<TechnicalExpertise>, ContentError> {
        if self.fail_all {
            return Err(ContentError::Decode("unexpected token".into()));
        }
        Ok(self.expertise.clone())
    }

    async fn about(&self, lang: &LocaleCode) -> Result<Option<About>, ContentError> {
        self.wait(lang).await;
        if self.fail_all {
            return Err(ContentError::Transport("connection refused".into()));
        }
        Ok(self.about.get(lang.as_str()).cloned())
    }
}

#[derive(Default)]
pub(crate) struct FakeCatalog {
    pub catalogs: HashMap<String, Messages>,
    pub requested: Mutex<Vec<String>>,
}

impl FakeCatalog {
    pub fn with(mut self, locale: &str, entries: &[(&str, &str)]) -> Self {
        self.catalogs.insert(
            locale.to_string(),
            Messages::from_entries(entries.iter().copied()),
        );
        self
    }
}

#[async_trait]
impl MessageCatalogPort for FakeCatalog {
    async fn load(&self, locale: &LocaleCode) -> Result<Messages, MessageCatalogError> {
        self.requested
            .lock()
            .unwrap()
            .push(locale.as_str().to_string());
        self.catalogs
            .get(locale.as_str())
            .cloned()
            .ok_or_else(|| MessageCatalogError::NotFound(locale.to_string()))
    }
}

pub(crate) struct FakeSender {
    pub outcome: Result<(), ContactSendError>,
    pub sent: Mutex<Vec<ContactSubmission>>,
}

impl FakeSender {
    pub fn answering(outcome: Result<(), ContactSendError>) -> Self {
        Self {
            outcome,
            sent: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ContactSenderPort for FakeSender {
    async fn send(&self, submission: &ContactSubmission) -> Result<(), ContactSendError> {
        self.sent.lock().unwrap().push(submission.clone());
        self.outcome.clone()
    }
}

pub(crate) struct FixedClock(pub i64);

impl ClockPort for FixedClock {
    fn now_ms(&self) -> i64 {
        self.0
    }
}
