use std::sync::Arc;

use async_trait::async_trait;
use models::{ContentSection, NewContentSection};
use tokio::sync::RwLock;
use tracing::debug;

use crate::content::{defaults::default_sections, repository::ContentRepository};
use crate::errors::ServiceError;

/// Content sections kept in insertion order. A replaced section keeps its position.
#[derive(Clone, Default)]
pub struct InMemoryContentStore {
    inner: Arc<RwLock<Vec<ContentSection>>>,
}

impl InMemoryContentStore {
    /// Empty store, no default sections.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding the default `about` and `contact` sections.
    pub fn seeded() -> Self {
        Self::with_sections(default_sections())
    }

    pub fn with_sections(sections: Vec<NewContentSection>) -> Self {
        let mut records: Vec<ContentSection> = Vec::with_capacity(sections.len());
        for input in sections {
            match records.iter_mut().find(|r| r.section == input.section) {
                Some(existing) => existing.replace_content(input.content),
                None => records.push(ContentSection::new(input)),
            }
        }
        Self { inner: Arc::new(RwLock::new(records)) }
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}

#[async_trait]
impl ContentRepository for InMemoryContentStore {
    async fn get(&self, section: &str) -> Result<Option<ContentSection>, ServiceError> {
        let records = self.inner.read().await;
        Ok(records.iter().find(|r| r.section == section).cloned())
    }

    async fn get_all(&self) -> Result<Vec<ContentSection>, ServiceError> {
        Ok(self.inner.read().await.clone())
    }

    async fn upsert(&self, input: NewContentSection) -> Result<ContentSection, ServiceError> {
        let mut records = self.inner.write().await;
        if let Some(existing) = records.iter_mut().find(|r| r.section == input.section) {
            existing.replace_content(input.content);
            debug!(section = %existing.section, id = %existing.id, "content section replaced");
            return Ok(existing.clone());
        }
        let created = ContentSection::new(input);
        debug!(section = %created.section, id = %created.id, "content section created");
        records.push(created.clone());
        Ok(created)
    }
}
