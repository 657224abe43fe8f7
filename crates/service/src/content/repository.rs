use async_trait::async_trait;
use models::{ContentSection, NewContentSection};

use crate::errors::ServiceError;

/// Content sections keyed by their `section` name.
/// Implementations hold at most one record per section.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// `Ok(None)` when the section does not exist.
    async fn get(&self, section: &str) -> Result<Option<ContentSection>, ServiceError>;
    async fn get_all(&self) -> Result<Vec<ContentSection>, ServiceError>;
    /// Replace the content of an existing section (same `id`) or create a new one.
    async fn upsert(&self, input: NewContentSection) -> Result<ContentSection, ServiceError>;
}
