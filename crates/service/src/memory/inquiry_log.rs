use std::sync::Arc;

use async_trait::async_trait;
use models::{Inquiry, NewInquiry};
use tokio::sync::RwLock;
use tracing::debug;

use crate::errors::ServiceError;
use crate::inquiry::repository::InquiryRepository;

/// Submissions in arrival order. No update or delete.
#[derive(Clone, Default)]
pub struct InMemoryInquiryLog {
    inner: Arc<RwLock<Vec<Inquiry>>>,
}

impl InMemoryInquiryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}

#[async_trait]
impl InquiryRepository for InMemoryInquiryLog {
    async fn append(&self, input: NewInquiry) -> Result<Inquiry, ServiceError> {
        let inquiry = Inquiry::new(input);
        self.inner.write().await.push(inquiry.clone());
        debug!(id = %inquiry.id, "inquiry recorded");
        Ok(inquiry)
    }

    async fn get_all(&self) -> Result<Vec<Inquiry>, ServiceError> {
        Ok(self.inner.read().await.clone())
    }
}
