use async_trait::async_trait;
use models::{Inquiry, NewInquiry};

use crate::errors::ServiceError;

/// Append-only log of contact-form submissions.
#[async_trait]
pub trait InquiryRepository: Send + Sync {
    async fn append(&self, input: NewInquiry) -> Result<Inquiry, ServiceError>;
    async fn get_all(&self) -> Result<Vec<Inquiry>, ServiceError>;
}
