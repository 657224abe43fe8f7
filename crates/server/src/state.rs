use std::sync::Arc;

use service::{ContentRepository, InMemoryContentStore, InMemoryInquiryLog, InquiryRepository};

/// Stores shared by every handler. Constructed once by the entry point.
#[derive(Clone)]
pub struct AppState {
    pub content: Arc<dyn ContentRepository>,
    pub inquiries: Arc<dyn InquiryRepository>,
}

impl AppState {
    pub fn new(content: Arc<dyn ContentRepository>, inquiries: Arc<dyn InquiryRepository>) -> Self {
        Self { content, inquiries }
    }

    /// Seeded content sections and an empty inquiry log.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryContentStore::seeded()), Arc::new(InMemoryInquiryLog::new()))
    }
}
