//! Storage layer for site content and contact inquiries.
//! - `content` / `inquiry` define the storage contracts.
//! - `memory` provides the process-lifetime implementations.

pub mod errors;
pub mod content;
pub mod inquiry;
pub mod memory;

pub use content::repository::ContentRepository;
pub use inquiry::repository::InquiryRepository;
pub use memory::{content_store::InMemoryContentStore, inquiry_log::InMemoryInquiryLog};
