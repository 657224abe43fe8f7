//! Data model for the site API: editable content sections and contact-form inquiries.

pub mod errors;
pub mod content;
pub mod inquiry;
pub mod validation;

pub use content::{ContentSection, NewContentSection};
pub use inquiry::{Inquiry, NewInquiry};
pub use validation::FieldError;
