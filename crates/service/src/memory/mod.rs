//! In-memory stores. State lives for the process lifetime only.

pub mod content_store;
pub mod inquiry_log;
