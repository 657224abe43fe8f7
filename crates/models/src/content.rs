use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

/// A named, independently updatable block of site copy (`about`, `contact`, ...).
///
/// `content` is schema-agnostic; its shape is only meaningful to the page that renders it.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSection {
    pub id: Uuid,
    pub section: String,
    pub content: Value,
    pub last_updated: DateTime<Utc>,
}

/// Upsert input: `id` and `lastUpdated` are assigned by the store.
#[derive(Clone, Debug, PartialEq)]
pub struct NewContentSection {
    pub section: String,
    pub content: Value,
}

impl ContentSection {
    pub fn new(input: NewContentSection) -> Self {
        Self {
            id: Uuid::new_v4(),
            section: input.section,
            content: input.content,
            last_updated: Utc::now(),
        }
    }

    /// Swap in new content keeping `id`. `last_updated` never moves backwards.
    pub fn replace_content(&mut self, content: Value) {
        self.content = content;
        self.last_updated = Utc::now().max(self.last_updated);
    }
}
