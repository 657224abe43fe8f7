use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A single contact-form submission. Immutable once created.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// Always serialized; `null` when the visitor left it blank.
    pub company: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct NewInquiry {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub message: String,
}

impl Inquiry {
    pub fn new(input: NewInquiry) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: input.name,
            email: input.email,
            company: input.company.filter(|c| !c.is_empty()),
            message: input.message,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(company: Option<&str>) -> NewInquiry {
        NewInquiry {
            name: "Ada".into(),
            email: "ada@x.com".into(),
            company: company.map(str::to_string),
            message: "Hello".into(),
        }
    }

    #[test]
    fn absent_company_serializes_as_null() {
        let v = serde_json::to_value(Inquiry::new(input(None))).unwrap();
        assert!(v.as_object().unwrap().contains_key("company"));
        assert!(v["company"].is_null());
        assert!(v.get("createdAt").is_some());
    }

    #[test]
    fn empty_company_is_normalized_to_none() {
        assert_eq!(Inquiry::new(input(Some(""))).company, None);
        assert_eq!(Inquiry::new(input(Some("Acme"))).company.as_deref(), Some("Acme"));
    }

    #[test]
    fn each_inquiry_gets_a_fresh_id() {
        let a = Inquiry::new(input(None));
        let b = Inquiry::new(input(None));
        assert_ne!(a.id, b.id);
    }
}
