//! Request body schemas.
//!
//! Bodies arrive as untyped JSON so that every violated field can be reported
//! at once instead of stopping at the first deserialization failure.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::errors::ModelError;
use crate::{NewContentSection, NewInquiry};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field: field.into(), message: message.into() }
    }
}

/// `{section: string, content: object}`
pub fn validate_content_upsert(body: &Value) -> Result<NewContentSection, ModelError> {
    let obj = as_object(body)?;
    let mut errors = Vec::new();

    let section = required_text(obj, "section", &mut errors);
    let content = match obj.get("content") {
        None | Some(Value::Null) => {
            errors.push(FieldError::new("content", "Required"));
            None
        }
        Some(v @ Value::Object(_)) => Some(v.clone()),
        Some(other) => {
            errors.push(FieldError::new("content", format!("Expected object, received {}", kind(other))));
            None
        }
    };

    match (section, content) {
        (Some(section), Some(content)) if errors.is_empty() => Ok(NewContentSection { section, content }),
        _ => Err(ModelError::Validation(errors)),
    }
}

/// `{name: string, email: string, company?: string | null, message: string}`
pub fn validate_inquiry(body: &Value) -> Result<NewInquiry, ModelError> {
    let obj = as_object(body)?;
    let mut errors = Vec::new();

    let name = required_text(obj, "name", &mut errors);
    let email = required_text(obj, "email", &mut errors);
    let company = match obj.get("company") {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if s.is_empty() => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            errors.push(FieldError::new("company", format!("Expected string, received {}", kind(other))));
            None
        }
    };
    let message = required_text(obj, "message", &mut errors);

    match (name, email, message) {
        (Some(name), Some(email), Some(message)) if errors.is_empty() => {
            Ok(NewInquiry { name, email, company, message })
        }
        _ => Err(ModelError::Validation(errors)),
    }
}

fn as_object(body: &Value) -> Result<&Map<String, Value>, ModelError> {
    body.as_object().ok_or_else(|| {
        ModelError::Validation(vec![FieldError::new(
            "body",
            format!("Expected object, received {}", kind(body)),
        )])
    })
}

fn required_text(obj: &Map<String, Value>, field: &str, errors: &mut Vec<FieldError>) -> Option<String> {
    match obj.get(field) {
        None | Some(Value::Null) => {
            errors.push(FieldError::new(field, "Required"));
            None
        }
        Some(Value::String(s)) if s.trim().is_empty() => {
            errors.push(FieldError::new(field, "Must not be empty"));
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            errors.push(FieldError::new(field, format!("Expected string, received {}", kind(other))));
            None
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(err: ModelError) -> Vec<String> {
        err.fields().iter().map(|f| f.field.clone()).collect()
    }

    #[test]
    fn inquiry_with_required_fields_passes() {
        let input = validate_inquiry(&json!({"name": "Ada", "email": "ada@x.com", "message": "Hello"})).unwrap();
        assert_eq!(input.name, "Ada");
        assert_eq!(input.company, None);
    }

    #[test]
    fn inquiry_reports_all_missing_fields_in_order() {
        let err = validate_inquiry(&json!({})).unwrap_err();
        assert_eq!(fields(err), vec!["name", "email", "message"]);
    }

    #[test]
    fn inquiry_rejects_blank_and_wrong_typed_fields() {
        let err = validate_inquiry(&json!({"name": "  ", "email": 42, "message": "hi", "company": true})).unwrap_err();
        assert_eq!(fields(err), vec!["name", "email", "company"]);
    }

    #[test]
    fn inquiry_company_null_or_empty_becomes_none() {
        let base = json!({"name": "Ada", "email": "ada@x.com", "message": "Hello", "company": null});
        assert_eq!(validate_inquiry(&base).unwrap().company, None);

        let empty = json!({"name": "Ada", "email": "ada@x.com", "message": "Hello", "company": ""});
        assert_eq!(validate_inquiry(&empty).unwrap().company, None);

        let set = json!({"name": "Ada", "email": "ada@x.com", "message": "Hello", "company": "Acme"});
        assert_eq!(validate_inquiry(&set).unwrap().company.as_deref(), Some("Acme"));
    }

    #[test]
    fn content_upsert_requires_section_and_object_content() {
        let ok = validate_content_upsert(&json!({"section": "about", "content": {"title": "T"}})).unwrap();
        assert_eq!(ok.section, "about");

        let err = validate_content_upsert(&json!({"content": "text"})).unwrap_err();
        assert_eq!(fields(err), vec!["section", "content"]);

        let err = validate_content_upsert(&json!({"section": "about", "content": null})).unwrap_err();
        assert_eq!(fields(err), vec!["content"]);
    }

    #[test]
    fn content_upsert_rejects_blank_section() {
        let err = validate_content_upsert(&json!({"section": "", "content": {}})).unwrap_err();
        assert_eq!(err.fields(), &[FieldError::new("section", "Must not be empty")]);
    }

    #[test]
    fn non_object_body_is_a_body_error() {
        let err = validate_inquiry(&json!(["Ada"])).unwrap_err();
        assert_eq!(err.fields(), &[FieldError::new("body", "Expected object, received array")]);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let ok = validate_content_upsert(&json!({"section": "contact", "content": {}, "extra": 1}));
        assert!(ok.is_ok());
    }
}
