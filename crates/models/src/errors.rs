use thiserror::Error;

use crate::validation::FieldError;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {}", summarize(.0))]
    Validation(Vec<FieldError>),
}

impl ModelError {
    /// Violated fields, in schema order.
    pub fn fields(&self) -> &[FieldError] {
        match self {
            ModelError::Validation(fields) => fields,
        }
    }
}

fn summarize(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(|f| format!("{}: {}", f.field, f.message))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_lists_every_field() {
        let err = ModelError::Validation(vec![
            FieldError::new("name", "Required"),
            FieldError::new("email", "Required"),
        ]);
        assert_eq!(err.to_string(), "validation error: name: Required, email: Required");
        assert_eq!(err.fields().len(), 2);
    }
}
