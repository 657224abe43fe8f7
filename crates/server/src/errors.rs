use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use models::{errors::ModelError, FieldError};
use serde::Serialize;
use tracing::error;

/// JSON error body: `{"message": ..., "errors": [{"field", "message"}]}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub message: String,
    pub errors: Option<Vec<FieldError>>,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<&'a [FieldError]>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into(), errors: None }
    }

    pub fn invalid(err: ModelError) -> Self {
        let ModelError::Validation(fields) = err;
        Self { status: StatusCode::BAD_REQUEST, message: "Invalid data".into(), errors: Some(fields) }
    }

    /// Unparseable or non-JSON body.
    pub fn from_rejection(rejection: JsonRejection) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: "Invalid data".into(),
            errors: Some(vec![FieldError::new("body", rejection.body_text())]),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Generic 500. The cause is logged, never sent to the client.
    pub fn internal(message: &str, cause: impl std::fmt::Display) -> Self {
        error!(error = %cause, "{}", message);
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody { message: &self.message, errors: self.errors.as_deref() };
        (self.status, Json(body)).into_response()
    }
}
