use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use models::{validation::validate_inquiry, Inquiry};
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    errors::JsonApiError,
    metrics::{INQUIRIES_REJECTED_TOTAL, INQUIRIES_SUBMITTED_TOTAL},
    state::AppState,
};

pub const THANK_YOU: &str = "Thank you for your inquiry. We'll get back to you soon!";

#[derive(Debug, Serialize)]
pub struct InquiryRef {
    pub id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct InquirySubmitted {
    pub message: &'static str,
    pub inquiry: InquiryRef,
}

#[utoipa::path(
    post, path = "/api/inquiries", tag = "inquiries",
    request_body = crate::openapi::InquiryRequestDoc,
    responses(
        (status = 200, description = "Recorded", body = crate::openapi::InquirySubmittedDoc),
        (status = 400, description = "Invalid data", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Submit Failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn submit(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<InquirySubmitted>, JsonApiError> {
    let Json(body) = body.map_err(|rejection| {
        INQUIRIES_REJECTED_TOTAL.inc();
        warn!(reason = %rejection.body_text(), "inquiry body rejected");
        JsonApiError::from_rejection(rejection)
    })?;
    let input = validate_inquiry(&body).map_err(|e| {
        INQUIRIES_REJECTED_TOTAL.inc();
        warn!(error = %e, "inquiry failed validation");
        JsonApiError::invalid(e)
    })?;

    let inquiry = state
        .inquiries
        .append(input)
        .await
        .map_err(|e| JsonApiError::internal("Failed to submit inquiry", e))?;
    INQUIRIES_SUBMITTED_TOTAL.inc();
    info!(id = %inquiry.id, has_company = inquiry.company.is_some(), "inquiry submitted");
    Ok(Json(InquirySubmitted { message: THANK_YOU, inquiry: InquiryRef { id: inquiry.id } }))
}

#[utoipa::path(
    get, path = "/api/inquiries", tag = "inquiries",
    responses(
        (status = 200, description = "All inquiries", body = [crate::openapi::InquiryDoc]),
        (status = 500, description = "Fetch Failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Inquiry>>, JsonApiError> {
    let all = state
        .inquiries
        .get_all()
        .await
        .map_err(|e| JsonApiError::internal("Failed to fetch inquiries", e))?;
    info!(count = all.len(), "list inquiries");
    Ok(Json(all))
}
