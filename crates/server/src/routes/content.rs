use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use models::{validation::validate_content_upsert, ContentSection};
use serde_json::Value;
use tracing::{info, warn};

use crate::{
    errors::JsonApiError,
    metrics::{CONTENT_NOT_FOUND_TOTAL, CONTENT_UPSERTS_TOTAL},
    state::AppState,
};

const FETCH_FAILED: &str = "Failed to fetch company content";
const UPDATE_FAILED: &str = "Failed to update company content";

#[utoipa::path(
    get, path = "/api/company-content", tag = "content",
    responses(
        (status = 200, description = "All content sections", body = [crate::openapi::ContentSectionDoc]),
        (status = 500, description = "Fetch Failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<ContentSection>>, JsonApiError> {
    let sections = state
        .content
        .get_all()
        .await
        .map_err(|e| JsonApiError::internal(FETCH_FAILED, e))?;
    info!(count = sections.len(), "list company content");
    Ok(Json(sections))
}

#[utoipa::path(
    get, path = "/api/company-content/{section}", tag = "content",
    params(("section" = String, Path, description = "Section key, e.g. about")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::ContentSectionDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Fetch Failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(
    State(state): State<AppState>,
    Path(section): Path<String>,
) -> Result<Json<ContentSection>, JsonApiError> {
    match state.content.get(&section).await {
        Ok(Some(found)) => Ok(Json(found)),
        Ok(None) => {
            CONTENT_NOT_FOUND_TOTAL.inc();
            info!(%section, "content section not found");
            Err(JsonApiError::not_found("Content section not found"))
        }
        Err(e) => Err(JsonApiError::internal(FETCH_FAILED, e)),
    }
}

#[utoipa::path(
    post, path = "/api/company-content", tag = "content",
    request_body = crate::openapi::ContentUpsertDoc,
    responses(
        (status = 200, description = "Created or replaced", body = crate::openapi::ContentSectionDoc),
        (status = 400, description = "Invalid data", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Update Failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn upsert(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ContentSection>, JsonApiError> {
    let Json(body) = body.map_err(|rejection| {
        warn!(reason = %rejection.body_text(), "content upsert body rejected");
        JsonApiError::from_rejection(rejection)
    })?;
    let input = validate_content_upsert(&body).map_err(|e| {
        warn!(error = %e, "content upsert failed validation");
        JsonApiError::invalid(e)
    })?;

    let saved = state
        .content
        .upsert(input)
        .await
        .map_err(|e| JsonApiError::internal(UPDATE_FAILED, e))?;
    CONTENT_UPSERTS_TOTAL.inc();
    info!(section = %saved.section, id = %saved.id, "upserted company content");
    Ok(Json(saved))
}
