use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct ContentSectionDoc {
    pub id: String,
    pub section: String,
    #[schema(value_type = Object)]
    pub content: serde_json::Value,
    pub last_updated: String,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct InquiryDoc {
    pub id: String,
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub message: String,
    pub created_at: String,
}

#[derive(ToSchema)]
pub struct InquiryRefDoc { pub id: String }

#[derive(ToSchema)]
pub struct InquirySubmittedDoc {
    pub message: String,
    pub inquiry: InquiryRefDoc,
}

#[derive(ToSchema)]
pub struct FieldErrorDoc { pub field: String, pub message: String }

#[derive(ToSchema)]
pub struct ErrorDoc {
    pub message: String,
    pub errors: Option<Vec<FieldErrorDoc>>,
}

#[derive(ToSchema)]
pub struct ContentUpsertDoc {
    pub section: String,
    #[schema(value_type = Object)]
    pub content: serde_json::Value,
}

#[derive(ToSchema)]
pub struct InquiryRequestDoc {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub message: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::content::list,
        crate::routes::content::get,
        crate::routes::content::upsert,
        crate::routes::inquiries::submit,
        crate::routes::inquiries::list,
    ),
    components(
        schemas(
            HealthResponse,
            ContentSectionDoc,
            ContentUpsertDoc,
            InquiryDoc,
            InquiryRequestDoc,
            InquiryRefDoc,
            InquirySubmittedDoc,
            FieldErrorDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "content"),
        (name = "inquiries")
    )
)]
pub struct ApiDoc;
