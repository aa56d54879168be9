use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    portfolio::application::use_cases::get_profile_document::GetProfileDocumentError,
    portfolio::domain::entities::ProfileDocument,
    shared::api::ApiResponse,
    AppState,
};

fn log_failure(route: &str, err: &GetProfileDocumentError) {
    match err {
        GetProfileDocumentError::AssetResolution { path, source } => {
            error!(route, asset = %path, "Asset configuration error: {}", source);
        }
        GetProfileDocumentError::InvalidContent(msg) => {
            error!(route, "Profile content is invalid: {}", msg);
        }
    }
}

/// Portfolio page props
///
/// Returns the portfolio document as the bare props object the page component
/// renders from.
#[utoipa::path(
    get,
    path = "/",
    tag = "portfolio",
    responses(
        (status = 200, description = "Portfolio document", body = ProfileDocument),
        (
            status = 500,
            description = "An asset could not be resolved",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INTERNAL_ERROR",
                    "message": "An unexpected error occurred"
                }
            })
        )
    )
)]
#[get("/")]
pub async fn get_portfolio_page_handler(data: web::Data<AppState>) -> impl Responder {
    match data.get_profile_document_use_case.execute().await {
        Ok(document) => HttpResponse::Ok().json(document),
        Err(err) => {
            log_failure("/", &err);
            ApiResponse::internal_error()
        }
    }
}

/// Portfolio document (API)
///
/// Same document as `/`, wrapped in the standard response envelope.
#[utoipa::path(
    get,
    path = "/api/portfolio",
    tag = "portfolio",
    responses(
        (
            status = 200,
            description = "Portfolio document",
            body = inline(SuccessResponse<ProfileDocument>)
        ),
        (status = 500, description = "An asset could not be resolved", body = ErrorResponse)
    )
)]
#[get("/api/portfolio")]
pub async fn get_portfolio_handler(data: web::Data<AppState>) -> impl Responder {
    match data.get_profile_document_use_case.execute().await {
        Ok(document) => ApiResponse::success(document),
        Err(err) => {
            log_failure("/api/portfolio", &err);
            ApiResponse::internal_error()
        }
    }
}
