use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::warn;

use crate::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    assets: &'static str,
}

/// LIVENESS CHECK
/// - No I/O
/// - No asset resolution
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS CHECK
/// - Renders the portfolio document so asset misconfiguration shows up here
#[get("/ready")]
pub async fn readiness(data: web::Data<AppState>) -> impl Responder {
    match data.get_profile_document_use_case.execute().await {
        Ok(_) => HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            assets: "ok",
        }),
        Err(err) => {
            warn!("Readiness check failed: {}", err);
            HttpResponse::ServiceUnavailable().json(ReadinessResponse {
                status: "unhealthy",
                assets: "unhealthy",
            })
        }
    }
}
