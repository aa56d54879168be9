pub mod api;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::portfolio;

use crate::api::openapi::ApiDoc;
use crate::portfolio::adapter::outgoing::{AssetConfig, PublicAssetLocator};
use crate::portfolio::application::services::GetProfileDocumentService;
use crate::portfolio::application::use_cases::get_profile_document::GetProfileDocumentUseCase;

use actix_web::{web, App, HttpServer};
use std::env;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub get_profile_document_use_case: Arc<dyn GetProfileDocumentUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    // RUST_ENV picks the file, so it can only come from the process environment.
    let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let loaded_env_file = load_env_file(Path::new("."), &env);

    // After the env file, so RUST_LOG from it applies.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");
    match loaded_env_file {
        Some(path) => info!("Loaded environment from {}", path.display()),
        None => info!("No .env file found for RUST_ENV={}", env),
    }

    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8000".to_string());
    let server_url = format!("{host}:{port}");

    // Unresolvable assets are fatal: refuse to bind.
    let asset_config = AssetConfig::from_env(&host, &port);
    let asset_locator = PublicAssetLocator::try_new(asset_config).map_err(|e| {
        error!("Invalid asset configuration: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;
    info!("Serving assets from {}", asset_locator.base_url());

    let get_profile_document = GetProfileDocumentService::new(asset_locator);
    if let Err(e) = get_profile_document.execute().await {
        error!("Portfolio document failed to render at startup: {}", e);
        return Err(io::Error::new(io::ErrorKind::InvalidData, e));
    }

    let state = AppState {
        get_profile_document_use_case: Arc::new(get_profile_document),
    };

    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

/// Loads `.env.{env}` from `dir`, falling back to `.env`. Variables already set
/// in the process win over file entries.
fn load_env_file(dir: &Path, env: &str) -> Option<PathBuf> {
    [format!(".env.{env}"), ".env".to_string()]
        .into_iter()
        .map(|name| dir.join(name))
        .find(|path| dotenvy::from_path(path).is_ok())
}

fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Portfolio
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_portfolio_page_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_portfolio_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
        std::process::exit(1);
    }
}
