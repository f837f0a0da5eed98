pub mod api;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::upload;

use crate::api::openapi::ApiDoc;
use crate::shared::api::custom_query_config;
use crate::upload::adapter::outgoing::{
    env_server_limits::EnvServerLimits, local_file_store::LocalFileStore,
};
use crate::upload::application::domain::policies::upload_policy::UploadPolicy;
use crate::upload::application::ports::outgoing::FileStore;
use crate::upload::application::services::{HandleUploadService, ServerSettingsService};
use crate::upload::application::upload_use_cases::UploadUseCases;

use actix_multipart::form::MultipartFormConfig;
use actix_web::{web, App, HttpServer};
use std::env;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub upload: UploadUseCases,
    pub upload_policy: UploadPolicy,
    pub file_store: Arc<dyn FileStore>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Try .env.{environment} first, then fall back to .env
    let rust_env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", rust_env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let server_url = format!("{host}:{port}");

    let upload_policy = UploadPolicy::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    info!(
        dir = %upload_policy.upload_directory.display(),
        size_limit = upload_policy.size_limit,
        replace_old_file = upload_policy.replace_old_file,
        "Upload policy loaded"
    );

    // Use cases
    let limits = EnvServerLimits::from_env();
    // Fixed for the life of the server; the per-upload checks re-read the env.
    let multipart_limit = usize::try_from(limits.post_max_size_bytes()).unwrap_or(usize::MAX);

    let handle_upload = HandleUploadService::new(
        ServerSettingsService::new(limits.clone()),
        LocalFileStore,
    );
    let check_server_settings = ServerSettingsService::new(limits);

    let state = AppState {
        upload: UploadUseCases {
            handle_upload: Arc::new(handle_upload),
            check_server_settings: Arc::new(check_server_settings),
        },
        upload_policy,
        file_store: Arc::new(LocalFileStore),
    };

    let openapi = ApiDoc::openapi();

    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(custom_query_config())
            .app_data(
                MultipartFormConfig::default()
                    .total_limit(multipart_limit)
                    .memory_limit(multipart_limit),
            )
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Upload
    cfg.service(crate::upload::adapter::incoming::web::routes::upload_file_handler);
    cfg.service(crate::upload::adapter::incoming::web::routes::check_settings_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
