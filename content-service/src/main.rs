mod auth;
mod config;
mod db;
mod error;
mod handlers;
mod media;
mod models;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, StatusCode},
    routing::{any, delete, get, post, put},
    Json, Router,
};
use serde_json::json;
use shared::database::{create_connection_pool, test_connection, DbPool};
use shared::observability::init_default_logging;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing::{info, warn};

use crate::config::{Config, CorsConfig};
use crate::media::{CloudinaryClient, MediaHost};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub db: DbPool,
    pub media: Arc<dyn MediaHost>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env().context("failed to load configuration")?;
    init_default_logging("content-service", config.log_format)?;

    info!("Starting Content Service...");

    for dir in [&config.storage.upload_dir, &config.storage.thumb_dir] {
        tokio::fs::create_dir_all(dir)
            .await
            .with_context(|| format!("failed to create {}", dir.display()))?;
    }

    let db = create_connection_pool(&config.database).await?;
    test_connection(&db).await?;
    info!("Database connection pool established");

    // The service does not accept traffic on a partially seeded store
    let report = db::seed::run(&db, &config.bootstrap)
        .await
        .context("database seeding failed")?;
    if report.is_noop() {
        info!("Database already seeded");
    } else {
        info!(
            "Database seeded: pillars_inserted={}, admin_created={}",
            report.pillars_inserted, report.admin_created
        );
    }

    let media = CloudinaryClient::new(&config.media)?;
    info!("Media host client initialized");

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState {
        config: Arc::new(config),
        db: db.clone(),
        media: Arc::new(media),
    };
    let app = create_router(state);

    info!("Content Service listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    shared::database::close_connections(&db).await;
    Ok(())
}

pub fn create_router(state: AppState) -> Router {
    let config = state.config.clone();

    let mut app = Router::new()
        .route("/health", get(handlers::health::health_check))
        // Authentication
        .route("/api/auth/login", post(handlers::auth::login))
        // Gallery
        .route(
            "/api/folders",
            get(handlers::gallery::list_folders).post(handlers::gallery::create_folder),
        )
        .route("/api/folders/:id", delete(handlers::gallery::delete_folder))
        .route(
            "/api/images",
            get(handlers::gallery::list_images).post(handlers::gallery::upload_image),
        )
        .route("/api/images/:id", delete(handlers::gallery::delete_image))
        // Pillars
        .route(
            "/api/pillars",
            get(handlers::pillars::list_pillars).post(handlers::pillars::create_pillar),
        )
        .route(
            "/api/pillars/:id",
            put(handlers::pillars::update_pillar).delete(handlers::pillars::delete_pillar),
        )
        // Press releases
        .route(
            "/api/press-releases",
            get(handlers::press_releases::list_press_releases)
                .post(handlers::press_releases::create_press_release),
        )
        .route(
            "/api/press-releases/:id",
            put(handlers::press_releases::update_press_release)
                .delete(handlers::press_releases::delete_press_release),
        )
        // Clientele
        .route(
            "/api/clientele",
            get(handlers::clientele::list_clientele).post(handlers::clientele::create_clientele),
        )
        .route(
            "/api/clientele/:id",
            put(handlers::clientele::update_clientele).delete(handlers::clientele::delete_clientele),
        )
        // Activities
        .route(
            "/api/activities",
            get(handlers::activities::list_activities).post(handlers::activities::create_activity),
        )
        .route(
            "/api/activities/:id",
            put(handlers::activities::update_activity).delete(handlers::activities::delete_activity),
        )
        // CSR connects
        .route(
            "/api/csr-connects",
            get(handlers::csr_connects::list_csr_connects)
                .post(handlers::csr_connects::create_csr_connect),
        )
        .route(
            "/api/csr-connects/:id",
            put(handlers::csr_connects::update_csr_connect)
                .delete(handlers::csr_connects::delete_csr_connect),
        )
        // Volunteers
        .route(
            "/api/volunteers",
            get(handlers::volunteers::list_volunteers).post(handlers::volunteers::submit_application),
        )
        .route("/api/volunteers/:id", delete(handlers::volunteers::delete_volunteer))
        .route("/api/*rest", any(api_not_found))
        .nest_service("/uploads", ServeDir::new(&config.storage.upload_dir));

    let client_build = &config.storage.client_build_path;
    if client_build.is_dir() {
        info!("Serving client build from {}", client_build.display());
        let index = ServeFile::new(client_build.join("index.html"));
        app = app.fallback_service(ServeDir::new(client_build).fallback(index));
    } else {
        warn!(
            "Client build {} not found, serving the API only",
            client_build.display()
        );
    }

    app.layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(config.server.max_upload_bytes))
        .layer(cors_layer(&config.cors))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(cors: &CorsConfig) -> CorsLayer {
    let origin = match cors {
        CorsConfig::AnyOrigin => AllowOrigin::any(),
        CorsConfig::Origins(origins) => AllowOrigin::list(origins.iter().filter_map(|origin| {
            match origin.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!("Ignoring invalid CORS origin: {}", origin);
                    None
                }
            }
        })),
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

async fn api_not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": "Not found", "status": 404 })),
    )
}
