use crate::config::{ServerConfig, read_config};
use crate::db::{MIGRATOR, ServerDatabase};
use axum::routing::get;
use axum::Router;
use axum_server::tls_rustls::RustlsConfig;
use shared::endpoint::ServerEndpoint;
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;
use std::fs;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod db;
mod handler;

#[derive(Clone)]
struct AppState {
    db: ServerDatabase,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log_level = EnvFilter::try_from_default_env().unwrap_or(EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    let config = read_config()?;
    info!("Using {:?}", config);

    let db = connect_db(&config).await?;
    let app = router(AppState { db });

    match &config.tls {
        Some(tls) => {
            info!("Starting HTTPS server on {}", config.bind_addr);
            let tls_config = RustlsConfig::from_pem_file(&tls.cert_path, &tls.key_path).await?;
            axum_server::bind_rustls(config.bind_addr, tls_config)
                .serve(app.into_make_service())
                .await?;
        }
        None => {
            info!(
                "Starting HTTP server on {} (no TLS_CERT_PATH/TLS_KEY_PATH)",
                config.bind_addr
            );
            let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}

async fn connect_db(config: &ServerConfig) -> Result<ServerDatabase, Box<dyn std::error::Error>> {
    if let Some(parent) = config.db_file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let opts = SqliteConnectOptions::new()
        .filename(&config.db_file_path)
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    MIGRATOR.run(&pool).await?;
    Ok(ServerDatabase::new(pool))
}

fn router(state: AppState) -> Router {
    Router::new()
        .route(ServerEndpoint::Ping.to_str(), get(|| async { "pong" }))
        .route(
            ServerEndpoint::Version.to_str(),
            get(|| async { env!("CARGO_PKG_VERSION") }),
        )
        // json api - for the web frontend
        .route(
            ServerEndpoint::ApiOrganizationStatus.to_str(),
            get(handler::api_get_organization_status),
        )
        .route(
            ServerEndpoint::ApiSession.to_str(),
            get(handler::api_get_session),
        )
        .route(
            ServerEndpoint::ApiDashboards.to_str(),
            get(handler::api_list_dashboards).post(handler::api_create_dashboard),
        )
        .route(
            ServerEndpoint::ApiDashboard.to_str(),
            get(handler::api_get_dashboard),
        )
        // assets
        .nest_service(
            ServerEndpoint::Illustrations.to_str(),
            get(handler::serve_illustration),
        )
        .nest_service(
            ServerEndpoint::App.to_str(),
            get(handler::serve_embedded_app),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
