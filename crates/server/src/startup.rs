use std::{env, net::SocketAddr};

use axum::http::Method;
use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use migration::MigratorTrait;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::routes::{self, ServerState};

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_default();
}

/// Cross-origin policy: any origin, the four CRUD verbs, any headers.
fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any)
}

/// Load host/port from configs or env vars, with sensible fallbacks
fn load_bind_addr() -> anyhow::Result<SocketAddr> {
    let (host, port) = match configs::load_default() {
        Ok(cfg) => {
            let s = cfg.server;
            (s.host, s.port)
        }
        Err(_) => {
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(8080);
            (host, port)
        }
    };
    Ok(format!("{}:{}", host, port).parse()?)
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    // DB connection; pool options come from config when one is present.
    let db = match configs::AppConfig::load_and_validate() {
        Ok(cfg) => models::db::connect_with_config(&cfg.database).await?,
        Err(_) => models::db::connect().await?,
    };

    // Apply the schema on boot so a fresh database is usable immediately.
    migration::Migrator::up(&db, None).await?;

    let state = ServerState { db };
    let cors = build_cors();
    let app: Router = routes::build_router(state, cors);

    let addr = load_bind_addr()?;
    info!(%addr, "starting bus booking server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
