use std::net::SocketAddr;

use axum::Router;
use configs::AppConfig;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes::{self, AppState};
use service::{runtime, seed};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", cfg.server.host, cfg.server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address: {e}")))
}

/// Config file first; environment variables only when the file is missing.
pub fn load_config() -> Result<AppConfig, StartupError> {
    AppConfig::load_or_env().map_err(|e| StartupError::InvalidConfig(format!("{e:#}")))
}

/// Open storage, seed it, and wrap the services for the router.
pub async fn build_app(cfg: &AppConfig) -> Result<Router, StartupError> {
    let repos = runtime::build_repositories(cfg)
        .await
        .map_err(|e| StartupError::Runtime(format!("storage: {e:#}")))?;
    let services = runtime::Services::new(repos);

    if cfg.seed.enabled {
        seed::seed_defaults(services.users.as_ref(), services.todos.as_ref())
            .await
            .map_err(|e| StartupError::Runtime(format!("seed: {e}")))?;
    }

    Ok(routes::build_router(AppState::from(services), build_cors()))
}

/// Build the app for `cfg` and serve it until the listener fails.
pub async fn serve(cfg: AppConfig) -> Result<(), StartupError> {
    let app = build_app(&cfg).await?;
    let addr = bind_addr(&cfg)?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| StartupError::Runtime(format!("bind {addr}: {e}")))?;
    info!(%addr, backend = ?cfg.storage.backend, "starting server");
    axum::serve(listener, app)
        .await
        .map_err(|e| StartupError::Runtime(e.to_string()))?;
    Ok(())
}
