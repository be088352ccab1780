use anyhow::{Context, Result};
use axum::{
    http::{Method, StatusCode},
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use std::future::Future;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::{handlers, routes};
use crate::config::ServerConfig;
use crate::error::ErrorResponse;
use crate::items::{ItemRegistry, SharedRegistry};

/// State shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub registry: SharedRegistry,
    pub instance_name: String,
}

impl AppState {
    /// State with an empty collection
    pub fn new(instance_name: impl Into<String>) -> Self {
        Self {
            registry: ItemRegistry::shared(),
            instance_name: instance_name.into(),
        }
    }
}

/// HTTP server for one registry instance
pub struct RegistryServer {
    config: ServerConfig,
}

impl RegistryServer {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Bind the configured address and serve until Ctrl-C or SIGTERM
    pub async fn run(self) -> Result<()> {
        let (listener, local_addr) = bind(self.config.bind_addr).await?;
        tracing::info!("Server running on port {}", local_addr.port());
        tracing::info!("Listening on {}", local_addr);
        tracing::info!("Hostname: {}", self.config.instance_name);

        let state = AppState::new(self.config.instance_name);
        serve(listener, state, shutdown_signal()).await
    }
}

/// Serve requests on an already bound listener until `shutdown` completes
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = create_router(state);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Bind to `addr`, returning the listener and the address actually bound
pub async fn bind(addr: SocketAddr) -> Result<(TcpListener, SocketAddr)> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    let local_addr = listener.local_addr().context("Failed to read local address")?;
    Ok((listener, local_addr))
}

/// Create the Axum router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::info))
        .route("/health", get(handlers::health))
        .nest("/api", routes::api_routes())
        .fallback(not_found_handler)
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// 404 Not Found handler
async fn not_found_handler() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            success: false,
            message: "Not found".to_string(),
        }),
    )
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, stopping server");
}
