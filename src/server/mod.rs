//! Marklee HTTP server.
//!
//! REST endpoints under `/api`, a health check, and the guarded page
//! routes. Handlers share an [`AppState`] holding the in-memory store.

pub mod error;
pub mod extract;
pub mod guard;
pub mod handlers;
pub mod pages;
pub mod state;
pub mod store;

pub use error::ApiError;
pub use state::AppState;
pub use store::Store;

use std::net::SocketAddr;

use axum::http::{HeaderValue, Method};
use axum::middleware;
use axum::routing::{delete, get, post};
use axum::Router;
use tokio::task::JoinHandle;
use tower_http::cors::{Any, CorsLayer};

use crate::startup::ServerConfig;

/// Build the CORS layer. Any origin unless one is configured.
fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers(Any);

    match config
        .cors_origin
        .as_deref()
        .and_then(|origin| HeaderValue::from_str(origin).ok())
    {
        Some(origin) => layer.allow_origin(origin),
        None => layer.allow_origin(Any),
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/api/auth/register", post(handlers::register))
        .route("/api/auth/login", post(handlers::login))
        .route("/api/auth/logout", post(handlers::logout))
        .route("/api/auth/me", get(handlers::me))
        .route("/api/admin/users", get(handlers::list_users))
        .route("/api/admin/users/:id", delete(handlers::delete_user))
        .route(
            "/api/admin/brief-questions",
            get(handlers::list_brief_questions),
        )
        .route(
            "/api/admin/brief-question",
            post(handlers::create_brief_question),
        )
        .route(
            "/api/admin/brief-question/:id",
            delete(handlers::delete_brief_question),
        );

    let mut guarded = Router::new();
    for (prefix, _) in pages::GUARDED_PAGES {
        guarded = guarded
            .route(prefix, get(pages::page))
            .route(&format!("{}/*rest", prefix), get(pages::page));
    }
    let guarded = guarded.route_layer(middleware::from_fn(guard::route_guard));

    let cors = cors_layer(&state.config);

    Router::new()
        .route("/", get(pages::home))
        .route("/health", get(handlers::health))
        .merge(api)
        .merge(guarded)
        .layer(cors)
        .with_state(state)
}

/// Start the server on the address from `config`.
pub async fn start_server(
    config: ServerConfig,
) -> color_eyre::Result<(SocketAddr, JoinHandle<()>)> {
    let addr = config.bind_addr()?;
    start_server_on(addr, config).await
}

/// Start the server on a specific address.
///
/// Binding port 0 picks a free port; the bound address is returned. This is
/// what the integration tests use.
pub async fn start_server_on(
    addr: SocketAddr,
    config: ServerConfig,
) -> color_eyre::Result<(SocketAddr, JoinHandle<()>)> {
    let state = AppState::new(config);
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    let actual_addr = listener.local_addr()?;

    tracing::info!("Marklee server listening on http://{}", actual_addr);

    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!("Server error: {}", e);
        }
    });

    Ok((actual_addr, handle))
}

/// Run the server until Ctrl+C or SIGTERM.
pub async fn serve(config: ServerConfig) -> color_eyre::Result<()> {
    let addr = config.bind_addr()?;
    let state = AppState::new(config);
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Marklee server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
