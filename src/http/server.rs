//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Derive the Axum Router from the static route table
//! - Wire up middleware (tracing, timeout, request ID)
//! - Dispatch mounts to the admin and API sub-routers
//! - Record per-binding request metrics
//! - Serve until shutdown is signalled
//!
//! # Design Decisions
//! - The route table is the single source of truth for registration
//!   order; this module only realizes its bindings as axum routes
//! - Redirect bindings answer on both the exact path and its slashless
//!   form

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    extract::{Request, State},
    middleware::{self, Next},
    response::{Redirect, Response},
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::AppConfig;
use crate::http::request::{propagate_request_id_layer, set_request_id_layer};
use crate::http::response;
use crate::observability::metrics;
use crate::routing::{table, RouteAction, RouteTable};
use crate::store::Store;
use crate::{admin, api};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: Arc<Store>,
    pub table: Arc<RouteTable>,
}

/// HTTP server for the backend.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration and store.
    pub fn new(config: AppConfig, store: Arc<Store>) -> Self {
        let state = AppState {
            config: Arc::new(config.clone()),
            store,
            table: Arc::new(RouteTable::standard()),
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Realize the route table as an Axum router, binding by binding,
    /// then stack the middleware layers.
    fn build_router(config: &AppConfig, state: AppState) -> Router {
        let table = state.table.clone();

        let mut app = Router::new();
        for binding in table.bindings() {
            app = match binding.action() {
                RouteAction::Mount => {
                    let sub = match binding.name() {
                        Some(table::ADMIN) => admin::admin_router(state.clone()),
                        Some(table::API_V1) => api::v1_router(state.clone()),
                        // A mount the assembly does not know is a bug in
                        // the table, not a client error.
                        _ => Router::new(),
                    };
                    app.nest(binding.pattern().mount_path(), sub)
                }
                RouteAction::PermanentRedirect(target) => {
                    let target = target.clone();
                    let handler = move || async move { Redirect::permanent(&target) };
                    // Terminal path plus its slashless form.
                    app.route(binding.pattern().as_str(), any(handler.clone()))
                        .route(binding.pattern().mount_path(), any(handler))
                }
            };
        }

        app.fallback(response::not_found)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.server.request_timeout_secs,
            )))
            .layer(propagate_request_id_layer())
            .layer(TraceLayer::new_for_http())
            .layer(set_request_id_layer())
            .layer(middleware::from_fn_with_state(state, track_request))
    }

    /// Run the server, accepting connections on the given listener,
    /// until ctrl-c or the shutdown channel fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

/// Resolve the request against the route table for logging and metrics,
/// then let the realized router handle it.
async fn track_request(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let start = Instant::now();
    let path = request.uri().path().to_string();
    let method = request.method().to_string();

    let route = state
        .table
        .lookup(&path)
        .and_then(|b| b.name())
        .unwrap_or("unmatched")
        .to_string();

    let response = next.run(request).await;
    let status = response.status();

    if route == "unmatched" {
        tracing::warn!(method = %method, path = %path, "No route matched");
    } else {
        tracing::debug!(
            method = %method,
            path = %path,
            route = %route,
            status = status.as_u16(),
            "Request complete"
        );
    }
    metrics::record_request(&route, status.as_u16(), start);

    response
}

/// Wait for ctrl-c or an internal shutdown trigger.
async fn shutdown_signal(mut shutdown: broadcast::Receiver<()>) {
    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            if let Err(e) = result {
                tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            }
            tracing::info!("Shutdown signal received");
        }
        _ = shutdown.recv() => {
            tracing::info!("Shutdown triggered");
        }
    }
}
