//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the dispatch handler
//! - Wire up middleware (tracing, request ID, CORS header)
//! - Serve on a bound listener until shutdown
//! - Dispatch requests to the route table

use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue, Method, Uri},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::config::MockServerConfig;
use crate::http::request::{self, propagate_request_id_layer, set_request_id_layer};
use crate::http::response::{unsupported_method, JsonFixture};
use crate::routing::RouteTable;

/// Error type for server operations.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Failed to bind to address.
    #[error("Failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },
    /// Serving loop failed.
    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub routes: Arc<RouteTable>,
}

/// HTTP server for the mock API.
pub struct MockServer {
    router: Router,
    config: MockServerConfig,
    routes: Arc<RouteTable>,
}

impl MockServer {
    /// Create a new server serving the builtin route table.
    pub fn new(config: MockServerConfig) -> Self {
        Self::with_routes(config, RouteTable::builtin())
    }

    /// Create a server serving the given route table.
    pub fn with_routes(config: MockServerConfig, routes: RouteTable) -> Self {
        let routes = Arc::new(routes);
        let state = AppState {
            routes: routes.clone(),
        };
        Self {
            router: build_router(state),
            config,
            routes,
        }
    }

    /// Bind the configured listener address.
    pub async fn bind(&self) -> Result<TcpListener, ServerError> {
        let address = &self.config.listener.bind_address;
        TcpListener::bind(address)
            .await
            .map_err(|source| ServerError::Bind {
                address: address.clone(),
                source,
            })
    }

    /// Run the server, accepting connections on the given listener until
    /// the shutdown receiver fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), ServerError> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            routes = self.routes.len(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &MockServerConfig {
        &self.config
    }

    /// The axum router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }
}

/// Build the Axum router with all middleware layers.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/{*path}", any(dispatch_handler))
        .route("/", any(dispatch_handler))
        .with_state(state)
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(propagate_request_id_layer())
        .layer(TraceLayer::new_for_http())
        .layer(set_request_id_layer())
}

/// Main dispatch handler.
/// Looks up the first matching route and renders its fixture.
async fn dispatch_handler(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    let target = request::request_target(&uri);
    let request_id = request::request_id(&headers);

    match state.routes.dispatch(&method, target) {
        Some(hit) => {
            tracing::info!(
                request_id = %request_id,
                method = %method,
                target = %target,
                route = hit.route,
                status = hit.status.as_u16(),
                "Request handled"
            );
            JsonFixture::new(hit.status, hit.body).into_response()
        }
        None => {
            tracing::warn!(
                request_id = %request_id,
                method = %method,
                target = %target,
                "Unsupported method"
            );
            unsupported_method(&method)
        }
    }
}
