//! HTTP server setup.
//!
//! # Responsibilities
//! - Build the Axum router from the route table
//! - Wire middleware (tracing, request timeout, correlation header)
//! - Hold the shared downstream client and configuration
//! - Serve with graceful shutdown
//!
//! # Design Decisions
//! - Every route dispatches to the same forwarding handler
//! - The downstream client is created once and cloned per request, so
//!   connection reuse comes for free
//! - Unmatched paths fall through to Axum's default 404

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::middleware;
use axum::routing::post;
use axum::Router;
use hyper_util::client::legacy::{connect::HttpConnector, Client};
use hyper_util::rt::TokioExecutor;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::schema::GatewayConfig;
use crate::http::correlation::propagate_request_uuid;
use crate::http::forward::forward_handler;
use crate::routing::table::ROUTES;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<GatewayConfig>,
    pub client: Client<HttpConnector, Body>,
}

/// HTTP server for the forwarding gateway.
pub struct GatewayServer {
    router: Router,
}

impl GatewayServer {
    /// Create a new server from the given configuration.
    pub fn new(config: GatewayConfig) -> Self {
        let config = Arc::new(config);
        let client = Client::builder(TokioExecutor::new()).build(HttpConnector::new());

        let state = AppState {
            config: config.clone(),
            client,
        };

        Self {
            router: build_router(&config, state),
        }
    }

    /// The assembled router; routers are cheap to clone.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until the shutdown channel fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "gateway listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("shutdown requested, stopping accept loop");
            })
            .await?;

        tracing::info!("gateway stopped");
        Ok(())
    }
}

/// Build the router: one entry per table row, all POST, shared handler.
pub fn build_router(config: &GatewayConfig, state: AppState) -> Router {
    let mut router = Router::new();
    for route in ROUTES {
        router = router.route(route.pattern, post(forward_handler));
    }

    router
        .route_layer(middleware::from_fn(propagate_request_uuid))
        .with_state(state)
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.timeouts.request_secs,
        )))
        .layer(TraceLayer::new_for_http())
}
