//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: shared state handed to every handler
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use crate::middleware;

pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router with a fresh, empty registry.
pub fn build_app() -> Router {
    build_app_with(Arc::new(services::build_services()))
}

/// Build the router around existing services (tests use this to inspect state).
pub fn build_app_with(services: Arc<services::AppServices>) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(Extension(services))
        .layer(ServiceBuilder::new().layer(axum::middleware::from_fn(middleware::trace_requests)))
}
