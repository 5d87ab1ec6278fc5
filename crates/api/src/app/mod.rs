//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: the order service and its seeded in-memory stores
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request/response DTOs and domain mapping
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

use services::AppServices;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(services: Arc<AppServices>) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(ServiceBuilder::new().layer(Extension(services)))
}
