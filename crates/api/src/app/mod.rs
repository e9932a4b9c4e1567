//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: the orchestration layer between handlers and the store
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request/response DTOs and mapping to/from domain types
//! - `errors.rs`: failure → problem response translation

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

use crate::config::AppConfig;
use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Base path of the product resource.
pub const PRODUCTS_BASE_PATH: &str = "/api/v1/products";

/// Build the full HTTP router around an existing service instance.
pub fn build_app(services: Arc<services::AppServices>) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .nest(PRODUCTS_BASE_PATH, routes::products::router())
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::trace_requests))
                .layer(Extension(services)),
        )
}

/// Build the router with a fresh in-memory store (public entrypoint used by `main.rs`).
pub fn build_app_from_config(config: &AppConfig) -> Router {
    build_app(Arc::new(services::AppServices::in_memory(config.seed)))
}
