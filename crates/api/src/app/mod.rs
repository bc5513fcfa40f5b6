//! HTTP application wiring (Axum router + document store).
//!
//! - `services.rs`: the document store handle shared by all handlers
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: query-string DTOs
//! - `errors.rs`: consistent error responses
//! - `svg.rs`: SVG rendering of the map view

use std::sync::Arc;

use axum::{middleware, routing::get, Extension, Router};
use tower::ServiceBuilder;

use stockmap_infra::{InventoryStore, JsonFileStore};

use crate::config::AppConfig;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;
pub mod svg;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(config: &AppConfig) -> Router {
    let store = Arc::new(JsonFileStore::new(config.data_file.clone()));
    build_app_with_store(store)
}

/// Build the router over an arbitrary document store.
pub fn build_app_with_store(store: Arc<dyn InventoryStore>) -> Router {
    let services = Arc::new(services::AppServices::new(store));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(Extension(services))
        .layer(ServiceBuilder::new().layer(middleware::from_fn(crate::middleware::trace_requests)))
}
