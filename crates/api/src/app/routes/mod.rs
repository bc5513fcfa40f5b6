use axum::{routing::get, Router};

pub mod catalog;
pub mod page;
pub mod system;

/// Router for the inventory endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/", get(page::index))
        .route("/map.svg", get(page::map_svg))
        .nest("/api", catalog::router())
}
