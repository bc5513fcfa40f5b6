//! JSON catalog endpoints: map bounds, full item list, text search.

use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use stockmap_inventory::filter;

use crate::app::dto;
use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/map", get(get_map))
        .route("/items", get(get_items))
        .route("/search", get(search_items))
}

pub async fn get_map(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    let doc = match services.load_document() {
        Ok(doc) => doc,
        Err(e) => return errors::store_error_to_response(e),
    };

    (StatusCode::OK, Json(doc.map)).into_response()
}

/// All items as stored, including ones placed outside the map.
pub async fn get_items(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    let doc = match services.load_document() {
        Ok(doc) => doc,
        Err(e) => return errors::store_error_to_response(e),
    };

    (StatusCode::OK, Json(doc.items)).into_response()
}

/// Text search only. Unlike the page view, category and column filters are not
/// applied here.
pub async fn search_items(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::SearchQuery>,
) -> axum::response::Response {
    let doc = match services.load_document() {
        Ok(doc) => doc,
        Err(e) => return errors::store_error_to_response(e),
    };

    let q = query.q.as_deref().unwrap_or_default();
    let matches = filter::search(&doc.items, q);
    tracing::debug!(query = q, matches = matches.len(), "item search");

    (StatusCode::OK, Json(matches)).into_response()
}
