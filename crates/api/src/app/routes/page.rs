//! Page-render path: the full view model as JSON, or the map as SVG.

use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use stockmap_inventory::build_view;

use crate::app::{dto, errors, svg};
use crate::app::services::AppServices;

pub async fn index(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::PageQuery>,
) -> axum::response::Response {
    let doc = match services.load_document() {
        Ok(doc) => doc,
        Err(e) => return errors::store_error_to_response(e),
    };

    let view = build_view(&doc, &query.to_params());
    (StatusCode::OK, Json(view)).into_response()
}

pub async fn map_svg(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::PageQuery>,
) -> axum::response::Response {
    let doc = match services.load_document() {
        Ok(doc) => doc,
        Err(e) => return errors::store_error_to_response(e),
    };

    let view = build_view(&doc, &query.to_params());
    match svg::render_map(&view) {
        Ok(body) => (StatusCode::OK, [(header::CONTENT_TYPE, "image/svg+xml")], body).into_response(),
        Err(e) => errors::json_error(StatusCode::INTERNAL_SERVER_ERROR, "render_error", e.to_string()),
    }
}
