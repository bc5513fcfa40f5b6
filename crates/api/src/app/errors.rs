use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use stockmap_infra::StoreError;

/// A document that cannot be loaded fails the request; there is no fallback
/// to stale or default data.
pub fn store_error_to_response(err: StoreError) -> axum::response::Response {
    json_error(
        StatusCode::INTERNAL_SERVER_ERROR,
        "inventory_unavailable",
        err.to_string(),
    )
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
