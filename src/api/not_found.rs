use axum::{http::StatusCode, response::Response};

use crate::{error::error_page, views::ErrorView};

/// Fallback for every path and method without a route.
pub async fn not_found() -> Response {
    error_page(StatusCode::NOT_FOUND, &ErrorView::not_found())
}
