mod app;
mod dashboard;
mod illustration;
mod organization;
mod session;

pub use app::serve_embedded_app;
pub use dashboard::{api_create_dashboard, api_get_dashboard, api_list_dashboards};
pub use illustration::serve_illustration;
pub use organization::api_get_organization_status;
pub use session::api_get_session;

use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use rust_embed::EmbeddedFile;
use tracing::error;

pub(crate) fn header_value_as_opt_string(headers: &HeaderMap, key: &str) -> Option<String> {
    headers
        .get(key)
        .and_then(|v| v.to_str().ok())
        .map(String::from)
}

/// logs the db failure and hides it behind a 500
pub(crate) fn internal_error(context: &str, err: sqlx::Error) -> (StatusCode, String) {
    error!("{context}: {err}");
    (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
}

pub(crate) fn embedded_file_response(file: EmbeddedFile) -> Response {
    (
        [(header::CONTENT_TYPE, file.metadata.mimetype())],
        file.data,
    )
        .into_response()
}
