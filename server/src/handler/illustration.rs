use crate::handler::embedded_file_response;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use rust_embed::RustEmbed;
use tracing::debug;

#[derive(RustEmbed)]
#[folder = "static/images/illustrations/"]
struct IllustrationAssets;

/// no fallback here, an unknown illustration is a plain 404 and the browser shows the alt text
pub async fn serve_illustration(uri: Uri) -> Response {
    let path = uri.path().trim_start_matches('/');
    match IllustrationAssets::get(path) {
        Some(file) => embedded_file_response(file),
        None => {
            debug!("Unknown illustration '{}'", path);
            StatusCode::NOT_FOUND.into_response()
        }
    }
}
