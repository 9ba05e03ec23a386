use crate::handler::embedded_file_response;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "../web/dist/"]
struct AppAssets;

pub async fn serve_embedded_app(uri: Uri) -> Response {
    let path = match uri.path().trim_start_matches('/') {
        "" => "index.html",
        path => path,
    };
    AppAssets::get(path)
        // client side routes like /dashboards/3 are resolved by the SPA
        .or_else(|| AppAssets::get("index.html"))
        .map(embedded_file_response)
        .unwrap_or_else(|| StatusCode::NOT_FOUND.into_response())
}
