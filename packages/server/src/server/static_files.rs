use axum::{
    extract::Path,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

// Site stylesheet and scripts, embedded at compile time
#[derive(RustEmbed)]
#[folder = "static/"]
pub struct SiteAssets;

/// Serve `/static/*path` from the embedded assets
pub async fn serve_static(Path(path): Path<String>) -> Response {
    let path = path.trim_start_matches('/');

    match SiteAssets::get(path) {
        Some(content) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            ([(header::CONTENT_TYPE, mime.as_ref())], content.data).into_response()
        }
        None => (StatusCode::NOT_FOUND, "404 Not Found").into_response(),
    }
}
