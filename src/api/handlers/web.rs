//! Presentation assets and health check.
//!
//! The page and icon are compiled into the binary from `static/`.

use crate::types::HealthResponse;
use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "static/"]
struct Assets;

/// GET / - chat page
pub async fn index() -> Response {
    serve_asset("index.html")
}

/// GET /favicon.ico - served as SVG
pub async fn favicon() -> Response {
    serve_asset("favicon.svg")
}

/// GET /health - Health check
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

fn serve_asset(path: &str) -> Response {
    match Assets::get(path) {
        Some(file) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            ([(header::CONTENT_TYPE, mime.to_string())], file.data).into_response()
        }
        None => {
            tracing::warn!(asset = path, "Embedded asset missing");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}
