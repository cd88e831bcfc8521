//! # CBO Explorer host
//!
//! Thin native host for the CBO Explorer single-page application. It serves
//! the compiled WASM bundle with an SPA fallback (unknown paths return
//! `index.html` so the client-side router can take over) and exposes a
//! health probe. All catalog data is fetched by the client directly from
//! the external API; this process never proxies it.

pub mod config;

use std::path::Path;

use axum::{routing::get, Json, Router};
use tower_http::services::{ServeDir, ServeFile};

/// Router serving the SPA bundle with client-side route fallback.
pub fn create_app(dist_dir: &str) -> Router {
    let index = ServeFile::new(Path::new(dist_dir).join("index.html"));
    let assets = ServeDir::new(dist_dir).not_found_service(index);

    Router::new()
        .route(
            "/health",
            get(|| async { Json(serde_json::json!({ "status": "ok" })) }),
        )
        .fallback_service(assets)
}
