//! The pages and other static assets

use std::path::Path;

use axum::Router;
use tower_http::services::ServeDir;
use tower_http::services::ServeFile;

/// Router for the pages, unmatched paths are looked up in the public directory
pub fn router(public_dir: &Path) -> Router {
    Router::new()
        .route_service("/", ServeFile::new(public_dir.join("index.html")))
        .route_service(
            "/create-note",
            ServeFile::new(public_dir.join("create-note.html")),
        )
        .route_service("/quiz", ServeFile::new(public_dir.join("quiz.html")))
        .fallback_service(ServeDir::new(public_dir))
}
