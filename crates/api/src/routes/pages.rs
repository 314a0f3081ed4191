//! HTML pages of the static frontend.
//!
//! Each page is a plain file under `PUBLIC_DIR`; the browser fetches its data
//! from `/api`. Anything else falls through to the directory itself, and
//! missing files get `404.html` with a 404 status.

use std::path::Path;

use axum::routing::get_service;
use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

use crate::state::AppState;

/// Page routes and the file they serve.
///
/// ```text
/// /                 -> index.html
/// /news/{id}        -> news.html
/// /forum            -> forum.html
/// /forum/{id}       -> forum-topic.html
/// /admin/carousel   -> admin-carousel.html
/// /create-news      -> create-news.html
/// /sobre            -> sobre.html
/// /contato          -> contato.html
/// ```
pub const PAGES: &[(&str, &str)] = &[
    ("/", "index.html"),
    ("/news/{id}", "news.html"),
    ("/forum", "forum.html"),
    ("/forum/{id}", "forum-topic.html"),
    ("/admin/carousel", "admin-carousel.html"),
    ("/create-news", "create-news.html"),
    ("/sobre", "sobre.html"),
    ("/contato", "contato.html"),
];

/// Page file served for unknown non-API paths.
pub const NOT_FOUND_PAGE: &str = "404.html";

/// Routes for the named pages.
pub fn router(public_dir: &Path) -> Router<AppState> {
    PAGES.iter().fold(Router::new(), |router, (path, file)| {
        router.route(path, get_service(ServeFile::new(public_dir.join(file))))
    })
}

/// Fallback service: files under `public_dir`, else the 404 page.
pub fn static_files(public_dir: &Path) -> ServeDir<tower_http::set_status::SetStatus<ServeFile>> {
    ServeDir::new(public_dir).not_found_service(ServeFile::new(public_dir.join(NOT_FOUND_PAGE)))
}
