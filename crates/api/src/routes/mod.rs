pub mod forum;
pub mod health;
pub mod news;
pub mod pages;

use axum::http::{StatusCode, Uri};
use axum::response::IntoResponse;
use axum::Json;
use axum::Router;
use serde_json::json;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /news                                   list, create
/// /news/search                            full-text search (GET)
/// /news/carousel                          featured list (GET)
/// /news/carousel/stats                    carousel statistics (GET)
/// /news/carousel/reorder                  reorder featured items (POST)
/// /news/carousel/clear                    remove every featured item (DELETE)
/// /news/{id}                              get, update, delete
/// /news/{id}/view                         count a view (POST)
/// /news/{id}/featured                     add to / remove from carousel (PATCH)
/// /news/{id}/comments                     add comment (POST)
/// /news/{id}/comments/{comment_id}        delete comment (DELETE)
///
/// /forum                                  list, create
/// /forum/topics                           list (alias)
/// /forum/search                           search topics (GET)
/// /forum/stats                            forum statistics (GET)
/// /forum/{id}                             get with posts, update, delete
/// /forum/{id}/posts                       reply (POST)
/// ```
///
/// Static segments take precedence over `{id}` captures regardless of the
/// order they are declared in. Unknown `/api` paths get a JSON 404.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/news", news::router())
        .nest("/forum", forum::router())
        .fallback(api_not_found)
}

/// JSON 404 for any unmatched path under `/api`.
async fn api_not_found(uri: Uri) -> impl IntoResponse {
    tracing::debug!(path = %uri.path(), "API route not found");
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "success": false,
            "message": "API route not found",
            "code": "NOT_FOUND",
        })),
    )
}
