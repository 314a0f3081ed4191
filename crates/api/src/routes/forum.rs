//! Route definitions for the forum.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::forum;
use crate::state::AppState;

/// Forum routes mounted at `/forum`.
///
/// ```text
/// GET    /              -> list_topics
/// POST   /              -> create_topic
/// GET    /topics        -> list_topics
/// GET    /search        -> search_topics
/// GET    /stats         -> forum_stats
/// GET    /{id}          -> get_topic
/// PUT    /{id}          -> update_topic
/// DELETE /{id}          -> delete_topic
/// POST   /{id}/posts    -> add_post
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(forum::list_topics).post(forum::create_topic))
        .route("/topics", get(forum::list_topics))
        .route("/search", get(forum::search_topics))
        .route("/stats", get(forum::forum_stats))
        .route(
            "/{id}",
            get(forum::get_topic)
                .put(forum::update_topic)
                .delete(forum::delete_topic),
        )
        .route("/{id}/posts", post(forum::add_post))
}
