//! Route definitions for news, comments and the carousel.

use axum::routing::{delete, get, patch, post};
use axum::Router;

use crate::handlers::{carousel, comments, news};
use crate::state::AppState;

/// News routes mounted at `/news`.
///
/// ```text
/// GET    /                          -> list_news
/// POST   /                          -> create_news
/// GET    /search                    -> search_news
/// GET    /carousel                  -> list_carousel
/// GET    /carousel/stats            -> carousel_stats
/// POST   /carousel/reorder          -> reorder_carousel
/// DELETE /carousel/clear            -> clear_carousel
/// GET    /{id}                      -> get_news
/// PUT    /{id}                      -> update_news
/// DELETE /{id}                      -> delete_news
/// POST   /{id}/view                 -> record_view
/// PATCH  /{id}/featured             -> set_featured
/// POST   /{id}/comments             -> add_comment
/// DELETE /{id}/comments/{comment_id} -> delete_comment
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(news::list_news).post(news::create_news))
        .route(
            "/{id}",
            get(news::get_news)
                .put(news::update_news)
                .delete(news::delete_news),
        )
        .route("/{id}/view", post(news::record_view))
        .route("/{id}/featured", patch(carousel::set_featured))
        .route("/{id}/comments", post(comments::add_comment))
        .route(
            "/{id}/comments/{comment_id}",
            delete(comments::delete_comment),
        )
        .route("/search", get(news::search_news))
        .route("/carousel", get(carousel::list_carousel))
        .route("/carousel/stats", get(carousel::carousel_stats))
        .route("/carousel/reorder", post(carousel::reorder_carousel))
        .route("/carousel/clear", delete(carousel::clear_carousel))
}
