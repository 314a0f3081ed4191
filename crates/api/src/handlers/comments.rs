//! Handlers for comments on news articles.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use gazette_core::error::CoreError;
use gazette_core::types::DbId;
use gazette_db::models::comment::CreateComment;
use gazette_db::repositories::{CommentRepo, NewsRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{AppPath, ValidatedJson};
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

/// POST /api/news/{id}/comments
///
/// A reply names its parent with `parentId`; the parent must belong to the
/// same news item.
pub async fn add_comment(
    State(state): State<AppState>,
    AppPath(news_id): AppPath<DbId>,
    ValidatedJson(input): ValidatedJson<CreateComment>,
) -> AppResult<impl IntoResponse> {
    NewsRepo::find_by_id(&state.pool, news_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "News",
            id: news_id,
        }))?;

    if let Some(parent_id) = input.parent_id {
        let parent = CommentRepo::find_by_id(&state.pool, parent_id).await?;
        if parent.map(|p| p.news_id) != Some(news_id) {
            return Err(AppError::BadRequest(format!(
                "parentId {parent_id} is not a comment on news {news_id}"
            )));
        }
    }

    let comment = CommentRepo::create(&state.pool, news_id, &input).await?;

    tracing::info!(
        news_id,
        comment_id = comment.id,
        parent_id = ?comment.parent_id,
        "Comment added",
    );

    Ok((StatusCode::CREATED, Json(DataResponse::new(comment))))
}

/// DELETE /api/news/{id}/comments/{comment_id}
pub async fn delete_comment(
    State(state): State<AppState>,
    AppPath((news_id, comment_id)): AppPath<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    if !CommentRepo::delete_for_news(&state.pool, news_id, comment_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Comment",
            id: comment_id,
        }));
    }

    tracing::info!(news_id, comment_id, "Comment deleted");

    Ok(Json(MessageResponse::new("Comment deleted")))
}
