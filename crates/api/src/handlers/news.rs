//! Handlers for news articles.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use gazette_core::content::{contains_pattern, validate_search_term};
use gazette_core::error::CoreError;
use gazette_core::pagination::{PageRequest, DEFAULT_PAGE_LIMIT};
use gazette_core::types::DbId;
use gazette_db::models::comment::build_threads;
use gazette_db::models::news::{CreateNews, NewsDetail, NewsFilter, UpdateNews};
use gazette_db::repositories::{CommentRepo, NewsRepo};
use serde_json::json;

use crate::error::{AppError, AppResult};
use crate::extract::{AppPath, AppQuery, ValidatedJson};
use crate::query::{NewsListParams, SearchParams};
use crate::response::{DataResponse, MessageResponse, PageResponse};
use crate::state::AppState;

fn news_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "News", id })
}

/// GET /api/news
///
/// Published news, newest first, with optional `category` and `featured`
/// filters.
pub async fn list_news(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<NewsListParams>,
) -> AppResult<impl IntoResponse> {
    let page = PageRequest::new(params.page, params.limit, DEFAULT_PAGE_LIMIT);
    let filter = NewsFilter {
        category: params.category.filter(|c| !c.trim().is_empty()),
        featured: params.featured,
    };

    let items = NewsRepo::list_published(&state.pool, &filter, page.limit, page.offset()).await?;
    let total = NewsRepo::count_published(&state.pool, &filter).await?;

    Ok(Json(PageResponse::new(items, page.paginate(total))))
}

/// GET /api/news/search
pub async fn search_news(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<SearchParams>,
) -> AppResult<impl IntoResponse> {
    let term = validate_search_term(params.q.as_deref()).map_err(AppError::BadRequest)?;
    let pattern = contains_pattern(term);
    let page = PageRequest::new(params.page, params.limit, DEFAULT_PAGE_LIMIT);

    let items = NewsRepo::search(&state.pool, &pattern, page.limit, page.offset()).await?;
    let total = NewsRepo::count_search(&state.pool, &pattern).await?;

    tracing::debug!(term, total, "News search");

    Ok(Json(PageResponse::new(items, page.paginate(total))))
}

/// GET /api/news/{id}
///
/// Returns the item with its comment threads and counts the read as a view.
pub async fn get_news(
    State(state): State<AppState>,
    AppPath(news_id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    NewsRepo::increment_views(&state.pool, news_id)
        .await?
        .ok_or_else(|| news_not_found(news_id))?;

    let news = NewsRepo::find_by_id(&state.pool, news_id)
        .await?
        .ok_or_else(|| news_not_found(news_id))?;
    let comments = CommentRepo::list_for_news(&state.pool, news_id).await?;

    Ok(Json(DataResponse::new(NewsDetail {
        news,
        comments: build_threads(comments),
    })))
}

/// POST /api/news
pub async fn create_news(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateNews>,
) -> AppResult<impl IntoResponse> {
    let news = NewsRepo::create(&state.pool, &input).await?;

    tracing::info!(
        news_id = news.id,
        featured = news.featured,
        published = news.published,
        "News created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse::new(news))))
}

/// PUT /api/news/{id}
///
/// Partially update a news item. Absent fields keep their value.
pub async fn update_news(
    State(state): State<AppState>,
    AppPath(news_id): AppPath<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateNews>,
) -> AppResult<impl IntoResponse> {
    let news = NewsRepo::update(&state.pool, news_id, &input)
        .await?
        .ok_or_else(|| news_not_found(news_id))?;

    tracing::info!(news_id, "News updated");

    Ok(Json(DataResponse::new(news)))
}

/// DELETE /api/news/{id}
pub async fn delete_news(
    State(state): State<AppState>,
    AppPath(news_id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    if !NewsRepo::delete(&state.pool, news_id).await? {
        return Err(news_not_found(news_id));
    }

    tracing::info!(news_id, "News deleted");

    Ok(Json(MessageResponse::new("News deleted")))
}

/// POST /api/news/{id}/view
pub async fn record_view(
    State(state): State<AppState>,
    AppPath(news_id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let views = NewsRepo::increment_views(&state.pool, news_id)
        .await?
        .ok_or_else(|| news_not_found(news_id))?;

    Ok(Json(DataResponse::new(json!({ "views": views }))))
}
