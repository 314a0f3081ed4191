//! Handlers for the discussion forum (topics and their posts).

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use gazette_core::content::{contains_pattern, validate_search_term, RECENT_TOPICS_LIMIT};
use gazette_core::error::CoreError;
use gazette_core::pagination::{PageRequest, DEFAULT_PAGE_LIMIT, DEFAULT_POST_PAGE_LIMIT};
use gazette_core::types::DbId;
use gazette_db::models::forum::{
    CreateForumPost, CreateForumTopic, ForumStats, TopicDetail, UpdateForumTopic,
};
use gazette_db::repositories::{ForumPostRepo, ForumTopicRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{AppPath, AppQuery, ValidatedJson};
use crate::query::{PageParams, SearchParams, TopicListParams};
use crate::response::{DataResponse, MessageResponse, PageResponse};
use crate::state::AppState;

fn topic_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "ForumTopic",
        id,
    })
}

// ---------------------------------------------------------------------------
// Topics
// ---------------------------------------------------------------------------

/// GET /api/forum/topics
///
/// Pinned topics first, then by latest activity.
pub async fn list_topics(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<TopicListParams>,
) -> AppResult<impl IntoResponse> {
    let page = PageRequest::new(params.page, params.limit, DEFAULT_PAGE_LIMIT);
    let category = params.category.as_deref().filter(|c| !c.trim().is_empty());

    let topics = ForumTopicRepo::list(&state.pool, category, page.limit, page.offset()).await?;
    let total = ForumTopicRepo::count(&state.pool, category).await?;

    Ok(Json(PageResponse::new(topics, page.paginate(total))))
}

/// GET /api/forum/search
pub async fn search_topics(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<SearchParams>,
) -> AppResult<impl IntoResponse> {
    let term = validate_search_term(params.q.as_deref()).map_err(AppError::BadRequest)?;
    let pattern = contains_pattern(term);
    let page = PageRequest::new(params.page, params.limit, DEFAULT_PAGE_LIMIT);

    let topics = ForumTopicRepo::search(&state.pool, &pattern, page.limit, page.offset()).await?;
    let total = ForumTopicRepo::count_search(&state.pool, &pattern).await?;

    Ok(Json(PageResponse::new(topics, page.paginate(total))))
}

/// GET /api/forum/stats
pub async fn forum_stats(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let stats = ForumStats {
        total_topics: ForumTopicRepo::count_all(&state.pool).await?,
        total_posts: ForumPostRepo::count_all(&state.pool).await?,
        recent_topics: ForumTopicRepo::recent(&state.pool, RECENT_TOPICS_LIMIT).await?,
    };

    Ok(Json(DataResponse::new(stats)))
}

/// GET /api/forum/{id}
///
/// Topic with one page of posts (oldest first). Counts as a view.
pub async fn get_topic(
    State(state): State<AppState>,
    AppPath(topic_id): AppPath<DbId>,
    AppQuery(params): AppQuery<PageParams>,
) -> AppResult<impl IntoResponse> {
    if !ForumTopicRepo::increment_views(&state.pool, topic_id).await? {
        return Err(topic_not_found(topic_id));
    }

    let topic = ForumTopicRepo::find_by_id(&state.pool, topic_id)
        .await?
        .ok_or_else(|| topic_not_found(topic_id))?;

    let page = PageRequest::new(params.page, params.limit, DEFAULT_POST_PAGE_LIMIT);
    let posts =
        ForumPostRepo::list_for_topic(&state.pool, topic_id, page.limit, page.offset()).await?;
    let post_count = ForumPostRepo::count_for_topic(&state.pool, topic_id).await?;

    Ok(Json(DataResponse::new(TopicDetail {
        topic,
        post_count,
        posts,
        pagination: page.paginate(post_count),
    })))
}

/// POST /api/forum
pub async fn create_topic(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateForumTopic>,
) -> AppResult<impl IntoResponse> {
    let topic = ForumTopicRepo::create(&state.pool, &input).await?;

    tracing::info!(topic_id = topic.id, category = %topic.category, "Forum topic created");

    Ok((StatusCode::CREATED, Json(DataResponse::new(topic))))
}

/// PUT /api/forum/{id}
pub async fn update_topic(
    State(state): State<AppState>,
    AppPath(topic_id): AppPath<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateForumTopic>,
) -> AppResult<impl IntoResponse> {
    let topic = ForumTopicRepo::update(&state.pool, topic_id, &input)
        .await?
        .ok_or_else(|| topic_not_found(topic_id))?;

    tracing::info!(topic_id, "Forum topic updated");

    Ok(Json(DataResponse::new(topic)))
}

/// DELETE /api/forum/{id}
pub async fn delete_topic(
    State(state): State<AppState>,
    AppPath(topic_id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    if !ForumTopicRepo::delete(&state.pool, topic_id).await? {
        return Err(topic_not_found(topic_id));
    }

    tracing::info!(topic_id, "Forum topic deleted");

    Ok(Json(MessageResponse::new("Topic deleted")))
}

// ---------------------------------------------------------------------------
// Posts
// ---------------------------------------------------------------------------

/// POST /api/forum/{id}/posts
///
/// Rejected with 403 when the topic is locked.
pub async fn add_post(
    State(state): State<AppState>,
    AppPath(topic_id): AppPath<DbId>,
    ValidatedJson(input): ValidatedJson<CreateForumPost>,
) -> AppResult<impl IntoResponse> {
    let topic = ForumTopicRepo::find_by_id(&state.pool, topic_id)
        .await?
        .ok_or_else(|| topic_not_found(topic_id))?;

    if topic.locked {
        return Err(AppError::Core(CoreError::Forbidden(
            "Topic is locked for new posts".into(),
        )));
    }

    let post = ForumPostRepo::create(&state.pool, topic_id, &input).await?;
    ForumTopicRepo::touch(&state.pool, topic_id).await?;

    tracing::info!(topic_id, post_id = post.id, "Forum post added");

    Ok((StatusCode::CREATED, Json(DataResponse::new(post))))
}
