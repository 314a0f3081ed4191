//! Handlers for the featured-news carousel.
//!
//! All of them go through [`gazette_db::featured::FeaturedSet`] on the
//! application state, never through the news repository directly.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use gazette_core::error::CoreError;
use gazette_core::featured::validate_reorder_ids;
use gazette_core::types::DbId;
use gazette_db::models::news::{ReorderFeatured, SetFeatured};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::query::CarouselParams;
use crate::response::{CountedResponse, DataResponse, MessageResponse};
use crate::state::AppState;

/// Payload of `DELETE /api/news/carousel/clear`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearedCarousel {
    pub removed_count: u64,
}

/// GET /api/news/carousel
///
/// Featured and published items in carousel order, `limit` defaulting to 5.
pub async fn list_carousel(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<CarouselParams>,
) -> AppResult<impl IntoResponse> {
    let items = state.featured.list_featured(params.limit).await?;

    Ok(Json(CountedResponse::new(items)))
}

/// GET /api/news/carousel/stats
pub async fn carousel_stats(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let stats = state.featured.stats().await?;

    Ok(Json(DataResponse::new(stats)))
}

/// DELETE /api/news/carousel/clear
pub async fn clear_carousel(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let removed_count = state.featured.clear_featured().await?;

    tracing::info!(count = removed_count, "Carousel cleared");

    Ok(Json(MessageResponse::with_data(
        format!("{removed_count} news removed from the carousel"),
        ClearedCarousel { removed_count },
    )))
}

/// PATCH /api/news/{id}/featured
///
/// Adding an item appends it after the current carousel order; removing it
/// leaves its `sortOrder` untouched.
pub async fn set_featured(
    State(state): State<AppState>,
    AppPath(news_id): AppPath<DbId>,
    AppJson(input): AppJson<SetFeatured>,
) -> AppResult<impl IntoResponse> {
    let news = state
        .featured
        .set_featured(news_id, input.featured)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "News",
            id: news_id,
        }))?;

    tracing::info!(news_id, featured = news.featured, "Carousel membership changed");

    let message = if news.featured {
        "News added to the carousel"
    } else {
        "News removed from the carousel"
    };
    Ok(Json(MessageResponse::with_data(message, news)))
}

/// POST /api/news/carousel/reorder
///
/// Body `{"newsIds": [..]}`. Each id gets `sortOrder = position`; unknown
/// ids are skipped and reported back.
pub async fn reorder_carousel(
    State(state): State<AppState>,
    body: Result<AppJson<ReorderFeatured>, AppError>,
) -> AppResult<impl IntoResponse> {
    let AppJson(input) = body.map_err(|err| {
        tracing::debug!(error = %err, "Rejected reorder body");
        AppError::Core(CoreError::Validation(
            "newsIds must be a non-empty array of news ids".to_string(),
        ))
    })?;
    validate_reorder_ids(&input.news_ids).map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let outcome = state.featured.reorder(&input.news_ids).await?;

    tracing::info!(
        updated = outcome.updated.len(),
        skipped = outcome.skipped.len(),
        "Carousel reordered",
    );

    Ok(Json(MessageResponse::with_data(
        "Carousel order updated",
        outcome,
    )))
}
