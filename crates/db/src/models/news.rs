//! News article model.

use gazette_core::types::{DbId, Timestamp};
use gazette_core::validation::validate_image_url;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::comment::CommentThread;

/// A row from the `news` table.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct News {
    pub id: DbId,
    pub title: String,
    pub summary: Option<String>,
    pub content: String,
    pub category: String,
    pub author: String,
    pub image_url: Option<String>,
    pub published: bool,
    pub featured: bool,
    pub sort_order: i32,
    pub views: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A news row together with its comment count, used by listings.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct NewsWithCount {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub news: News,
    pub comment_count: i64,
}

/// A news item with its threaded comments, returned by the detail endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsDetail {
    #[serde(flatten)]
    pub news: News,
    pub comments: Vec<CommentThread>,
}

/// DTO for creating a news item.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateNews {
    #[validate(length(min = 5, max = 150, message = "title must be between 5 and 150 characters"))]
    pub title: String,
    #[validate(length(min = 50, message = "content must be at least 50 characters"))]
    pub content: String,
    #[validate(length(max = 300, message = "summary must be at most 300 characters"))]
    pub summary: Option<String>,
    #[validate(custom(function = "validate_image_url"))]
    pub image_url: Option<String>,
    #[validate(length(min = 2, max = 100, message = "author must be between 2 and 100 characters"))]
    pub author: Option<String>,
    #[validate(length(min = 2, max = 50, message = "category must be between 2 and 50 characters"))]
    pub category: Option<String>,
    pub published: Option<bool>,
    pub featured: Option<bool>,
}

/// DTO for updating a news item. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNews {
    #[validate(length(min = 5, max = 150, message = "title must be between 5 and 150 characters"))]
    pub title: Option<String>,
    #[validate(length(min = 50, message = "content must be at least 50 characters"))]
    pub content: Option<String>,
    #[validate(length(max = 300, message = "summary must be at most 300 characters"))]
    pub summary: Option<String>,
    #[validate(custom(function = "validate_image_url"))]
    pub image_url: Option<String>,
    #[validate(length(min = 2, max = 100, message = "author must be between 2 and 100 characters"))]
    pub author: Option<String>,
    #[validate(length(min = 2, max = 50, message = "category must be between 2 and 50 characters"))]
    pub category: Option<String>,
    pub published: Option<bool>,
    pub featured: Option<bool>,
}

/// Filters accepted by the public news listing.
#[derive(Debug, Clone, Default)]
pub struct NewsFilter {
    pub category: Option<String>,
    pub featured: Option<bool>,
}

/// Request body of `PATCH /news/{id}/featured`.
#[derive(Debug, Clone, Deserialize)]
pub struct SetFeatured {
    pub featured: bool,
}

/// Request body of `POST /news/carousel/reorder`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderFeatured {
    pub news_ids: Vec<DbId>,
}
