//! Forum topic and post models.

use gazette_core::pagination::Pagination;
use gazette_core::types::{DbId, Timestamp};
use gazette_core::validation::validate_not_blank;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `forum_topics` table.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ForumTopic {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub author: String,
    pub category: String,
    pub pinned: bool,
    pub locked: bool,
    pub views: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `forum_posts` table.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ForumPost {
    pub id: DbId,
    pub topic_id: DbId,
    pub content: String,
    pub author: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Listing row: topic plus post count and the latest post's author/time.
#[derive(Debug, Clone, FromRow)]
pub struct TopicListRow {
    #[sqlx(flatten)]
    pub topic: ForumTopic,
    pub post_count: i64,
    pub last_post_author: Option<String>,
    pub last_post_at: Option<Timestamp>,
}

/// Author and time of the most recent post in a topic.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LastPost {
    pub author: String,
    pub created_at: Timestamp,
}

/// A topic as shown in listings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicSummary {
    #[serde(flatten)]
    pub topic: ForumTopic,
    pub post_count: i64,
    pub last_post: Option<LastPost>,
}

impl From<TopicListRow> for TopicSummary {
    fn from(row: TopicListRow) -> Self {
        let last_post = match (row.last_post_author, row.last_post_at) {
            (Some(author), Some(created_at)) => Some(LastPost { author, created_at }),
            _ => None,
        };
        Self {
            topic: row.topic,
            post_count: row.post_count,
            last_post,
        }
    }
}

/// A topic with one page of its posts.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicDetail {
    #[serde(flatten)]
    pub topic: ForumTopic,
    pub post_count: i64,
    pub posts: Vec<ForumPost>,
    pub pagination: Pagination,
}

/// Compact topic entry for the statistics panel.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct RecentTopic {
    pub id: DbId,
    pub title: String,
    pub author: String,
    pub created_at: Timestamp,
    pub post_count: i64,
}

/// Aggregate forum statistics.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForumStats {
    pub total_topics: i64,
    pub total_posts: i64,
    pub recent_topics: Vec<RecentTopic>,
}

/// DTO for creating a forum topic.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateForumTopic {
    #[validate(length(min = 5, max = 200, message = "title must be between 5 and 200 characters"))]
    pub title: String,
    #[validate(length(max = 1000, message = "description must be at most 1000 characters"))]
    pub description: Option<String>,
    #[validate(length(min = 2, max = 100, message = "author must be between 2 and 100 characters"))]
    pub author: String,
    #[validate(length(min = 2, max = 50, message = "category must be between 2 and 50 characters"))]
    pub category: Option<String>,
    pub pinned: Option<bool>,
    pub locked: Option<bool>,
}

/// DTO for updating a forum topic. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateForumTopic {
    #[validate(length(min = 5, max = 200, message = "title must be between 5 and 200 characters"))]
    pub title: Option<String>,
    #[validate(length(max = 1000, message = "description must be at most 1000 characters"))]
    pub description: Option<String>,
    #[validate(length(min = 2, max = 100, message = "author must be between 2 and 100 characters"))]
    pub author: Option<String>,
    #[validate(length(min = 2, max = 50, message = "category must be between 2 and 50 characters"))]
    pub category: Option<String>,
    pub pinned: Option<bool>,
    pub locked: Option<bool>,
}

/// DTO for replying to a topic.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateForumPost {
    #[validate(
        length(min = 5, max = 5000, message = "post must be between 5 and 5000 characters"),
        custom(function = "validate_not_blank")
    )]
    pub content: String,
    #[validate(length(min = 2, max = 100, message = "author must be between 2 and 100 characters"))]
    pub author: String,
}
