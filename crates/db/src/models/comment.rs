//! Comment model for news articles.

use std::collections::HashMap;

use gazette_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `comments` table.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: DbId,
    pub news_id: DbId,
    pub parent_id: Option<DbId>,
    pub content: String,
    pub author: String,
    pub email: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A top-level comment with its direct replies.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentThread {
    #[serde(flatten)]
    pub comment: Comment,
    pub replies: Vec<Comment>,
}

/// DTO for adding a comment to a news item.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateComment {
    #[validate(length(min = 5, max = 1000, message = "comment must be between 5 and 1000 characters"))]
    pub content: String,
    #[validate(length(min = 2, max = 100, message = "author must be between 2 and 100 characters"))]
    pub author: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: Option<String>,
    #[validate(range(min = 1, message = "parentId must be a positive integer"))]
    pub parent_id: Option<DbId>,
}

/// Arrange a flat comment list into threads.
///
/// Top-level comments come newest first; replies under each come oldest
/// first. Replies whose parent is not a top-level comment are dropped, since
/// only one level of nesting is displayed.
pub fn build_threads(comments: Vec<Comment>) -> Vec<CommentThread> {
    let mut roots = Vec::new();
    let mut replies: HashMap<DbId, Vec<Comment>> = HashMap::new();

    for comment in comments {
        match comment.parent_id {
            None => roots.push(comment),
            Some(parent) => replies.entry(parent).or_default().push(comment),
        }
    }

    roots.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| b.id.cmp(&a.id)));

    roots
        .into_iter()
        .map(|comment| {
            let mut children = replies.remove(&comment.id).unwrap_or_default();
            children.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
            CommentThread {
                comment,
                replies: children,
            }
        })
        .collect()
}
