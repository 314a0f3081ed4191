//! Repository for the `forum_posts` table.

use gazette_core::types::DbId;
use sqlx::PgPool;

use crate::models::forum::{CreateForumPost, ForumPost};

/// Column list for forum post queries.
const COLUMNS: &str = "id, topic_id, content, author, created_at, updated_at";

/// Provides CRUD operations for forum posts.
pub struct ForumPostRepo;

impl ForumPostRepo {
    /// Add a post to a topic, returning the created row.
    pub async fn create(
        pool: &PgPool,
        topic_id: DbId,
        input: &CreateForumPost,
    ) -> Result<ForumPost, sqlx::Error> {
        let query = format!(
            "INSERT INTO forum_posts (topic_id, content, author)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ForumPost>(&query)
            .bind(topic_id)
            .bind(&input.content)
            .bind(&input.author)
            .fetch_one(pool)
            .await
    }

    /// One page of a topic's posts, oldest first.
    pub async fn list_for_topic(
        pool: &PgPool,
        topic_id: DbId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ForumPost>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM forum_posts
             WHERE topic_id = $1
             ORDER BY created_at ASC, id ASC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, ForumPost>(&query)
            .bind(topic_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Number of posts in a topic.
    pub async fn count_for_topic(pool: &PgPool, topic_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM forum_posts WHERE topic_id = $1")
            .bind(topic_id)
            .fetch_one(pool)
            .await
    }

    /// Total number of posts across all topics.
    pub async fn count_all(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM forum_posts")
            .fetch_one(pool)
            .await
    }
}
