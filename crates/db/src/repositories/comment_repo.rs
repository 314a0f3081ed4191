//! Repository for the `comments` table.

use gazette_core::types::DbId;
use sqlx::PgPool;

use crate::models::comment::{Comment, CreateComment};

/// Column list for comment queries.
const COLUMNS: &str = "id, news_id, parent_id, content, author, email, created_at, updated_at";

/// Provides CRUD operations for news comments.
pub struct CommentRepo;

impl CommentRepo {
    /// Add a comment to a news item, returning the created row.
    pub async fn create(
        pool: &PgPool,
        news_id: DbId,
        input: &CreateComment,
    ) -> Result<Comment, sqlx::Error> {
        let query = format!(
            "INSERT INTO comments (news_id, parent_id, content, author, email)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(news_id)
            .bind(input.parent_id)
            .bind(&input.content)
            .bind(&input.author)
            .bind(&input.email)
            .fetch_one(pool)
            .await
    }

    /// Find a comment by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Comment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM comments WHERE id = $1");
        sqlx::query_as::<_, Comment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All comments of a news item, oldest first.
    pub async fn list_for_news(pool: &PgPool, news_id: DbId) -> Result<Vec<Comment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM comments
             WHERE news_id = $1
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(news_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a comment that belongs to the given news item.
    /// Returns `true` if a row was deleted.
    pub async fn delete_for_news(
        pool: &PgPool,
        news_id: DbId,
        comment_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1 AND news_id = $2")
            .bind(comment_id)
            .bind(news_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
