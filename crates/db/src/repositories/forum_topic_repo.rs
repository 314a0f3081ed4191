//! Repository for the `forum_topics` table.

use gazette_core::content::DEFAULT_CATEGORY;
use gazette_core::types::DbId;
use sqlx::PgPool;

use crate::models::forum::{
    CreateForumTopic, ForumTopic, RecentTopic, TopicListRow, TopicSummary, UpdateForumTopic,
};

/// Column list for forum topic queries.
const COLUMNS: &str = "id, title, description, author, category, pinned, locked, views, \
    created_at, updated_at";

/// Same columns qualified with the `t` alias used by listing joins.
const T_COLUMNS: &str = "t.id, t.title, t.description, t.author, t.category, t.pinned, \
    t.locked, t.views, t.created_at, t.updated_at";

/// Post count plus the latest post's author and timestamp.
const LISTING_JOINS: &str = "
    LEFT JOIN LATERAL (
        SELECT COUNT(*) AS post_count FROM forum_posts p WHERE p.topic_id = t.id
    ) pc ON TRUE
    LEFT JOIN LATERAL (
        SELECT p.author, p.created_at FROM forum_posts p
        WHERE p.topic_id = t.id
        ORDER BY p.created_at DESC, p.id DESC
        LIMIT 1
    ) lp ON TRUE";

/// Provides CRUD operations for forum topics.
pub struct ForumTopicRepo;

impl ForumTopicRepo {
    /// Create a new topic, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateForumTopic) -> Result<ForumTopic, sqlx::Error> {
        let query = format!(
            "INSERT INTO forum_topics (title, description, author, category, pinned, locked)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ForumTopic>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.author)
            .bind(input.category.as_deref().unwrap_or(DEFAULT_CATEGORY))
            .bind(input.pinned.unwrap_or(false))
            .bind(input.locked.unwrap_or(false))
            .fetch_one(pool)
            .await
    }

    /// Find a topic by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ForumTopic>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM forum_topics WHERE id = $1");
        sqlx::query_as::<_, ForumTopic>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List topics, pinned first then most recently active.
    pub async fn list(
        pool: &PgPool,
        category: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<TopicSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {T_COLUMNS}, pc.post_count,
                    lp.author AS last_post_author, lp.created_at AS last_post_at
             FROM forum_topics t {LISTING_JOINS}
             WHERE ($1::TEXT IS NULL OR t.category = $1)
             ORDER BY t.pinned DESC, t.updated_at DESC, t.id DESC
             LIMIT $2 OFFSET $3"
        );
        let rows = sqlx::query_as::<_, TopicListRow>(&query)
            .bind(category)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(TopicSummary::from).collect())
    }

    /// Count topics, optionally within one category.
    pub async fn count(pool: &PgPool, category: Option<&str>) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM forum_topics WHERE ($1::TEXT IS NULL OR category = $1)")
            .bind(category)
            .fetch_one(pool)
            .await
    }

    /// Case-insensitive search over title and description.
    pub async fn search(
        pool: &PgPool,
        pattern: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<TopicSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {T_COLUMNS}, pc.post_count,
                    lp.author AS last_post_author, lp.created_at AS last_post_at
             FROM forum_topics t {LISTING_JOINS}
             WHERE t.title ILIKE $1 OR t.description ILIKE $1
             ORDER BY t.updated_at DESC, t.id DESC
             LIMIT $2 OFFSET $3"
        );
        let rows = sqlx::query_as::<_, TopicListRow>(&query)
            .bind(pattern)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(TopicSummary::from).collect())
    }

    /// Count rows matched by [`Self::search`].
    pub async fn count_search(pool: &PgPool, pattern: &str) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM forum_topics WHERE title ILIKE $1 OR description ILIKE $1",
        )
        .bind(pattern)
        .fetch_one(pool)
        .await
    }

    /// Most recently created topics with their post counts.
    pub async fn recent(pool: &PgPool, limit: i64) -> Result<Vec<RecentTopic>, sqlx::Error> {
        sqlx::query_as::<_, RecentTopic>(
            "SELECT t.id, t.title, t.author, t.created_at,
                    (SELECT COUNT(*) FROM forum_posts p WHERE p.topic_id = t.id) AS post_count
             FROM forum_topics t
             ORDER BY t.created_at DESC, t.id DESC
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// Update a topic by ID, returning the updated row.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateForumTopic,
    ) -> Result<Option<ForumTopic>, sqlx::Error> {
        let query = format!(
            "UPDATE forum_topics SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                author = COALESCE($4, author),
                category = COALESCE($5, category),
                pinned = COALESCE($6, pinned),
                locked = COALESCE($7, locked)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ForumTopic>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.author)
            .bind(&input.category)
            .bind(input.pinned)
            .bind(input.locked)
            .fetch_optional(pool)
            .await
    }

    /// Delete a topic (and, by cascade, its posts). Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM forum_topics WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Atomically increment the topic view counter.
    pub async fn increment_views(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE forum_topics SET views = views + 1 WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Mark a topic as active now; the `updated_at` trigger does the rest.
    pub async fn touch(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE forum_topics SET updated_at = NOW() WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Total number of topics.
    pub async fn count_all(pool: &PgPool) -> Result<i64, sqlx::Error> {
        Self::count(pool, None).await
    }
}
