//! Repository for the `news` table.

use gazette_core::content::{DEFAULT_AUTHOR, DEFAULT_CATEGORY};
use gazette_core::types::DbId;
use sqlx::PgPool;

use crate::models::news::{CreateNews, News, NewsFilter, NewsWithCount, UpdateNews};

/// Column list for news queries.
const COLUMNS: &str = "id, title, summary, content, category, author, image_url, \
    published, featured, sort_order, views, created_at, updated_at";

/// Correlated comment count appended to listing queries.
const COMMENT_COUNT: &str =
    "(SELECT COUNT(*) FROM comments c WHERE c.news_id = news.id) AS comment_count";

/// `sort_order` that places a row after every currently featured row.
const APPENDED_SORT_ORDER: &str =
    "(SELECT COALESCE(MAX(f.sort_order) + 1, 0) FROM news f WHERE f.featured)";

/// Aggregate counts backing the carousel statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, sqlx::FromRow)]
pub struct FeaturedCounts {
    pub featured_published: i64,
    pub published: i64,
    pub published_views: i64,
}

/// Provides CRUD and featured-set operations for news.
pub struct NewsRepo;

impl NewsRepo {
    /// Insert a news item. `sort_order` starts at 0, so a featured item
    /// takes its carousel place by recency until the set is reordered.
    pub async fn create(pool: &PgPool, input: &CreateNews) -> Result<News, sqlx::Error> {
        let query = format!(
            "INSERT INTO news
                (title, summary, content, category, author, image_url, published, featured)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, News>(&query)
            .bind(&input.title)
            .bind(&input.summary)
            .bind(&input.content)
            .bind(input.category.as_deref().unwrap_or(DEFAULT_CATEGORY))
            .bind(input.author.as_deref().unwrap_or(DEFAULT_AUTHOR))
            .bind(&input.image_url)
            .bind(input.published.unwrap_or(false))
            .bind(input.featured.unwrap_or(false))
            .fetch_one(pool)
            .await
    }

    /// Find a news item by its ID, published or not.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<News>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM news WHERE id = $1");
        sqlx::query_as::<_, News>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List published news, newest first, with optional category/featured filters.
    pub async fn list_published(
        pool: &PgPool,
        filter: &NewsFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<NewsWithCount>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS}, {COMMENT_COUNT} FROM news
             WHERE published
               AND ($1::TEXT IS NULL OR category = $1)
               AND ($2::BOOLEAN IS NULL OR featured = $2)
             ORDER BY created_at DESC, id DESC
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, NewsWithCount>(&query)
            .bind(&filter.category)
            .bind(filter.featured)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count published news matching the same filters as [`Self::list_published`].
    pub async fn count_published(pool: &PgPool, filter: &NewsFilter) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM news
             WHERE published
               AND ($1::TEXT IS NULL OR category = $1)
               AND ($2::BOOLEAN IS NULL OR featured = $2)",
        )
        .bind(&filter.category)
        .bind(filter.featured)
        .fetch_one(pool)
        .await
    }

    /// Case-insensitive search over title, summary and content of published news.
    ///
    /// `pattern` is an `ILIKE` pattern, see `gazette_core::content::contains_pattern`.
    pub async fn search(
        pool: &PgPool,
        pattern: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<NewsWithCount>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS}, {COMMENT_COUNT} FROM news
             WHERE published
               AND (title ILIKE $1 OR summary ILIKE $1 OR content ILIKE $1)
             ORDER BY created_at DESC, id DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, NewsWithCount>(&query)
            .bind(pattern)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count rows matched by [`Self::search`].
    pub async fn count_search(pool: &PgPool, pattern: &str) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM news
             WHERE published
               AND (title ILIKE $1 OR summary ILIKE $1 OR content ILIKE $1)",
        )
        .bind(pattern)
        .fetch_one(pool)
        .await
    }

    /// Update a news item by ID, returning the updated row.
    ///
    /// Turning `featured` on for a row that was not featured appends it to
    /// the end of the featured order.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateNews,
    ) -> Result<Option<News>, sqlx::Error> {
        let query = format!(
            "UPDATE news SET
                title = COALESCE($2, title),
                summary = COALESCE($3, summary),
                content = COALESCE($4, content),
                category = COALESCE($5, category),
                author = COALESCE($6, author),
                image_url = COALESCE($7, image_url),
                published = COALESCE($8, published),
                sort_order = CASE WHEN $9 IS TRUE AND NOT featured
                    THEN {APPENDED_SORT_ORDER} ELSE sort_order END,
                featured = COALESCE($9, featured)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, News>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.summary)
            .bind(&input.content)
            .bind(&input.category)
            .bind(&input.author)
            .bind(&input.image_url)
            .bind(input.published)
            .bind(input.featured)
            .fetch_optional(pool)
            .await
    }

    /// Delete a news item by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM news WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Atomically increment the view counter. Returns the new count, or
    /// `None` when the row does not exist.
    pub async fn increment_views(pool: &PgPool, id: DbId) -> Result<Option<i32>, sqlx::Error> {
        sqlx::query_scalar("UPDATE news SET views = views + 1 WHERE id = $1 RETURNING views")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    // -----------------------------------------------------------------------
    // Featured set
    // -----------------------------------------------------------------------

    /// Featured and published news in display order.
    pub async fn list_featured(pool: &PgPool, limit: i64) -> Result<Vec<News>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM news
             WHERE featured AND published
             ORDER BY sort_order ASC, created_at DESC, id DESC
             LIMIT $1"
        );
        sqlx::query_as::<_, News>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Set or clear the `featured` flag.
    ///
    /// Setting it on a row that was not featured appends the row to the end
    /// of the featured order; every other row keeps its `sort_order`.
    /// Clearing it leaves `sort_order` as is.
    pub async fn set_featured(
        pool: &PgPool,
        id: DbId,
        featured: bool,
    ) -> Result<Option<News>, sqlx::Error> {
        let query = format!(
            "UPDATE news SET
                sort_order = CASE WHEN $2 AND NOT featured
                    THEN {APPENDED_SORT_ORDER} ELSE sort_order END,
                featured = $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, News>(&query)
            .bind(id)
            .bind(featured)
            .fetch_optional(pool)
            .await
    }

    /// Write a single row's `sort_order`. Returns `false` if the row does not exist.
    pub async fn set_sort_order(
        pool: &PgPool,
        id: DbId,
        sort_order: i32,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE news SET sort_order = $2 WHERE id = $1")
            .bind(id)
            .bind(sort_order)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Clear `featured` on every featured row in one statement.
    pub async fn clear_featured(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE news SET featured = FALSE WHERE featured")
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Counts behind the carousel statistics.
    pub async fn featured_counts(pool: &PgPool) -> Result<FeaturedCounts, sqlx::Error> {
        sqlx::query_as::<_, FeaturedCounts>(
            "SELECT
                COUNT(*) FILTER (WHERE featured) AS featured_published,
                COUNT(*) AS published,
                COALESCE(SUM(views), 0)::BIGINT AS published_views
             FROM news
             WHERE published",
        )
        .fetch_one(pool)
        .await
    }
}
