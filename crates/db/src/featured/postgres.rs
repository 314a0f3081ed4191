use async_trait::async_trait;
use gazette_core::types::DbId;

use super::{FeaturedCounts, FeaturedStore};
use crate::models::news::News;
use crate::repositories::NewsRepo;
use crate::DbPool;

/// [`FeaturedStore`] over the `news` table.
#[derive(Clone)]
pub struct PgFeaturedStore {
    pool: DbPool,
}

impl PgFeaturedStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FeaturedStore for PgFeaturedStore {
    async fn list_featured(&self, limit: i64) -> Result<Vec<News>, sqlx::Error> {
        NewsRepo::list_featured(&self.pool, limit).await
    }

    async fn set_featured(&self, id: DbId, featured: bool) -> Result<Option<News>, sqlx::Error> {
        NewsRepo::set_featured(&self.pool, id, featured).await
    }

    async fn set_sort_order(&self, id: DbId, sort_order: i32) -> Result<bool, sqlx::Error> {
        NewsRepo::set_sort_order(&self.pool, id, sort_order).await
    }

    async fn clear_featured(&self) -> Result<u64, sqlx::Error> {
        NewsRepo::clear_featured(&self.pool).await
    }

    async fn featured_counts(&self) -> Result<FeaturedCounts, sqlx::Error> {
        NewsRepo::featured_counts(&self.pool).await
    }
}
