use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use gazette_core::content::{DEFAULT_AUTHOR, DEFAULT_CATEGORY};
use gazette_core::featured::{appended_sort_order, FeaturedKey, FIRST_SORT_ORDER};
use gazette_core::types::{DbId, Timestamp};
use tokio::sync::RwLock;

use super::{FeaturedCounts, FeaturedStore};
use crate::models::news::{CreateNews, News};

#[derive(Default)]
struct Rows {
    next_id: DbId,
    news: BTreeMap<DbId, News>,
}

impl Rows {
    fn max_featured_sort_order(&self) -> Option<i32> {
        self.news
            .values()
            .filter(|n| n.featured)
            .map(|n| n.sort_order)
            .max()
    }
}

/// In-process [`FeaturedStore`] holding news rows in a map.
///
/// Follows the same rules as the PostgreSQL backend: rows are inserted with
/// `sort_order` 0, featuring a row appends it, and ordering uses
/// [`FeaturedKey`].
#[derive(Default)]
pub struct MemoryFeaturedStore {
    rows: RwLock<Rows>,
}

impl MemoryFeaturedStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a news row with an explicit creation time.
    pub async fn insert(&self, input: &CreateNews, created_at: Timestamp) -> News {
        let mut rows = self.rows.write().await;
        rows.next_id += 1;
        let news = News {
            id: rows.next_id,
            title: input.title.clone(),
            summary: input.summary.clone(),
            content: input.content.clone(),
            category: input
                .category
                .clone()
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            author: input
                .author
                .clone()
                .unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
            image_url: input.image_url.clone(),
            published: input.published.unwrap_or(false),
            featured: input.featured.unwrap_or(false),
            sort_order: FIRST_SORT_ORDER,
            views: 0,
            created_at,
            updated_at: created_at,
        };
        rows.news.insert(news.id, news.clone());
        news
    }

    /// Fetch a row by id.
    pub async fn get(&self, id: DbId) -> Option<News> {
        self.rows.read().await.news.get(&id).cloned()
    }

    /// Delete a row. Returns `true` if it existed.
    pub async fn remove(&self, id: DbId) -> bool {
        self.rows.write().await.news.remove(&id).is_some()
    }

    /// Add to a row's view counter.
    pub async fn add_views(&self, id: DbId, by: i32) -> bool {
        match self.rows.write().await.news.get_mut(&id) {
            Some(news) => {
                news.views = news.views.saturating_add(by);
                true
            }
            None => false,
        }
    }
}

#[async_trait]
impl FeaturedStore for MemoryFeaturedStore {
    async fn list_featured(&self, limit: i64) -> Result<Vec<News>, sqlx::Error> {
        let rows = self.rows.read().await;
        let mut items: Vec<&News> = rows
            .news
            .values()
            .filter(|n| n.featured && n.published)
            .collect();
        items.sort_by_key(|n| FeaturedKey {
            sort_order: n.sort_order,
            created_at: n.created_at,
            id: n.id,
        });
        let take = usize::try_from(limit.max(0)).unwrap_or(usize::MAX);
        Ok(items.into_iter().take(take).cloned().collect())
    }

    async fn set_featured(&self, id: DbId, featured: bool) -> Result<Option<News>, sqlx::Error> {
        let mut rows = self.rows.write().await;
        let append_at = appended_sort_order(rows.max_featured_sort_order());
        let Some(news) = rows.news.get_mut(&id) else {
            return Ok(None);
        };
        if featured && !news.featured {
            news.sort_order = append_at;
        }
        news.featured = featured;
        news.updated_at = Utc::now();
        Ok(Some(news.clone()))
    }

    async fn set_sort_order(&self, id: DbId, sort_order: i32) -> Result<bool, sqlx::Error> {
        let mut rows = self.rows.write().await;
        match rows.news.get_mut(&id) {
            Some(news) => {
                news.sort_order = sort_order;
                news.updated_at = Utc::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn clear_featured(&self) -> Result<u64, sqlx::Error> {
        let mut rows = self.rows.write().await;
        let now = Utc::now();
        let mut cleared = 0;
        for news in rows.news.values_mut().filter(|n| n.featured) {
            news.featured = false;
            news.updated_at = now;
            cleared += 1;
        }
        Ok(cleared)
    }

    async fn featured_counts(&self) -> Result<FeaturedCounts, sqlx::Error> {
        let rows = self.rows.read().await;
        let mut counts = FeaturedCounts::default();
        for news in rows.news.values().filter(|n| n.published) {
            counts.published += 1;
            counts.published_views += i64::from(news.views);
            if news.featured {
                counts.featured_published += 1;
            }
        }
        Ok(counts)
    }
}
