//! Featured-set manager.
//!
//! [`FeaturedSet`] owns the carousel rules (default limit, append-on-feature,
//! per-id reorder, statistics) and talks to storage through the
//! [`FeaturedStore`] trait. [`PgFeaturedStore`] is the production backend;
//! [`MemoryFeaturedStore`] keeps rows in process for tests and local tooling.

mod memory;
mod postgres;

use std::sync::Arc;

use async_trait::async_trait;
use gazette_core::featured::{clamp_carousel_limit, featured_percentage, plan_reorder};
use gazette_core::types::DbId;
use serde::Serialize;

pub use memory::MemoryFeaturedStore;
pub use postgres::PgFeaturedStore;

use crate::models::news::News;
pub use crate::repositories::news_repo::FeaturedCounts;

/// Storage operations the featured-set manager needs.
///
/// Every method is a single independent write or read; there is no
/// transaction spanning calls, so concurrent writers are last-write-wins.
#[async_trait]
pub trait FeaturedStore: Send + Sync {
    /// Featured and published rows in display order, at most `limit` of them.
    async fn list_featured(&self, limit: i64) -> Result<Vec<News>, sqlx::Error>;

    /// Set the `featured` flag; `None` when the row does not exist.
    async fn set_featured(&self, id: DbId, featured: bool) -> Result<Option<News>, sqlx::Error>;

    /// Write one row's `sort_order`; `false` when the row does not exist.
    async fn set_sort_order(&self, id: DbId, sort_order: i32) -> Result<bool, sqlx::Error>;

    /// Clear `featured` everywhere, returning the number of rows changed.
    async fn clear_featured(&self) -> Result<u64, sqlx::Error>;

    /// Counts backing [`CarouselStats`].
    async fn featured_counts(&self) -> Result<FeaturedCounts, sqlx::Error>;
}

/// Result of a reorder request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderOutcome {
    /// Ids whose `sort_order` was written, in their new order.
    pub updated: Vec<DbId>,
    /// Ids that did not exist and were skipped.
    pub skipped: Vec<DbId>,
}

/// Aggregate carousel statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselStats {
    pub carousel_count: i64,
    pub total_news: i64,
    pub total_views: i64,
    pub featured_percentage: i64,
}

impl From<FeaturedCounts> for CarouselStats {
    fn from(counts: FeaturedCounts) -> Self {
        Self {
            carousel_count: counts.featured_published,
            total_news: counts.published,
            total_views: counts.published_views,
            featured_percentage: featured_percentage(counts.featured_published, counts.published),
        }
    }
}

/// Cheaply cloneable handle to the featured-set manager.
#[derive(Clone)]
pub struct FeaturedSet {
    store: Arc<dyn FeaturedStore>,
}

impl FeaturedSet {
    /// Wrap any store implementation.
    pub fn new(store: Arc<dyn FeaturedStore>) -> Self {
        Self { store }
    }

    /// Manager backed by PostgreSQL.
    pub fn postgres(pool: crate::DbPool) -> Self {
        Self::new(Arc::new(PgFeaturedStore::new(pool)))
    }

    /// Up to `limit` (default 5) featured and published items in display order.
    pub async fn list_featured(&self, limit: Option<i64>) -> Result<Vec<News>, sqlx::Error> {
        self.store.list_featured(clamp_carousel_limit(limit)).await
    }

    /// Add an item to, or remove it from, the featured set.
    ///
    /// Returns `None` when the id does not exist.
    pub async fn set_featured(&self, id: DbId, featured: bool) -> Result<Option<News>, sqlx::Error> {
        let news = self.store.set_featured(id, featured).await?;
        if let Some(ref item) = news {
            tracing::debug!(
                news_id = id,
                featured,
                sort_order = item.sort_order,
                "Featured flag updated"
            );
        }
        Ok(news)
    }

    /// Assign `sort_order = position` to each id, one independent write per id.
    ///
    /// Ids that do not exist are skipped without affecting the rest. Any
    /// other storage error stops the loop and is returned; writes already
    /// made stay in place.
    pub async fn reorder(&self, ids_in_order: &[DbId]) -> Result<ReorderOutcome, sqlx::Error> {
        let mut outcome = ReorderOutcome::default();

        for assignment in plan_reorder(ids_in_order) {
            if self
                .store
                .set_sort_order(assignment.id, assignment.sort_order)
                .await?
            {
                outcome.updated.push(assignment.id);
            } else {
                outcome.skipped.push(assignment.id);
            }
        }

        if !outcome.skipped.is_empty() {
            tracing::warn!(skipped = ?outcome.skipped, "Reorder skipped unknown news ids");
        }
        Ok(outcome)
    }

    /// Remove every item from the featured set. Returns how many were removed.
    pub async fn clear_featured(&self) -> Result<u64, sqlx::Error> {
        self.store.clear_featured().await
    }

    /// Carousel statistics.
    pub async fn stats(&self) -> Result<CarouselStats, sqlx::Error> {
        Ok(self.store.featured_counts().await?.into())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::*;
    use crate::models::news::CreateNews;

    fn draft(title: &str, published: bool, featured: bool) -> CreateNews {
        CreateNews {
            title: title.to_string(),
            content: "c".repeat(60),
            summary: None,
            image_url: None,
            author: None,
            category: None,
            published: Some(published),
            featured: Some(featured),
        }
    }

    fn manager() -> (Arc<MemoryFeaturedStore>, FeaturedSet) {
        let store = Arc::new(MemoryFeaturedStore::new());
        let set = FeaturedSet::new(store.clone());
        (store, set)
    }

    fn ids(items: &[News]) -> Vec<DbId> {
        items.iter().map(|n| n.id).collect()
    }

    /// Five published+featured items, one day apart; index 0 is the oldest.
    async fn seed_five(store: &MemoryFeaturedStore) -> Vec<News> {
        let base = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
        let mut out = Vec::new();
        for day in 0..5 {
            let item = store
                .insert(&draft(&format!("Story {day}"), true, true), base + Duration::days(day))
                .await;
            out.push(item);
        }
        out
    }

    #[tokio::test]
    async fn list_featured_returns_only_published_featured_items() {
        let (store, set) = manager();
        let now = Utc::now();
        let visible = store.insert(&draft("Visible", true, true), now).await;
        store.insert(&draft("Draft", false, true), now).await;
        store.insert(&draft("Plain", true, false), now).await;

        let items = set.list_featured(None).await.unwrap();
        assert_eq!(ids(&items), vec![visible.id]);
        assert!(items.iter().all(|n| n.featured && n.published));
    }

    #[tokio::test]
    async fn list_featured_respects_limit_and_default() {
        let (store, set) = manager();
        let base = Utc::now();
        for i in 0..8 {
            store
                .insert(&draft(&format!("Item {i}"), true, true), base + Duration::minutes(i))
                .await;
        }
        assert_eq!(set.list_featured(None).await.unwrap().len(), 5);
        assert_eq!(set.list_featured(Some(2)).await.unwrap().len(), 2);
        assert_eq!(set.list_featured(Some(100)).await.unwrap().len(), 8);
    }

    #[tokio::test]
    async fn default_order_is_most_recent_first() {
        let (store, set) = manager();
        let seeded = seed_five(&store).await;

        let top = set.list_featured(Some(3)).await.unwrap();
        assert_eq!(ids(&top), vec![seeded[4].id, seeded[3].id, seeded[2].id]);
    }

    #[tokio::test]
    async fn reorder_moves_oldest_to_front() {
        let (store, set) = manager();
        let seeded = seed_five(&store).await;

        let order = vec![seeded[0].id, seeded[4].id, seeded[3].id, seeded[2].id, seeded[1].id];
        let outcome = set.reorder(&order).await.unwrap();
        assert_eq!(outcome.updated, order);
        assert!(outcome.skipped.is_empty());

        let top = set.list_featured(Some(3)).await.unwrap();
        assert_eq!(top[0].id, seeded[0].id);
        assert_eq!(ids(&top), order[..3].to_vec());
    }

    #[tokio::test]
    async fn reorder_assigns_increasing_sort_order() {
        let (store, set) = manager();
        let seeded = seed_five(&store).await;
        let (a, b, c) = (seeded[1].id, seeded[3].id, seeded[0].id);

        set.reorder(&[a, b, c]).await.unwrap();

        let sa = store.get(a).await.unwrap().sort_order;
        let sb = store.get(b).await.unwrap().sort_order;
        let sc = store.get(c).await.unwrap().sort_order;
        assert!(sa < sb && sb < sc);
    }

    #[tokio::test]
    async fn reorder_skips_unknown_ids_and_orders_the_rest() {
        let (store, set) = manager();
        let seeded = seed_five(&store).await;
        let (a, b) = (seeded[0].id, seeded[1].id);

        let outcome = set.reorder(&[a, 9_999, b]).await.unwrap();
        assert_eq!(outcome.updated, vec![a, b]);
        assert_eq!(outcome.skipped, vec![9_999]);

        let sa = store.get(a).await.unwrap().sort_order;
        let sb = store.get(b).await.unwrap().sort_order;
        assert!(sa < sb);
    }

    #[tokio::test]
    async fn set_featured_true_appends_to_the_end() {
        let (store, set) = manager();
        let seeded = seed_five(&store).await;
        let order: Vec<DbId> = seeded.iter().map(|n| n.id).collect();
        set.reorder(&order).await.unwrap();

        let newcomer = store
            .insert(&draft("Newest story", true, false), Utc::now())
            .await;
        let updated = set.set_featured(newcomer.id, true).await.unwrap().unwrap();
        assert!(updated.featured);
        assert_eq!(updated.sort_order, 5);

        let all = set.list_featured(Some(50)).await.unwrap();
        assert_eq!(all.last().map(|n| n.id), Some(newcomer.id));

        // Existing positions are untouched.
        assert_eq!(ids(&all[..5]), order);
    }

    #[tokio::test]
    async fn set_featured_false_removes_and_keeps_sort_order() {
        let (store, set) = manager();
        let seeded = seed_five(&store).await;
        let target = seeded[2].id;
        set.reorder(&[seeded[4].id, target]).await.unwrap();

        let updated = set.set_featured(target, false).await.unwrap().unwrap();
        assert!(!updated.featured);
        assert_eq!(updated.sort_order, 1);

        let listed = set.list_featured(Some(50)).await.unwrap();
        assert!(!ids(&listed).contains(&target));
    }

    #[tokio::test]
    async fn set_featured_on_unknown_id_is_none() {
        let (_store, set) = manager();
        assert!(set.set_featured(42, true).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn refeaturing_an_item_keeps_its_position() {
        let (store, set) = manager();
        let seeded = seed_five(&store).await;
        set.reorder(&[seeded[1].id]).await.unwrap();

        let again = set.set_featured(seeded[1].id, true).await.unwrap().unwrap();
        assert_eq!(again.sort_order, 0);
    }

    #[tokio::test]
    async fn clear_featured_reports_count_and_empties_the_set() {
        let (store, set) = manager();
        let now = Utc::now();
        for i in 0..3 {
            store.insert(&draft(&format!("Featured {i}"), true, true), now).await;
        }
        store.insert(&draft("Not featured", true, false), now).await;

        assert_eq!(set.clear_featured().await.unwrap(), 3);
        assert!(set.list_featured(None).await.unwrap().is_empty());
        assert_eq!(set.clear_featured().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn deleted_items_leave_the_featured_set() {
        let (store, set) = manager();
        let seeded = seed_five(&store).await;
        assert!(store.remove(seeded[4].id).await);

        let listed = set.list_featured(Some(50)).await.unwrap();
        assert_eq!(listed.len(), 4);
        assert!(!ids(&listed).contains(&seeded[4].id));
    }

    #[tokio::test]
    async fn stats_on_empty_store_are_zero() {
        let (_store, set) = manager();
        let stats = set.stats().await.unwrap();
        assert_eq!(
            stats,
            CarouselStats {
                carousel_count: 0,
                total_news: 0,
                total_views: 0,
                featured_percentage: 0,
            }
        );
    }

    #[tokio::test]
    async fn stats_count_published_items_only() {
        let (store, set) = manager();
        let now = Utc::now();
        let a = store.insert(&draft("Featured A", true, true), now).await;
        store.insert(&draft("Plain B", true, false), now).await;
        store.insert(&draft("Plain C", true, false), now).await;
        store.insert(&draft("Hidden draft", false, true), now).await;
        store.add_views(a.id, 12).await;

        let stats = set.stats().await.unwrap();
        assert_eq!(stats.carousel_count, 1);
        assert_eq!(stats.total_news, 3);
        assert_eq!(stats.total_views, 12);
        assert_eq!(stats.featured_percentage, 33);
    }

    #[test]
    fn stats_serialize_with_wire_names() {
        let stats = CarouselStats {
            carousel_count: 2,
            total_news: 4,
            total_views: 10,
            featured_percentage: 50,
        };
        let json = serde_json::to_value(stats).unwrap();
        assert_eq!(json["carouselCount"], 2);
        assert_eq!(json["featuredPercentage"], 50);
    }
}
