//! Integration tests for the featured-set manager against PostgreSQL.
//!
//! Mirrors the in-memory unit tests so both backends are held to the same
//! ordering and partial-failure rules.

use gazette_core::types::DbId;
use gazette_db::featured::FeaturedSet;
use gazette_db::models::news::{CreateNews, UpdateNews};
use gazette_db::repositories::NewsRepo;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_news(title: &str, published: bool, featured: bool) -> CreateNews {
    CreateNews {
        title: title.to_string(),
        content: "Long enough body text for a news article used in tests.".to_string(),
        summary: None,
        image_url: None,
        author: None,
        category: None,
        published: Some(published),
        featured: Some(featured),
    }
}

/// Create five published+featured items whose `created_at` is one day apart.
/// Index 0 is the oldest.
async fn seed_five(pool: &PgPool) -> Vec<DbId> {
    let mut ids = Vec::new();
    for i in 0..5 {
        let news = NewsRepo::create(pool, &new_news(&format!("Story number {i}"), true, true))
            .await
            .unwrap();
        sqlx::query("UPDATE news SET created_at = NOW() - make_interval(days => $2) WHERE id = $1")
            .bind(news.id)
            .bind(5 - i)
            .execute(pool)
            .await
            .unwrap();
        ids.push(news.id);
    }
    ids
}

fn ids_of(items: &[gazette_db::models::news::News]) -> Vec<DbId> {
    items.iter().map(|n| n.id).collect()
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_featured_filters_and_limits(pool: PgPool) {
    let set = FeaturedSet::postgres(pool.clone());
    seed_five(&pool).await;
    NewsRepo::create(&pool, &new_news("Unpublished featured", false, true))
        .await
        .unwrap();
    NewsRepo::create(&pool, &new_news("Published plain", true, false))
        .await
        .unwrap();

    let items = set.list_featured(None).await.unwrap();
    assert_eq!(items.len(), 5);
    assert!(items.iter().all(|n| n.featured && n.published));

    let items = set.list_featured(Some(2)).await.unwrap();
    assert_eq!(items.len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn default_order_is_recency_then_reorder_wins(pool: PgPool) {
    let set = FeaturedSet::postgres(pool.clone());
    let ids = seed_five(&pool).await;

    let top = set.list_featured(Some(3)).await.unwrap();
    assert_eq!(ids_of(&top), vec![ids[4], ids[3], ids[2]]);

    let order = vec![ids[0], ids[4], ids[3], ids[2], ids[1]];
    set.reorder(&order).await.unwrap();

    let top = set.list_featured(Some(3)).await.unwrap();
    assert_eq!(top[0].id, ids[0]);
    assert_eq!(ids_of(&top), order[..3].to_vec());
}

// ---------------------------------------------------------------------------
// Reorder
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn reorder_tolerates_unknown_ids(pool: PgPool) {
    let set = FeaturedSet::postgres(pool.clone());
    let ids = seed_five(&pool).await;

    let outcome = set.reorder(&[ids[1], 987_654, ids[0]]).await.unwrap();
    assert_eq!(outcome.updated, vec![ids[1], ids[0]]);
    assert_eq!(outcome.skipped, vec![987_654]);

    let a = NewsRepo::find_by_id(&pool, ids[1]).await.unwrap().unwrap();
    let b = NewsRepo::find_by_id(&pool, ids[0]).await.unwrap().unwrap();
    assert!(a.sort_order < b.sort_order);
}

// ---------------------------------------------------------------------------
// Membership
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn set_featured_appends_and_removes(pool: PgPool) {
    let set = FeaturedSet::postgres(pool.clone());
    let ids = seed_five(&pool).await;
    set.reorder(&ids).await.unwrap();

    let plain = NewsRepo::create(&pool, &new_news("Fresh plain story", true, false))
        .await
        .unwrap();
    let featured = set.set_featured(plain.id, true).await.unwrap().unwrap();
    assert!(featured.featured);
    assert_eq!(featured.sort_order, 5);

    let all = set.list_featured(Some(50)).await.unwrap();
    assert_eq!(all.last().unwrap().id, plain.id);

    let removed = set.set_featured(plain.id, false).await.unwrap().unwrap();
    assert!(!removed.featured);
    assert_eq!(removed.sort_order, 5, "sort_order is left stale");

    let all = set.list_featured(Some(50)).await.unwrap();
    assert!(!ids_of(&all).contains(&plain.id));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn set_featured_unknown_id_returns_none(pool: PgPool) {
    let set = FeaturedSet::postgres(pool);
    assert!(set.set_featured(123_456, true).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn featuring_through_update_also_appends(pool: PgPool) {
    let ids = seed_five(&pool).await;
    FeaturedSet::postgres(pool.clone()).reorder(&ids).await.unwrap();

    let plain = NewsRepo::create(&pool, &new_news("Another plain story", true, false))
        .await
        .unwrap();
    let update = UpdateNews {
        featured: Some(true),
        ..Default::default()
    };
    let updated = NewsRepo::update(&pool, plain.id, &update)
        .await
        .unwrap()
        .unwrap();
    assert!(updated.featured);
    assert_eq!(updated.sort_order, 5);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_an_item_removes_it_from_the_set(pool: PgPool) {
    let set = FeaturedSet::postgres(pool.clone());
    let ids = seed_five(&pool).await;

    assert!(NewsRepo::delete(&pool, ids[4]).await.unwrap());
    let all = set.list_featured(Some(50)).await.unwrap();
    assert_eq!(all.len(), 4);
    assert!(!ids_of(&all).contains(&ids[4]));
}

// ---------------------------------------------------------------------------
// Clear + stats
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn clear_featured_counts_rows(pool: PgPool) {
    let set = FeaturedSet::postgres(pool.clone());
    for i in 0..3 {
        NewsRepo::create(&pool, &new_news(&format!("Featured item {i}"), true, true))
            .await
            .unwrap();
    }

    assert_eq!(set.clear_featured().await.unwrap(), 3);
    assert!(set.list_featured(None).await.unwrap().is_empty());
    assert_eq!(set.clear_featured().await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn stats_handle_empty_table(pool: PgPool) {
    let stats = FeaturedSet::postgres(pool).stats().await.unwrap();
    assert_eq!(stats.total_news, 0);
    assert_eq!(stats.carousel_count, 0);
    assert_eq!(stats.total_views, 0);
    assert_eq!(stats.featured_percentage, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn stats_aggregate_published_news(pool: PgPool) {
    let featured = NewsRepo::create(&pool, &new_news("Featured headline", true, true))
        .await
        .unwrap();
    NewsRepo::create(&pool, &new_news("Regular headline", true, false))
        .await
        .unwrap();
    NewsRepo::create(&pool, &new_news("Unpublished headline", false, true))
        .await
        .unwrap();
    NewsRepo::increment_views(&pool, featured.id).await.unwrap();
    NewsRepo::increment_views(&pool, featured.id).await.unwrap();

    let stats = FeaturedSet::postgres(pool).stats().await.unwrap();
    assert_eq!(stats.carousel_count, 1);
    assert_eq!(stats.total_news, 2);
    assert_eq!(stats.total_views, 2);
    assert_eq!(stats.featured_percentage, 50);
}
