//! HTTP-level integration tests for news and comment endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

fn article(title: &str) -> serde_json::Value {
    json!({
        "title": title,
        "summary": "Short summary",
        "content": "Long enough article body to satisfy the fifty character minimum.",
        "category": "Valorant",
        "imageUrl": "https://cdn.example.com/cover.jpg",
        "published": true,
    })
}

async fn create(pool: &PgPool, body: serde_json::Value) -> serde_json::Value {
    let response = post_json(build_test_app(pool.clone()), "/api/news", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"].clone()
}

// ---------------------------------------------------------------------------
// News CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_news_applies_defaults(pool: PgPool) {
    let news = create(&pool, article("Champions crowned")).await;

    assert!(news["id"].is_number());
    assert_eq!(news["author"], "Admin");
    assert_eq!(news["featured"], false);
    assert_eq!(news["sortOrder"], 0);
    assert_eq!(news["views"], 0);
    assert!(news["createdAt"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_news_validation_lists_fields(pool: PgPool) {
    let response = post_json(
        build_test_app(pool),
        "/api/news",
        json!({"title": "Hey", "content": "short", "imageUrl": "javascript:alert(1)"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    let fields: Vec<&str> = json["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["content", "image_url", "title"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_news_counts_views_and_threads_comments(pool: PgPool) {
    let news = create(&pool, article("Threaded discussion")).await;
    let id = news["id"].as_i64().unwrap();

    let first = post_json(
        build_test_app(pool.clone()),
        &format!("/api/news/{id}/comments"),
        json!({"content": "First comment here", "author": "Ana"}),
    )
    .await;
    assert_eq!(first.status(), StatusCode::CREATED);
    let parent_id = body_json(first).await["data"]["id"].as_i64().unwrap();

    let reply = post_json(
        build_test_app(pool.clone()),
        &format!("/api/news/{id}/comments"),
        json!({"content": "A reply to Ana", "author": "Bruno", "parentId": parent_id}),
    )
    .await;
    assert_eq!(reply.status(), StatusCode::CREATED);

    let response = get(build_test_app(pool.clone()), &format!("/api/news/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["views"], 1);
    assert_eq!(json["data"]["comments"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"]["comments"][0]["replies"][0]["author"], "Bruno");

    let again = body_json(get(build_test_app(pool), &format!("/api/news/{id}")).await).await;
    assert_eq!(again["data"]["views"], 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_unknown_news_returns_404(pool: PgPool) {
    let response = get(build_test_app(pool), "/api/news/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_record_view(pool: PgPool) {
    let id = create(&pool, article("Viewed article"))
        .await["id"]
        .as_i64()
        .unwrap();

    let response = post_json(build_test_app(pool.clone()), &format!("/api/news/{id}/view"), json!({})).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["views"], 1);

    let missing = post_json(build_test_app(pool), "/api/news/424242/view", json!({})).await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_and_delete_news(pool: PgPool) {
    let id = create(&pool, article("Original headline"))
        .await["id"]
        .as_i64()
        .unwrap();

    let response = put_json(
        build_test_app(pool.clone()),
        &format!("/api/news/{id}"),
        json!({"title": "Updated headline"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "Updated headline");
    assert_eq!(json["data"]["category"], "Valorant");

    let response = delete(build_test_app(pool.clone()), &format!("/api/news/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["success"], true);

    let response = delete(build_test_app(pool), &format!("/api/news/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Listing and search
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_news_paginates_published_only(pool: PgPool) {
    for i in 0..3 {
        create(&pool, article(&format!("Published story {i}"))).await;
    }
    let mut draft = article("Unpublished story");
    draft["published"] = json!(false);
    create(&pool, draft).await;

    let response = get(build_test_app(pool), "/api/news?limit=2&page=2").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
    assert_eq!(
        json["pagination"],
        json!({"page": 2, "limit": 2, "total": 3, "pages": 2})
    );
    assert_eq!(json["data"][0]["commentCount"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_news(pool: PgPool) {
    create(&pool, article("Major final recap")).await;
    create(&pool, article("Patch notes digest")).await;

    let response = get(build_test_app(pool.clone()), "/api/news/search?q=MAJOR").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["pagination"]["total"], 1);
    assert_eq!(json["data"][0]["title"], "Major final recap");

    let response = get(build_test_app(pool.clone()), "/api/news/search?q=a").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = get(build_test_app(pool), "/api/news/search").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Comments
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_comment_parent_must_belong_to_same_news(pool: PgPool) {
    let a = create(&pool, article("First article")).await["id"].as_i64().unwrap();
    let b = create(&pool, article("Second article")).await["id"].as_i64().unwrap();

    let on_a = post_json(
        build_test_app(pool.clone()),
        &format!("/api/news/{a}/comments"),
        json!({"content": "Comment on A", "author": "Carla"}),
    )
    .await;
    let comment_id = body_json(on_a).await["data"]["id"].as_i64().unwrap();

    let response = post_json(
        build_test_app(pool.clone()),
        &format!("/api/news/{b}/comments"),
        json!({"content": "Wrong parent", "author": "Davi", "parentId": comment_id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json(
        build_test_app(pool),
        "/api/news/999999/comments",
        json!({"content": "No such news", "author": "Eva"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_comment_checks_owner_news(pool: PgPool) {
    let a = create(&pool, article("Owner article")).await["id"].as_i64().unwrap();
    let b = create(&pool, article("Other article")).await["id"].as_i64().unwrap();

    let created = post_json(
        build_test_app(pool.clone()),
        &format!("/api/news/{a}/comments"),
        json!({"content": "Delete me later", "author": "Fabio"}),
    )
    .await;
    let comment_id = body_json(created).await["data"]["id"].as_i64().unwrap();

    let response = delete(
        build_test_app(pool.clone()),
        &format!("/api/news/{b}/comments/{comment_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete(
        build_test_app(pool),
        &format!("/api/news/{a}/comments/{comment_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Carousel against PostgreSQL
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_carousel_endpoints_against_database(pool: PgPool) {
    let mut ids = Vec::new();
    for i in 0..3 {
        let mut body = article(&format!("Carousel entry {i}"));
        body["featured"] = json!(true);
        ids.push(create(&pool, body).await["id"].as_i64().unwrap());
    }

    let response = post_json(
        build_test_app(pool.clone()),
        "/api/news/carousel/reorder",
        json!({"newsIds": [ids[2], ids[0], ids[1]]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(get(build_test_app(pool.clone()), "/api/news/carousel").await).await;
    assert_eq!(json["count"], 3);
    let listed: Vec<i64> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["id"].as_i64().unwrap())
        .collect();
    assert_eq!(listed, vec![ids[2], ids[0], ids[1]]);

    let stats = body_json(get(build_test_app(pool.clone()), "/api/news/carousel/stats").await).await;
    assert_eq!(stats["data"]["carouselCount"], 3);
    assert_eq!(stats["data"]["featuredPercentage"], 100);

    let cleared = body_json(delete(build_test_app(pool), "/api/news/carousel/clear").await).await;
    assert_eq!(cleared["data"]["removedCount"], 3);
}
