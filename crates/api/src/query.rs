//! Shared query parameter types for API handlers.
//!
//! Page and limit values are clamped through
//! [`gazette_core::pagination::PageRequest`] before reaching a repository.

use serde::Deserialize;

/// Generic pagination parameters (`?page=&limit=`).
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// `GET /api/news` filters.
#[derive(Debug, Default, Deserialize)]
pub struct NewsListParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub category: Option<String>,
    pub featured: Option<bool>,
}

/// Free-text search (`?q=&page=&limit=`).
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// `GET /api/forum/topics` filters.
#[derive(Debug, Default, Deserialize)]
pub struct TopicListParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub category: Option<String>,
}

/// `GET /api/news/carousel?limit=`.
#[derive(Debug, Default, Deserialize)]
pub struct CarouselParams {
    pub limit: Option<i64>,
}
