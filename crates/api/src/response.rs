//! Shared response envelope types for API handlers.
//!
//! Every successful API response carries `"success": true` next to its
//! payload. Use these types instead of ad-hoc `serde_json::json!` bodies to
//! get compile-time type safety and consistent serialization.

use gazette_core::pagination::Pagination;
use serde::Serialize;

/// Standard `{ "success": true, "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse::new(items)))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// `{ "success": true, "data": [...], "count": n }` for bounded lists.
#[derive(Debug, Serialize)]
pub struct CountedResponse<T: Serialize> {
    pub success: bool,
    pub data: Vec<T>,
    pub count: usize,
}

impl<T: Serialize> CountedResponse<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            success: true,
            count: data.len(),
            data,
        }
    }
}

/// `{ "success": true, "data": [...], "pagination": {...} }` for paged lists.
#[derive(Debug, Serialize)]
pub struct PageResponse<T: Serialize> {
    pub success: bool,
    pub data: Vec<T>,
    pub pagination: Pagination,
}

impl<T: Serialize> PageResponse<T> {
    pub fn new(data: Vec<T>, pagination: Pagination) -> Self {
        Self {
            success: true,
            data,
            pagination,
        }
    }
}

/// `{ "success": true, "message": "..." }`, optionally with a `data` payload.
#[derive(Debug, Serialize)]
pub struct MessageResponse<T: Serialize = ()> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
        }
    }
}

impl<T: Serialize> MessageResponse<T> {
    pub fn with_data(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }
}
