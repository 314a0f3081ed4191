//! Where the carousel gets its slides from.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One featured news item as shown on a slide.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub summary: Option<String>,
    pub category: String,
    pub author: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub views: i32,
    pub created_at: DateTime<Utc>,
}

/// Errors from fetching the featured list.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The HTTP request itself failed (network, DNS, TLS, decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("Featured list request failed ({status}): {body}")]
    Api { status: u16, body: String },

    /// The envelope came back with `success: false`.
    #[error("Featured list rejected: {0}")]
    Rejected(String),
}

/// Anything that can produce the featured list for the widget.
#[async_trait]
pub trait FeaturedSource: Send + Sync {
    /// Up to `limit` featured items in display order.
    async fn fetch_featured(&self, limit: i64) -> Result<Vec<Slide>, SourceError>;
}

/// `{success, data}` envelope returned by `GET /api/news/carousel`.
#[derive(Debug, Deserialize)]
struct Envelope {
    success: bool,
    #[serde(default)]
    data: Vec<Slide>,
    #[serde(default)]
    message: Option<String>,
}

/// Fetches `GET {base_url}/api/news/carousel?limit=N`.
pub struct HttpFeaturedSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpFeaturedSource {
    /// * `base_url` - Site origin without a trailing path, e.g. `http://host:3010`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Reuse an existing [`reqwest::Client`] for connection pooling.
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/api/news/carousel", self.base_url)
    }
}

#[async_trait]
impl FeaturedSource for HttpFeaturedSource {
    async fn fetch_featured(&self, limit: i64) -> Result<Vec<Slide>, SourceError> {
        let response = self
            .client
            .get(self.endpoint())
            .query(&[("limit", limit)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(SourceError::Api {
                status: status.as_u16(),
                body,
            });
        }

        unwrap_envelope(response.json::<Envelope>().await?)
    }
}

fn unwrap_envelope(envelope: Envelope) -> Result<Vec<Slide>, SourceError> {
    if envelope.success {
        Ok(envelope.data)
    } else {
        Err(SourceError::Rejected(
            envelope.message.unwrap_or_else(|| "unknown error".to_string()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn endpoint_drops_trailing_slash() {
        let source = HttpFeaturedSource::new("http://localhost:3010/");
        assert_eq!(source.endpoint(), "http://localhost:3010/api/news/carousel");
    }

    #[test]
    fn envelope_data_becomes_slides() {
        let envelope: Envelope = serde_json::from_value(serde_json::json!({
            "success": true,
            "count": 1,
            "data": [{
                "id": 3,
                "title": "Final day",
                "summary": null,
                "content": "ignored",
                "category": "CS:GO",
                "author": "Admin",
                "imageUrl": "/img/final.jpg",
                "published": true,
                "featured": true,
                "sortOrder": 0,
                "views": 12,
                "createdAt": "2024-03-01T12:00:00Z",
                "updatedAt": "2024-03-01T12:00:00Z"
            }]
        }))
        .unwrap();

        let slides = unwrap_envelope(envelope).unwrap();
        assert_eq!(slides.len(), 1);
        assert_eq!(slides[0].image_url.as_deref(), Some("/img/final.jpg"));
        assert_eq!(slides[0].views, 12);
    }

    #[test]
    fn unsuccessful_envelope_is_rejected() {
        let envelope: Envelope = serde_json::from_value(serde_json::json!({
            "success": false,
            "message": "boom"
        }))
        .unwrap();

        assert_matches!(unwrap_envelope(envelope), Err(SourceError::Rejected(msg)) if msg == "boom");
    }
}
