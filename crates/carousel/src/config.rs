use std::time::Duration;

use gazette_core::featured::DEFAULT_CAROUSEL_LIMIT;

/// Default time between automatic slide changes.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(6);

/// Carousel widget settings.
#[derive(Debug, Clone)]
pub struct CarouselConfig {
    /// Site origin the featured list is fetched from, e.g. `http://localhost:3010`.
    pub base_url: String,
    /// Number of featured items requested (default: 5).
    pub limit: i64,
    /// Auto-advance period (default: 6 s).
    pub interval: Duration,
}

impl CarouselConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            limit: DEFAULT_CAROUSEL_LIMIT,
            interval: DEFAULT_INTERVAL,
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self::new("http://localhost:3010")
    }
}
