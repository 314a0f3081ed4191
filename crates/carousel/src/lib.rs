//! Client-side carousel for the featured-news set.
//!
//! [`Carousel`] is the pure state machine, [`CarouselWidget`] drives it on a
//! tokio task with a single auto-advance timer, and [`render_carousel`]
//! turns a snapshot into escaped HTML.

pub mod config;
pub mod render;
pub mod source;
pub mod state;
pub mod widget;

pub use config::CarouselConfig;
pub use render::render_carousel;
pub use source::{FeaturedSource, HttpFeaturedSource, Slide, SourceError};
pub use state::{Carousel, CarouselState, CarouselView, Transition};
pub use widget::{CarouselWidget, Command, WidgetClosed};
