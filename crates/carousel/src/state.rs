//! Carousel state machine.
//!
//! ```text
//! Loading --load(ok, non-empty)--> Displaying { index: 0 }
//! Loading --load(ok, empty)------> Empty
//! Loading --load(err)------------> Error
//! Displaying --next/prev/go_to---> Displaying { index' }
//! any --reload-------------------> Loading
//! ```
//!
//! Navigation is a no-op outside `Displaying`, and the index always stays
//! in `[0, slides.len())`.

use crate::source::Slide;

/// What the carousel is currently showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarouselState {
    Loading,
    Displaying { index: usize },
    Empty,
    Error(String),
}

/// Why the index last changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The auto-advance timer fired.
    Auto,
    /// A user action (arrow, click, dot).
    Manual,
}

/// Snapshot handed to renderers and watchers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselView {
    pub state: CarouselState,
    pub slides: Vec<Slide>,
    pub last_transition: Option<Transition>,
}

impl CarouselView {
    /// The slide on screen, if any.
    pub fn current(&self) -> Option<&Slide> {
        match self.state {
            CarouselState::Displaying { index } => self.slides.get(index),
            _ => None,
        }
    }
}

/// Pure carousel state: the loaded slides and the active index.
#[derive(Debug, Clone)]
pub struct Carousel {
    state: CarouselState,
    slides: Vec<Slide>,
    last_transition: Option<Transition>,
}

impl Default for Carousel {
    fn default() -> Self {
        Self::new()
    }
}

impl Carousel {
    pub fn new() -> Self {
        Self {
            state: CarouselState::Loading,
            slides: Vec::new(),
            last_transition: None,
        }
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Whether the carousel is showing slides (and so wants a timer).
    pub fn is_displaying(&self) -> bool {
        matches!(self.state, CarouselState::Displaying { .. })
    }

    /// Apply a fetch result. Only meaningful while `Loading`.
    pub fn load<E: std::fmt::Display>(&mut self, result: Result<Vec<Slide>, E>) {
        if self.state != CarouselState::Loading {
            return;
        }
        self.last_transition = None;
        match result {
            Ok(slides) if slides.is_empty() => {
                self.slides = slides;
                self.state = CarouselState::Empty;
            }
            Ok(slides) => {
                self.slides = slides;
                self.state = CarouselState::Displaying { index: 0 };
            }
            Err(err) => {
                self.slides.clear();
                self.state = CarouselState::Error(err.to_string());
            }
        }
    }

    /// Drop the current slides and wait for a fresh [`Self::load`].
    pub fn reload(&mut self) {
        self.state = CarouselState::Loading;
        self.last_transition = None;
    }

    /// Advance to `(index + 1) mod N`. Returns `false` when not displaying.
    pub fn next(&mut self, transition: Transition) -> bool {
        let len = self.slides.len();
        self.step(transition, |index| (index + 1) % len)
    }

    /// Go back to `(index - 1) mod N`. Returns `false` when not displaying.
    pub fn prev(&mut self, transition: Transition) -> bool {
        let len = self.slides.len();
        self.step(transition, |index| (index + len - 1) % len)
    }

    /// Jump to slide `target`. Out-of-range targets are ignored.
    pub fn go_to(&mut self, target: usize) -> bool {
        if target >= self.slides.len() {
            return false;
        }
        self.step(Transition::Manual, |_| target)
    }

    fn step(&mut self, transition: Transition, f: impl FnOnce(usize) -> usize) -> bool {
        let CarouselState::Displaying { index } = self.state else {
            return false;
        };
        self.state = CarouselState::Displaying { index: f(index) };
        self.last_transition = Some(transition);
        true
    }

    pub fn view(&self) -> CarouselView {
        CarouselView {
            state: self.state.clone(),
            slides: self.slides.clone(),
            last_transition: self.last_transition,
        }
    }
}
