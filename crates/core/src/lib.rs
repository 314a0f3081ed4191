//! Domain layer for the gazette content site.
//!
//! Everything here is free of I/O so the persistence layer, the HTTP server
//! and the carousel client can share the same rules.

pub mod content;
pub mod error;
pub mod featured;
pub mod pagination;
pub mod types;
pub mod url_policy;
pub mod validation;
