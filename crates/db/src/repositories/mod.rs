//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod comment_repo;
pub mod forum_post_repo;
pub mod forum_topic_repo;
pub mod news_repo;

pub use comment_repo::CommentRepo;
pub use forum_post_repo::ForumPostRepo;
pub use forum_topic_repo::ForumTopicRepo;
pub use news_repo::NewsRepo;
