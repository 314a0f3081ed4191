pub mod carousel;
pub mod comments;
pub mod forum;
pub mod news;
