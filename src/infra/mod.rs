//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - MongoDB connection lifecycle
//! - Article repositories (MongoDB and in-memory)

pub mod db;
pub mod repositories;

pub use db::Database;
pub use repositories::{ArticleDocument, ArticleRepository, ArticleStore, InMemoryArticleStore};

#[cfg(test)]
pub use repositories::MockArticleRepository;
