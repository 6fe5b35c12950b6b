//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

mod article_repository;
pub mod entities;
mod memory_repository;

pub use article_repository::{ArticleRepository, ArticleStore};
pub use entities::ArticleDocument;
pub use memory_repository::InMemoryArticleStore;

#[cfg(test)]
pub use article_repository::MockArticleRepository;
