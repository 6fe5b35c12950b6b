//! Domain layer - Core entities
//!
//! The article model and the payload/outcome types that travel between
//! the HTTP layer and the stores. No infrastructure dependencies.

pub mod article;

pub use article::{Article, ArticleInput, ArticlePatch, DeleteOutcome, WriteOutcome};
