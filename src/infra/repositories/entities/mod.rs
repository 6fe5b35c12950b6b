//! Stored document definitions
//!
//! These are database-specific shapes separate from domain models.

pub mod article;

pub use article::ArticleDocument;
