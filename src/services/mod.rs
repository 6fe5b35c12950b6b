//! Application services layer - Use cases.
//!
//! Services orchestrate domain types and infrastructure to fulfill
//! application use cases. They depend on the repository trait, never on
//! a concrete store.

mod article_service;

pub use article_service::{ArticleManager, ArticleService};
