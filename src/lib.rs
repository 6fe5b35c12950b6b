//! Wiki API - REST CRUD over a collection of articles
//!
//! Every route maps to a single operation on an article repository,
//! backed by MongoDB in production and by an in-memory store in tests.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Article entity, payloads and operation outcomes
//! - **services**: Article use cases
//! - **infra**: MongoDB connection and repositories
//! - **api**: HTTP handlers, extractors, and routes
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server against MongoDB
//! cargo run -- serve
//!
//! # Start the server without a database
//! cargo run -- serve --store memory
//!
//! # Check the database connection
//! cargo run -- ping
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Article, ArticleInput, ArticlePatch};
pub use errors::{AppError, AppResult};
pub use infra::{ArticleRepository, InMemoryArticleStore};
