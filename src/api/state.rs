//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::infra::ArticleRepository;
use crate::services::{ArticleManager, ArticleService};

/// Application state shared by all handlers.
///
/// Holds the article service built over whichever repository was
/// constructed at startup.
#[derive(Clone)]
pub struct AppState {
    /// Article service
    pub article_service: Arc<dyn ArticleService>,
}

impl AppState {
    /// Create application state over a repository.
    pub fn from_repository(repository: Arc<dyn ArticleRepository>) -> Self {
        Self::new(Arc::new(ArticleManager::new(repository)))
    }

    /// Create application state with a manually injected service.
    pub fn new(article_service: Arc<dyn ArticleService>) -> Self {
        Self { article_service }
    }
}
