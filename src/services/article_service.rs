//! Article service - Handles article use cases.
//!
//! Thin orchestration over the repository: not-found mapping, payload
//! guards and logging. Each call issues exactly one store operation.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::{MSG_ARTICLE_NOT_FOUND, MSG_EMPTY_PATCH};
use crate::domain::{Article, ArticleInput, ArticlePatch, DeleteOutcome, WriteOutcome};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::ArticleRepository;

/// Article service trait for dependency injection.
#[async_trait]
pub trait ArticleService: Send + Sync {
    /// List all articles in store order
    async fn list_articles(&self) -> AppResult<Vec<Article>>;

    /// Create an article from the payload's title and content
    async fn create_article(&self, input: ArticleInput) -> AppResult<Article>;

    /// Delete every article
    async fn delete_all_articles(&self) -> AppResult<DeleteOutcome>;

    /// Get the first article with this title
    async fn get_article(&self, title: &str) -> AppResult<Article>;

    /// Full replace of the first article with this title
    async fn replace_article(&self, title: &str, input: ArticleInput) -> AppResult<WriteOutcome>;

    /// Merge update of the first article with this title
    async fn patch_article(&self, title: &str, patch: ArticlePatch) -> AppResult<WriteOutcome>;

    /// Delete the first article with this title
    async fn delete_article(&self, title: &str) -> AppResult<DeleteOutcome>;

    /// Check the backing store
    async fn health(&self) -> AppResult<()>;
}

/// Concrete implementation of ArticleService over a repository.
pub struct ArticleManager {
    repository: Arc<dyn ArticleRepository>,
}

impl ArticleManager {
    /// Create new article service instance
    pub fn new(repository: Arc<dyn ArticleRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl ArticleService for ArticleManager {
    async fn list_articles(&self) -> AppResult<Vec<Article>> {
        self.repository.list().await
    }

    async fn create_article(&self, input: ArticleInput) -> AppResult<Article> {
        tracing::debug!(title = ?input.title, content = ?input.content, "Creating article");
        let article = self.repository.create(input).await?;
        tracing::info!(id = %article.id, "Article created");
        Ok(article)
    }

    async fn delete_all_articles(&self) -> AppResult<DeleteOutcome> {
        let outcome = self.repository.delete_all().await?;
        tracing::info!(deleted = outcome.deleted_count, "All articles deleted");
        Ok(outcome)
    }

    async fn get_article(&self, title: &str) -> AppResult<Article> {
        self.repository
            .find_by_title(title)
            .await?
            .ok_or_not_found(MSG_ARTICLE_NOT_FOUND)
    }

    async fn replace_article(&self, title: &str, input: ArticleInput) -> AppResult<WriteOutcome> {
        let outcome = self.repository.replace_by_title(title, input).await?;
        if outcome.matched_count == 0 {
            tracing::debug!(title, "Replace matched no article");
        }
        Ok(outcome)
    }

    async fn patch_article(&self, title: &str, patch: ArticlePatch) -> AppResult<WriteOutcome> {
        if patch.is_empty() {
            return Err(AppError::validation(MSG_EMPTY_PATCH));
        }

        let outcome = self.repository.patch_by_title(title, patch).await?;
        if outcome.matched_count == 0 {
            tracing::debug!(title, "Patch matched no article");
        }
        Ok(outcome)
    }

    async fn delete_article(&self, title: &str) -> AppResult<DeleteOutcome> {
        let outcome = self.repository.delete_by_title(title).await?;
        if outcome.deleted_count == 0 {
            tracing::debug!(title, "Delete matched no article");
        }
        Ok(outcome)
    }

    async fn health(&self) -> AppResult<()> {
        self.repository.ping().await
    }
}
