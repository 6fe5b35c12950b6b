//! Article repository backed by a MongoDB collection.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, Document};

use super::entities::ArticleDocument;
use crate::domain::{Article, ArticleInput, ArticlePatch, DeleteOutcome, WriteOutcome};
use crate::errors::{AppError, AppResult};
use crate::infra::Database;

#[cfg(test)]
use mockall::automock;

/// Article repository trait for dependency injection.
///
/// Single-article operations are keyed by exact title and act on the
/// first match in store order.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// List every article in store order
    async fn list(&self) -> AppResult<Vec<Article>>;

    /// Insert a new article built from exactly the payload's fields
    async fn create(&self, input: ArticleInput) -> AppResult<Article>;

    /// Remove every article
    async fn delete_all(&self) -> AppResult<DeleteOutcome>;

    /// Find the first article with this title
    async fn find_by_title(&self, title: &str) -> AppResult<Option<Article>>;

    /// Overwrite the first article with this title; omitted fields are cleared
    async fn replace_by_title(&self, title: &str, input: ArticleInput) -> AppResult<WriteOutcome>;

    /// Set only the patch's fields on the first article with this title
    async fn patch_by_title(&self, title: &str, patch: ArticlePatch) -> AppResult<WriteOutcome>;

    /// Remove the first article with this title
    async fn delete_by_title(&self, title: &str) -> AppResult<DeleteOutcome>;

    /// Check that the backing store is reachable
    async fn ping(&self) -> AppResult<()>;
}

/// MongoDB implementation of ArticleRepository
pub struct ArticleStore {
    db: Database,
}

impl ArticleStore {
    /// Create new repository instance
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

fn title_filter(title: &str) -> Document {
    doc! { "title": title }
}

fn set_document(patch: ArticlePatch) -> Document {
    let mut fields = Document::new();
    if let Some(title) = patch.title {
        fields.insert("title", title);
    }
    if let Some(content) = patch.content {
        fields.insert("content", content);
    }
    doc! { "$set": fields }
}

#[async_trait]
impl ArticleRepository for ArticleStore {
    async fn list(&self) -> AppResult<Vec<Article>> {
        let documents: Vec<ArticleDocument> = self
            .db
            .articles()
            .find(doc! {})
            .await?
            .try_collect()
            .await?;

        Ok(documents.into_iter().map(Article::from).collect())
    }

    async fn create(&self, input: ArticleInput) -> AppResult<Article> {
        let document = ArticleDocument::for_insert(input);
        self.db.articles().insert_one(&document).await?;
        Ok(Article::from(document))
    }

    async fn delete_all(&self) -> AppResult<DeleteOutcome> {
        let result = self.db.articles().delete_many(doc! {}).await?;
        Ok(DeleteOutcome {
            deleted_count: result.deleted_count,
        })
    }

    async fn find_by_title(&self, title: &str) -> AppResult<Option<Article>> {
        let result = self.db.articles().find_one(title_filter(title)).await?;
        Ok(result.map(Article::from))
    }

    async fn replace_by_title(&self, title: &str, input: ArticleInput) -> AppResult<WriteOutcome> {
        let replacement = ArticleDocument::replacement(input);
        let result = self
            .db
            .articles()
            .replace_one(title_filter(title), &replacement)
            .await?;

        Ok(WriteOutcome {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
        })
    }

    async fn patch_by_title(&self, title: &str, patch: ArticlePatch) -> AppResult<WriteOutcome> {
        let result = self
            .db
            .articles()
            .update_one(title_filter(title), set_document(patch))
            .await?;

        Ok(WriteOutcome {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
        })
    }

    async fn delete_by_title(&self, title: &str) -> AppResult<DeleteOutcome> {
        let result = self.db.articles().delete_one(title_filter(title)).await?;
        Ok(DeleteOutcome {
            deleted_count: result.deleted_count,
        })
    }

    async fn ping(&self) -> AppResult<()> {
        self.db.ping().await.map_err(AppError::from)
    }
}
