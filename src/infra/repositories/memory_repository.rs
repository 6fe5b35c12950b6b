//! Process-local article repository.
//!
//! Mirrors the MongoDB store's semantics (insertion order, first-match
//! title lookups, matched/modified counts) without a server. Used by the
//! test suite and by `serve --store memory`.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use super::ArticleRepository;
use crate::domain::{Article, ArticleInput, ArticlePatch, DeleteOutcome, WriteOutcome};
use crate::errors::AppResult;

/// In-memory implementation of ArticleRepository
#[derive(Default)]
pub struct InMemoryArticleStore {
    articles: RwLock<Vec<Article>>,
}

impl InMemoryArticleStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with articles
    pub fn with_articles(articles: Vec<Article>) -> Self {
        Self {
            articles: RwLock::new(articles),
        }
    }
}

#[async_trait]
impl ArticleRepository for InMemoryArticleStore {
    async fn list(&self) -> AppResult<Vec<Article>> {
        Ok(self.articles.read().await.clone())
    }

    async fn create(&self, input: ArticleInput) -> AppResult<Article> {
        let article = Article::new(ObjectId::new().to_hex(), input);
        self.articles.write().await.push(article.clone());
        Ok(article)
    }

    async fn delete_all(&self) -> AppResult<DeleteOutcome> {
        let mut articles = self.articles.write().await;
        let deleted_count = articles.len() as u64;
        articles.clear();
        Ok(DeleteOutcome { deleted_count })
    }

    async fn find_by_title(&self, title: &str) -> AppResult<Option<Article>> {
        let articles = self.articles.read().await;
        Ok(articles.iter().find(|a| a.has_title(title)).cloned())
    }

    async fn replace_by_title(&self, title: &str, input: ArticleInput) -> AppResult<WriteOutcome> {
        let mut articles = self.articles.write().await;
        let outcome = match articles.iter_mut().find(|a| a.has_title(title)) {
            Some(article) => WriteOutcome {
                matched_count: 1,
                modified_count: article.replace_with(input) as u64,
            },
            None => WriteOutcome::default(),
        };
        Ok(outcome)
    }

    async fn patch_by_title(&self, title: &str, patch: ArticlePatch) -> AppResult<WriteOutcome> {
        let mut articles = self.articles.write().await;
        let outcome = match articles.iter_mut().find(|a| a.has_title(title)) {
            Some(article) => WriteOutcome {
                matched_count: 1,
                modified_count: article.apply_patch(patch) as u64,
            },
            None => WriteOutcome::default(),
        };
        Ok(outcome)
    }

    async fn delete_by_title(&self, title: &str) -> AppResult<DeleteOutcome> {
        let mut articles = self.articles.write().await;
        let deleted_count = match articles.iter().position(|a| a.has_title(title)) {
            Some(index) => {
                articles.remove(index);
                1
            }
            None => 0,
        };
        Ok(DeleteOutcome { deleted_count })
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(title: &str, content: &str) -> ArticleInput {
        ArticleInput {
            title: Some(title.to_string()),
            content: Some(content.to_string()),
        }
    }

    #[tokio::test]
    async fn create_assigns_unique_ids_and_keeps_order() {
        let store = InMemoryArticleStore::new();
        let first = store.create(input("A", "1")).await.unwrap();
        let second = store.create(input("A", "2")).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(first.id.len(), 24);

        let listed = store.list().await.unwrap();
        assert_eq!(listed, vec![first, second]);
    }

    #[tokio::test]
    async fn duplicate_titles_resolve_to_first_match() {
        let store = InMemoryArticleStore::new();
        store.create(input("A", "first")).await.unwrap();
        store.create(input("A", "second")).await.unwrap();

        let found = store.find_by_title("A").await.unwrap().unwrap();
        assert_eq!(found.content.as_deref(), Some("first"));

        let outcome = store.delete_by_title("A").await.unwrap();
        assert_eq!(outcome.deleted_count, 1);

        let remaining = store.find_by_title("A").await.unwrap().unwrap();
        assert_eq!(remaining.content.as_deref(), Some("second"));
    }

    #[tokio::test]
    async fn replace_reports_counts() {
        let store = InMemoryArticleStore::new();
        store.create(input("A", "B")).await.unwrap();

        let unchanged = store.replace_by_title("A", input("A", "B")).await.unwrap();
        assert_eq!(
            unchanged,
            WriteOutcome {
                matched_count: 1,
                modified_count: 0
            }
        );

        let missing = store.replace_by_title("Z", input("Z", "B")).await.unwrap();
        assert_eq!(missing, WriteOutcome::default());
    }

    #[tokio::test]
    async fn replace_keeps_id() {
        let store = InMemoryArticleStore::new();
        let created = store.create(input("A", "B")).await.unwrap();

        store
            .replace_by_title("A", ArticleInput::default())
            .await
            .unwrap();

        let listed = store.list().await.unwrap();
        assert_eq!(listed[0].id, created.id);
        assert_eq!(listed[0].title, None);
        assert_eq!(listed[0].content, None);
    }

    #[tokio::test]
    async fn patch_merges_into_first_match() {
        let store = InMemoryArticleStore::with_articles(vec![Article::new(
            "65f1c2d3e4a5b6c7d8e9f0a1",
            input("A", "B"),
        )]);

        let patch = ArticlePatch {
            title: None,
            content: Some("C".to_string()),
        };
        let outcome = store.patch_by_title("A", patch).await.unwrap();
        assert_eq!(
            outcome,
            WriteOutcome {
                matched_count: 1,
                modified_count: 1
            }
        );

        let found = store.find_by_title("A").await.unwrap().unwrap();
        assert_eq!(found.content.as_deref(), Some("C"));
    }

    #[tokio::test]
    async fn delete_all_reports_count() {
        let store = InMemoryArticleStore::new();
        store.create(input("A", "1")).await.unwrap();
        store.create(input("B", "2")).await.unwrap();

        assert_eq!(store.delete_all().await.unwrap().deleted_count, 2);
        assert!(store.list().await.unwrap().is_empty());
        assert_eq!(store.delete_all().await.unwrap().deleted_count, 0);
    }
}
