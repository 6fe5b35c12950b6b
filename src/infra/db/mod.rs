//! Database connection and lifecycle.

use mongodb::{bson::doc, error::Error as MongoError, Client, Collection};

use crate::config::Config;
use crate::infra::repositories::ArticleDocument;

/// MongoDB client wrapper for connection management.
///
/// Created once at startup and shared through `Arc`; call
/// [`Database::shutdown`] after the server stops.
#[derive(Clone)]
pub struct Database {
    client: Client,
    database: mongodb::Database,
    articles_collection: String,
}

impl Database {
    /// Connect to MongoDB and verify the server answers.
    pub async fn connect(config: &Config) -> Result<Self, MongoError> {
        let client = Client::with_uri_str(config.mongodb_uri()).await?;
        let database = client.database(&config.database_name);

        let db = Self {
            client,
            database,
            articles_collection: config.articles_collection.clone(),
        };
        db.ping().await?;

        tracing::info!(
            database = %config.database_name,
            collection = %config.articles_collection,
            "MongoDB connected"
        );

        Ok(db)
    }

    /// Get the typed article collection.
    pub fn articles(&self) -> Collection<ArticleDocument> {
        self.database.collection(&self.articles_collection)
    }

    /// Check database connectivity with the `ping` command.
    pub async fn ping(&self) -> Result<(), MongoError> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    /// Close all pooled connections.
    pub async fn shutdown(self) {
        self.client.shutdown().await;
        tracing::info!("MongoDB connection closed");
    }
}
