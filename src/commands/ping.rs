//! Ping command - Checks MongoDB connectivity.

use mongodb::bson::doc;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::Database;

/// Execute the ping command
pub async fn execute(config: Config) -> AppResult<()> {
    tracing::info!("Checking database connection...");

    let db = Database::connect(&config)
        .await
        .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;

    let count = db.articles().count_documents(doc! {}).await?;

    println!(
        "{}/{}: reachable, {} article(s)",
        config.database_name,
        config.articles_collection,
        count
    );

    db.shutdown().await;
    Ok(())
}
