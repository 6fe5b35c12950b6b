//! Serve command - Starts the HTTP server.

use std::sync::Arc;

use crate::api::{create_router, with_static_assets, AppState};
use crate::cli::args::{ServeArgs, StoreBackend};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::{ArticleRepository, ArticleStore, Database, InMemoryArticleStore};

/// Execute the serve command
pub async fn execute(args: ServeArgs, config: Config) -> AppResult<()> {
    tracing::info!("Starting server...");

    // Initialize the article store
    let (repository, database): (Arc<dyn ArticleRepository>, Option<Database>) = match args.store
    {
        StoreBackend::Mongo => {
            let db = Database::connect(&config)
                .await
                .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;
            let store: Arc<dyn ArticleRepository> = Arc::new(ArticleStore::new(db.clone()));
            (store, Some(db))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory article store; data is lost on exit");
            let store: Arc<dyn ArticleRepository> = Arc::new(InMemoryArticleStore::new());
            (store, None)
        }
    };

    // Build router
    let app_state = AppState::from_repository(repository);
    let app = with_static_assets(create_router(app_state), &config.static_dir);

    // Start server
    let host = args.host.unwrap_or_else(|| config.server_host.clone());
    let port = args.port.unwrap_or(config.server_port);
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    tracing::info!("Server stopped");

    if let Some(db) = database {
        db.shutdown().await;
    }

    Ok(())
}

/// Resolve on Ctrl-C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
