//! Application settings loaded from environment variables.

use std::env;
use std::path::PathBuf;

use super::constants::{
    DEFAULT_ARTICLES_COLLECTION, DEFAULT_DATABASE_NAME, DEFAULT_MONGODB_URI, DEFAULT_SERVER_HOST,
    DEFAULT_SERVER_PORT, DEFAULT_STATIC_DIR,
};

/// Application configuration
#[derive(Clone)]
pub struct Config {
    mongodb_uri: String,
    pub database_name: String,
    pub articles_collection: String,
    pub server_host: String,
    pub server_port: u16,
    pub static_dir: PathBuf,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("mongodb_uri", &"[REDACTED]")
            .field("database_name", &self.database_name)
            .field("articles_collection", &self.articles_collection)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("static_dir", &self.static_dir)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mongodb_uri: DEFAULT_MONGODB_URI.to_string(),
            database_name: DEFAULT_DATABASE_NAME.to_string(),
            articles_collection: DEFAULT_ARTICLES_COLLECTION.to_string(),
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        Self {
            mongodb_uri: env::var("MONGODB_URI").unwrap_or(defaults.mongodb_uri),
            database_name: env::var("MONGODB_DATABASE").unwrap_or(defaults.database_name),
            articles_collection: env::var("ARTICLES_COLLECTION")
                .unwrap_or(defaults.articles_collection),
            server_host: env::var("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
            static_dir: env::var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
        }
    }

    /// Get the MongoDB connection string.
    pub fn mongodb_uri(&self) -> &str {
        &self.mongodb_uri
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
