//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

/// Default directory served for static assets
pub const DEFAULT_STATIC_DIR: &str = "public";

// =============================================================================
// Database (MongoDB)
// =============================================================================

/// Default MongoDB connection string (for development)
pub const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017";

/// Default database name
pub const DEFAULT_DATABASE_NAME: &str = "wikiDB";

/// Default collection holding article documents
pub const DEFAULT_ARTICLES_COLLECTION: &str = "articles";

// =============================================================================
// Article responses
// =============================================================================

/// Returned after a successful create
pub const MSG_ARTICLE_SAVED: &str = "Successfully saved the article";

/// Returned after deleting the whole collection
pub const MSG_ALL_ARTICLES_DELETED: &str = "Successfully deleted all the articles";

/// Returned when a title lookup has no match
pub const MSG_ARTICLE_NOT_FOUND: &str = "No article matching that title was found.";

/// Returned after a full replace (PUT)
pub const MSG_ARTICLE_REPLACED: &str = "Successfully updated the selected article";

/// Returned after a merge update (PATCH)
pub const MSG_ARTICLE_PATCHED: &str = "Successfully updated the article";

/// Returned after deleting a single article
pub const MSG_ARTICLE_DELETED: &str = "Successfully deleted the article.";

// =============================================================================
// Validation
// =============================================================================

/// Message for a PATCH body that names no field
pub const MSG_EMPTY_PATCH: &str = "Patch must set at least one of: title, content";
