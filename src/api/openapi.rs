//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::article_handler;
use crate::domain::{Article, ArticleInput, ArticlePatch, DeleteOutcome, WriteOutcome};

/// OpenAPI documentation for the wiki article API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Wiki API",
        version = "0.1.0",
        description = "CRUD over a collection of wiki articles stored in MongoDB",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        article_handler::list_articles,
        article_handler::create_article,
        article_handler::delete_all_articles,
        article_handler::get_article,
        article_handler::replace_article,
        article_handler::patch_article,
        article_handler::delete_article,
    ),
    components(
        schemas(
            Article,
            ArticleInput,
            ArticlePatch,
            WriteOutcome,
            DeleteOutcome,
        )
    ),
    tags(
        (name = "Articles", description = "Article collection and single-article operations")
    )
)]
pub struct ApiDoc;
