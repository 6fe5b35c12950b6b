//! Article handlers.
//!
//! `/articles` operates on the whole collection, `/articles/:title` on the
//! first article whose title matches exactly.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::ValidatedPayload;
use crate::api::AppState;
use crate::config::{
    MSG_ALL_ARTICLES_DELETED, MSG_ARTICLE_DELETED, MSG_ARTICLE_PATCHED, MSG_ARTICLE_REPLACED,
    MSG_ARTICLE_SAVED,
};
use crate::domain::{Article, ArticleInput, ArticlePatch, DeleteOutcome, WriteOutcome};
use crate::errors::AppResult;
use crate::types::ApiResponse;

/// Create article routes
pub fn article_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list_articles)
                .post(create_article)
                .delete(delete_all_articles),
        )
        .route(
            "/:title",
            get(get_article)
                .put(replace_article)
                .patch(patch_article)
                .delete(delete_article),
        )
}

/// List all articles
#[utoipa::path(
    get,
    path = "/articles",
    tag = "Articles",
    responses(
        (status = 200, description = "Every stored article, in store order", body = Vec<Article>),
        (status = 500, description = "Store failure")
    )
)]
pub async fn list_articles(State(state): State<AppState>) -> AppResult<Json<Vec<Article>>> {
    let articles = state.article_service.list_articles().await?;
    Ok(Json(articles))
}

/// Create an article
#[utoipa::path(
    post,
    path = "/articles",
    tag = "Articles",
    request_body(content = ArticleInput, content_type = "application/json"),
    responses(
        (status = 201, description = "Article saved; `{success, data, message}` with the stored article as data", body = Article),
        (status = 400, description = "Malformed body"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn create_article(
    State(state): State<AppState>,
    ValidatedPayload(payload): ValidatedPayload<ArticleInput>,
) -> AppResult<(StatusCode, Json<ApiResponse<Article>>)> {
    let article = state.article_service.create_article(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(article, MSG_ARTICLE_SAVED)),
    ))
}

/// Delete every article
#[utoipa::path(
    delete,
    path = "/articles",
    tag = "Articles",
    responses(
        (status = 200, description = "Collection emptied; `{success, data, message}` envelope", body = DeleteOutcome),
        (status = 500, description = "Store failure")
    )
)]
pub async fn delete_all_articles(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<DeleteOutcome>>> {
    let outcome = state.article_service.delete_all_articles().await?;
    Ok(Json(ApiResponse::with_message(
        outcome,
        MSG_ALL_ARTICLES_DELETED,
    )))
}

/// Get an article by title
#[utoipa::path(
    get,
    path = "/articles/{title}",
    tag = "Articles",
    params(
        ("title" = String, Path, description = "Exact, case-sensitive article title")
    ),
    responses(
        (status = 200, description = "First article with this title", body = Article),
        (status = 404, description = "No article matching that title was found."),
        (status = 500, description = "Store failure")
    )
)]
pub async fn get_article(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> AppResult<Json<Article>> {
    let article = state.article_service.get_article(&title).await?;
    Ok(Json(article))
}

/// Replace an article (omitted fields are cleared)
#[utoipa::path(
    put,
    path = "/articles/{title}",
    tag = "Articles",
    params(
        ("title" = String, Path, description = "Exact, case-sensitive article title")
    ),
    request_body(content = ArticleInput, content_type = "application/json"),
    responses(
        (status = 200, description = "Replace applied; `{success, data, message}` envelope, matched_count is 0 when no article had this title", body = WriteOutcome),
        (status = 400, description = "Malformed body"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn replace_article(
    State(state): State<AppState>,
    Path(title): Path<String>,
    ValidatedPayload(payload): ValidatedPayload<ArticleInput>,
) -> AppResult<Json<ApiResponse<WriteOutcome>>> {
    let outcome = state
        .article_service
        .replace_article(&title, payload)
        .await?;
    Ok(Json(ApiResponse::with_message(outcome, MSG_ARTICLE_REPLACED)))
}

/// Update selected fields of an article
#[utoipa::path(
    patch,
    path = "/articles/{title}",
    tag = "Articles",
    params(
        ("title" = String, Path, description = "Exact, case-sensitive article title")
    ),
    request_body(content = ArticlePatch, content_type = "application/json"),
    responses(
        (status = 200, description = "Patch applied; `{success, data, message}` envelope, matched_count is 0 when no article had this title", body = WriteOutcome),
        (status = 400, description = "Unknown field, empty patch or malformed body"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn patch_article(
    State(state): State<AppState>,
    Path(title): Path<String>,
    ValidatedPayload(payload): ValidatedPayload<ArticlePatch>,
) -> AppResult<Json<ApiResponse<WriteOutcome>>> {
    let outcome = state.article_service.patch_article(&title, payload).await?;
    Ok(Json(ApiResponse::with_message(outcome, MSG_ARTICLE_PATCHED)))
}

/// Delete an article by title
#[utoipa::path(
    delete,
    path = "/articles/{title}",
    tag = "Articles",
    params(
        ("title" = String, Path, description = "Exact, case-sensitive article title")
    ),
    responses(
        (status = 200, description = "Delete applied; `{success, data, message}` envelope, deleted_count is 0 when no article had this title", body = DeleteOutcome),
        (status = 500, description = "Store failure")
    )
)]
pub async fn delete_article(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> AppResult<Json<ApiResponse<DeleteOutcome>>> {
    let outcome = state.article_service.delete_article(&title).await?;
    Ok(Json(ApiResponse::with_message(outcome, MSG_ARTICLE_DELETED)))
}
