//! Validated payload extractor - Combines deserialization with validation.
//!
//! Accepts JSON bodies and `application/x-www-form-urlencoded` bodies
//! (what HTML forms and most API clients send by default). A request with
//! neither a body nor a content type reads as an empty object, so every
//! optional field comes out absent.

use axum::{
    async_trait,
    body::Bytes,
    extract::{
        rejection::{FormRejection, JsonRejection},
        FromRequest, Request,
    },
    http::{header, HeaderMap},
    Form, Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::errors::AppError;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
const EMPTY_OBJECT: &[u8] = b"{}";

/// Validated body extractor that automatically validates requests.
///
/// # Example
///
/// ```rust,ignore
/// use serde::Deserialize;
/// use validator::Validate;
/// use wiki_api::api::extractors::ValidatedPayload;
///
/// #[derive(Deserialize, Validate)]
/// struct Rename {
///     #[validate(length(min = 1))]
///     title: String,
/// }
///
/// async fn rename(ValidatedPayload(payload): ValidatedPayload<Rename>) {
///     // payload is already validated
/// }
/// ```
pub struct ValidatedPayload<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedPayload<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    Form<T>: FromRequest<S, Rejection = FormRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let value = if is_form(req.headers()) {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|e| AppError::validation(e.body_text()))?;
            value
        } else if !req.headers().contains_key(header::CONTENT_TYPE) {
            let bytes = Bytes::from_request(req, state)
                .await
                .map_err(|e| AppError::validation(e.body_text()))?;
            let body: &[u8] = if bytes.is_empty() { EMPTY_OBJECT } else { &bytes };
            let Json(value) =
                Json::<T>::from_bytes(body).map_err(|e| AppError::validation(e.body_text()))?;
            value
        } else {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|e| AppError::validation(e.body_text()))?;
            value
        };

        value
            .validate()
            .map_err(|e| AppError::validation(format_validation_errors(&e)))?;

        Ok(ValidatedPayload(value))
    }
}

fn is_form(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.starts_with(FORM_CONTENT_TYPE))
        .unwrap_or(false)
}

/// Format validation errors into a user-friendly string
fn format_validation_errors(errors: &validator::ValidationErrors) -> String {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}
