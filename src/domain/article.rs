//! Article domain entity and related types.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::config::MSG_EMPTY_PATCH;

/// Article domain entity.
///
/// Both text fields are optional; the store accepts partial and duplicate
/// documents. `id` is assigned by the store on creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Article {
    /// Store-assigned identifier
    #[serde(rename = "_id")]
    #[schema(example = "65f1c2d3e4a5b6c7d8e9f0a1")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "REST")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "REST is short for REpresentational State Transfer.")]
    pub content: Option<String>,
}

impl Article {
    /// Build an article from a create payload
    pub fn new(id: impl Into<String>, input: ArticleInput) -> Self {
        Self {
            id: id.into(),
            title: input.title,
            content: input.content,
        }
    }

    /// Check whether this article is keyed by `title`
    pub fn has_title(&self, title: &str) -> bool {
        self.title.as_deref() == Some(title)
    }

    /// Overwrite every field with the payload; omitted fields are cleared.
    ///
    /// Returns `true` if anything changed.
    pub fn replace_with(&mut self, input: ArticleInput) -> bool {
        let changed = self.title != input.title || self.content != input.content;
        self.title = input.title;
        self.content = input.content;
        changed
    }

    /// Overwrite only the fields present in the patch.
    ///
    /// Returns `true` if anything changed.
    pub fn apply_patch(&mut self, patch: ArticlePatch) -> bool {
        let mut changed = false;

        if let Some(title) = patch.title {
            changed |= self.title.as_deref() != Some(title.as_str());
            self.title = Some(title);
        }
        if let Some(content) = patch.content {
            changed |= self.content.as_deref() != Some(content.as_str());
            self.content = Some(content);
        }

        changed
    }
}

/// Payload for create (POST) and full replace (PUT).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate, ToSchema)]
pub struct ArticleInput {
    /// Article title
    #[schema(example = "REST")]
    pub title: Option<String>,
    /// Article body
    #[schema(example = "REST is short for REpresentational State Transfer.")]
    pub content: Option<String>,
}

/// Payload for merge update (PATCH).
///
/// Only known fields are accepted and at least one must be set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
#[validate(schema(function = "validate_patch_not_empty"))]
pub struct ArticlePatch {
    /// New title
    #[schema(example = "REST")]
    pub title: Option<String>,
    /// New body
    #[schema(example = "Updated body text.")]
    pub content: Option<String>,
}

impl ArticlePatch {
    /// Check if the patch sets no field
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}

fn validate_patch_not_empty(patch: &ArticlePatch) -> Result<(), ValidationError> {
    if patch.is_empty() {
        let mut error = ValidationError::new("empty_patch");
        error.message = Some(Cow::Borrowed(MSG_EMPTY_PATCH));
        return Err(error);
    }
    Ok(())
}

/// Counts reported by replace and patch operations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct WriteOutcome {
    /// Documents matching the title filter (0 or 1)
    pub matched_count: u64,
    /// Documents actually changed
    pub modified_count: u64,
}

/// Count reported by delete operations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct DeleteOutcome {
    pub deleted_count: u64,
}
