//! Article document as stored in MongoDB.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::domain::{Article, ArticleInput};

/// BSON shape of an article. Absent fields are not written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticleDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl ArticleDocument {
    /// Document for an insert, with a client-generated id
    pub fn for_insert(input: ArticleInput) -> Self {
        Self {
            id: Some(ObjectId::new()),
            title: input.title,
            content: input.content,
        }
    }

    /// Replacement body for a full replace; the server keeps the existing `_id`
    pub fn replacement(input: ArticleInput) -> Self {
        Self {
            id: None,
            title: input.title,
            content: input.content,
        }
    }
}

impl From<ArticleDocument> for Article {
    fn from(doc: ArticleDocument) -> Self {
        Self {
            id: doc.id.map(|id| id.to_hex()).unwrap_or_default(),
            title: doc.title,
            content: doc.content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson;

    #[test]
    fn replacement_omits_id_and_absent_fields() {
        let doc = ArticleDocument::replacement(ArticleInput {
            title: None,
            content: Some("C".to_string()),
        });
        let bson = bson::to_document(&doc).unwrap();

        assert!(!bson.contains_key("_id"));
        assert!(!bson.contains_key("title"));
        assert_eq!(bson.get_str("content").unwrap(), "C");
    }

    #[test]
    fn converts_to_domain_with_hex_id() {
        let doc = ArticleDocument::for_insert(ArticleInput {
            title: Some("A".to_string()),
            content: None,
        });
        let hex = doc.id.unwrap().to_hex();
        let article = Article::from(doc);

        assert_eq!(article.id, hex);
        assert_eq!(article.title.as_deref(), Some("A"));
    }

    #[test]
    fn reads_documents_with_extra_keys() {
        let raw = bson::doc! {
            "_id": ObjectId::new(),
            "title": "A",
            "__v": 0,
        };
        let doc: ArticleDocument = bson::from_document(raw).unwrap();
        assert_eq!(doc.title.as_deref(), Some("A"));
        assert_eq!(doc.content, None);
    }
}
