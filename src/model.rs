//! The article record and its request payload.

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Store-assigned primary key. Always non-negative.
pub type ArticleId = i64;

/// One row of the `articles` table as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    /// Free-form, comma separated by convention. Empty when absent.
    pub authors: String,
}

/// Body accepted by create and update. Missing or null strings decode as "".
/// `id` must be an integer when present but its value is ignored;
/// the store (create) or the path (update) decides it.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ArticlePayload {
    #[serde(default)]
    pub id: Option<ArticleId>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub authors: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl ArticlePayload {
    pub fn into_article(self, id: ArticleId) -> Article {
        Article {
            id,
            title: self.title,
            authors: self.authors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_ignores_body_id() {
        let p: ArticlePayload =
            serde_json::from_str(r#"{"id": 99, "title": "t", "authors": "a, b"}"#).unwrap();
        let a = p.into_article(7);
        assert_eq!(a.id, 7);
        assert_eq!(a.title, "t");
        assert_eq!(a.authors, "a, b");
    }

    #[test]
    fn payload_authors_defaults_to_empty() {
        let p: ArticlePayload = serde_json::from_str(r#"{"title": "only title"}"#).unwrap();
        assert_eq!(p.authors, "");
    }

    #[test]
    fn payload_title_defaults_to_empty() {
        let p: ArticlePayload = serde_json::from_str(r#"{"authors": "x"}"#).unwrap();
        assert_eq!(p.title, "");
        assert_eq!(p.authors, "x");
    }

    #[test]
    fn payload_null_strings_decode_as_empty() {
        let p: ArticlePayload = serde_json::from_str(r#"{"title": "t", "authors": null}"#).unwrap();
        assert_eq!(p.authors, "");
        let p: ArticlePayload = serde_json::from_str(r#"{"title": null}"#).unwrap();
        assert_eq!(p.title, "");
    }

    #[test]
    fn payload_rejects_mistyped_id() {
        assert!(serde_json::from_str::<ArticlePayload>(r#"{"id": "abc", "title": "t"}"#).is_err());
        let p: ArticlePayload = serde_json::from_str(r#"{"id": null, "title": "t"}"#).unwrap();
        assert_eq!(p.into_article(3).id, 3);
    }

    #[test]
    fn article_wire_shape() {
        let a = Article {
            id: 1,
            title: "test article".into(),
            authors: "Muhammad Rahman,Md Abd Ar Rahman".into(),
        };
        let v = serde_json::to_value(&a).unwrap();
        assert_eq!(
            v,
            serde_json::json!({"id": 1, "title": "test article", "authors": "Muhammad Rahman,Md Abd Ar Rahman"})
        );
    }
}
