use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{Post, PostPatch};
use crate::error::{RequestError, StoreError};

/// Filter passed to `find`. The listing view always sends it empty.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Filter(pub serde_json::Map<String, serde_json::Value>);

impl Filter {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Options passed to `find`. The listing view always sends them empty.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FindOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
}

/// Reply to an insert or update call.
///
/// Deliberately loose: the hosted store may echo a partial or empty
/// object, and acceptance is a coarse check on the three primary fields
/// only, not a field-by-field validation of the echoed record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordReply {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub cover_image: Option<String>,
}

impl RecordReply {
    /// Coarse success check: the reply counts as a success only when
    /// title, content and author are all present and non-empty. Anything
    /// else is a request failure regardless of other reply content.
    pub fn accept(self) -> Result<Post, RequestError> {
        let RecordReply {
            id,
            title,
            content,
            author,
            created_at,
            updated_at,
            tags,
            cover_image,
        } = self;

        match (title, content, author) {
            (Some(title), Some(content), Some(author))
                if !title.is_empty() && !content.is_empty() && !author.is_empty() =>
            {
                Ok(Post {
                    id: id.unwrap_or_default(),
                    title,
                    content,
                    author,
                    created_at: created_at.unwrap_or_default(),
                    updated_at: updated_at.unwrap_or_default(),
                    tags,
                    cover_image,
                })
            }
            _ => Err(RequestError::IncompleteReply),
        }
    }
}

impl From<&Post> for RecordReply {
    fn from(post: &Post) -> Self {
        Self {
            id: Some(post.id.clone()),
            title: Some(post.title.clone()),
            content: Some(post.content.clone()),
            author: Some(post.author.clone()),
            created_at: Some(post.created_at.clone()),
            updated_at: Some(post.updated_at.clone()),
            tags: post.tags.clone(),
            cover_image: post.cover_image.clone(),
        }
    }
}

/// Remote record store over a named space of blog records.
///
/// The store itself is an opaque hosted service; adapters only translate
/// the fixed request/response contract.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Fetch records matching the filter. Adapters must map a
    /// non-sequence response body to `StoreError::UnexpectedShape` rather
    /// than attempt partial decoding.
    async fn find(&self, filter: &Filter, options: &FindOptions) -> Result<Vec<Post>, StoreError>;

    /// Insert one record and echo the stored result.
    async fn insert_one(&self, record: &Post) -> Result<RecordReply, StoreError>;

    /// Apply the present patch fields to the record with the given id.
    async fn update_one_by_id(&self, id: &str, patch: &PostPatch)
    -> Result<RecordReply, StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_reply() -> RecordReply {
        RecordReply {
            id: Some("1".into()),
            title: Some("T".into()),
            content: Some("C".into()),
            author: Some("A".into()),
            ..Default::default()
        }
    }

    #[test]
    fn accept_passes_when_primary_fields_are_present() {
        let post = full_reply().accept().unwrap();
        assert_eq!(post.id, "1");
        assert_eq!(post.title, "T");
        assert_eq!(post.content, "C");
        assert_eq!(post.author, "A");
    }

    #[test]
    fn accept_rejects_a_missing_author() {
        let reply = RecordReply {
            author: None,
            ..full_reply()
        };
        assert!(matches!(
            reply.accept(),
            Err(crate::error::RequestError::IncompleteReply)
        ));
    }

    #[test]
    fn accept_rejects_an_empty_title() {
        let reply = RecordReply {
            title: Some(String::new()),
            ..full_reply()
        };
        assert!(reply.accept().is_err());
    }

    #[test]
    fn accept_rejects_an_empty_reply() {
        assert!(RecordReply::default().accept().is_err());
    }
}
