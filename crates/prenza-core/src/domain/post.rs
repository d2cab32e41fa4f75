use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::NewPost;

/// Post entity - a stored blog record.
///
/// The id is assigned by the remote store and immutable once set. Both
/// timestamps are string-encoded and stamped by this client at submission
/// time, not by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: String,
    pub updated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
}

impl Post {
    /// Build a full record from a create draft, attaching identical
    /// creation/update timestamps. The id stays empty until the store
    /// assigns one.
    pub fn from_draft(draft: NewPost) -> Self {
        let now = Utc::now().to_rfc3339();
        Self {
            id: String::new(),
            title: draft.title,
            content: draft.content,
            author: draft.author,
            created_at: now.clone(),
            updated_at: now,
            tags: None,
            cover_image: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_draft_stamps_identical_timestamps() {
        let post = Post::from_draft(NewPost {
            title: "Hello".into(),
            content: "A first blog entry".into(),
            author: "Priza".into(),
        });

        assert!(post.id.is_empty());
        assert_eq!(post.created_at, post.updated_at);
        assert!(!post.created_at.is_empty());
    }

    #[test]
    fn unsaved_post_serializes_without_id() {
        let post = Post::from_draft(NewPost {
            title: "Hello".into(),
            content: "A first blog entry".into(),
            author: "Priza".into(),
        });

        let value = serde_json::to_value(&post).unwrap();
        assert!(value.get("id").is_none());
        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_some());
    }
}
