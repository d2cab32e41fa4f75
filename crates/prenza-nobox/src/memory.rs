//! In-memory record store - used as fallback when no nobox endpoint is
//! configured, and in tests.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use prenza_core::domain::{Post, PostPatch};
use prenza_core::error::StoreError;
use prenza_core::ports::{FindOptions, Filter, RecordReply, RecordStore};

/// Record store backed by a plain vector behind an async RwLock.
///
/// Mirrors the hosted contract: ids are assigned on insert, writes echo
/// the stored record, and an update against an unknown id yields an empty
/// reply rather than an error. Data is lost on process restart.
pub struct InMemoryStore {
    records: RwLock<Vec<Post>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    pub fn seeded(records: Vec<Post>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordStore for InMemoryStore {
    async fn find(&self, _filter: &Filter, options: &FindOptions) -> Result<Vec<Post>, StoreError> {
        let records = self.records.read().await;

        let offset = options.offset.unwrap_or(0) as usize;
        let limit = options.limit.map(|l| l as usize).unwrap_or(usize::MAX);
        Ok(records.iter().skip(offset).take(limit).cloned().collect())
    }

    async fn insert_one(&self, record: &Post) -> Result<RecordReply, StoreError> {
        let mut records = self.records.write().await;

        let mut stored = record.clone();
        stored.id = Uuid::new_v4().to_string();
        let reply = RecordReply::from(&stored);
        records.push(stored);

        Ok(reply)
    }

    async fn update_one_by_id(
        &self,
        id: &str,
        patch: &PostPatch,
    ) -> Result<RecordReply, StoreError> {
        let mut records = self.records.write().await;

        let Some(record) = records.iter_mut().find(|r| r.id == id) else {
            return Ok(RecordReply::default());
        };

        if let Some(title) = &patch.title {
            record.title = title.clone();
        }
        if let Some(content) = &patch.content {
            record.content = content.clone();
        }
        if let Some(author) = &patch.author {
            record.author = author.clone();
        }

        Ok(RecordReply::from(&*record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft_record(title: &str) -> Post {
        let now = chrono::Utc::now().to_rfc3339();
        Post {
            id: String::new(),
            title: title.to_string(),
            content: "some longer content".to_string(),
            author: "Ann".to_string(),
            created_at: now.clone(),
            updated_at: now,
            tags: None,
            cover_image: None,
        }
    }

    #[tokio::test]
    async fn insert_assigns_an_id_and_find_returns_it() {
        let store = InMemoryStore::new();

        let reply = store.insert_one(&draft_record("First")).await.unwrap();
        let id = reply.id.clone().unwrap();
        assert!(!id.is_empty());

        let posts = store
            .find(&Filter::default(), &FindOptions::default())
            .await
            .unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, id);
    }

    #[tokio::test]
    async fn update_applies_only_present_fields() {
        let store = InMemoryStore::new();
        let id = store
            .insert_one(&draft_record("Old"))
            .await
            .unwrap()
            .id
            .unwrap();

        let reply = store
            .update_one_by_id(
                &id,
                &PostPatch {
                    title: Some("New".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(reply.title.as_deref(), Some("New"));
        assert_eq!(reply.content.as_deref(), Some("some longer content"));
        assert_eq!(reply.author.as_deref(), Some("Ann"));
    }

    #[tokio::test]
    async fn update_against_an_unknown_id_yields_an_empty_reply() {
        let store = InMemoryStore::new();

        let reply = store
            .update_one_by_id(
                "missing",
                &PostPatch {
                    title: Some("New".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert!(reply.accept().is_err());
    }

    #[tokio::test]
    async fn find_honors_limit_and_offset() {
        let store = InMemoryStore::new();
        for title in ["a", "b", "c"] {
            store.insert_one(&draft_record(title)).await.unwrap();
        }

        let page = store
            .find(
                &Filter::default(),
                &FindOptions {
                    limit: Some(1),
                    offset: Some(1),
                },
            )
            .await
            .unwrap();

        assert_eq!(page.len(), 1);
        assert_eq!(page[0].title, "b");
    }
}
