//! HTTP adapter for the hosted nobox record store.

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};

use prenza_core::domain::{Post, PostPatch};
use prenza_core::error::StoreError;
use prenza_core::ports::{FindOptions, Filter, RecordReply, RecordStore};

use crate::config::NoboxConfig;
use crate::space::Space;

/// Client for one space of the hosted record store.
///
/// The service itself is opaque; this adapter only speaks its fixed
/// request/response contract: reads and writes under
/// `{endpoint}/{project}/{space}`, bearer auth, and the space structure
/// declared in a request header.
pub struct NoboxClient {
    http: reqwest::Client,
    config: NoboxConfig,
    space: Space,
}

impl NoboxClient {
    pub fn new(config: NoboxConfig, space: Space) -> Result<Self, StoreError> {
        let mut headers = HeaderMap::new();

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.token))
            .map_err(|e| StoreError::Transport(e.to_string()))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let structure =
            serde_json::to_string(&space).map_err(|e| StoreError::Decode(e.to_string()))?;
        headers.insert(
            "structure",
            HeaderValue::from_str(&structure).map_err(|e| StoreError::Transport(e.to_string()))?,
        );

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            config,
            space,
        })
    }

    fn space_url(&self) -> String {
        format!(
            "{}/{}/{}",
            self.config.endpoint.trim_end_matches('/'),
            self.config.project,
            self.space.space
        )
    }

    /// Decode a find response. Anything other than a JSON array is an
    /// unexpected shape; no partial decoding is attempted.
    fn decode_records(body: serde_json::Value) -> Result<Vec<Post>, StoreError> {
        match body {
            serde_json::Value::Array(items) => items
                .into_iter()
                .map(|item| {
                    serde_json::from_value(item).map_err(|e| StoreError::Decode(e.to_string()))
                })
                .collect(),
            _ => Err(StoreError::UnexpectedShape),
        }
    }
}

fn transport(err: reqwest::Error) -> StoreError {
    StoreError::Transport(err.to_string())
}

#[async_trait]
impl RecordStore for NoboxClient {
    async fn find(&self, filter: &Filter, options: &FindOptions) -> Result<Vec<Post>, StoreError> {
        let mut request = self.http.get(self.space_url());
        if !filter.is_empty() {
            let query =
                serde_json::to_string(filter).map_err(|e| StoreError::Decode(e.to_string()))?;
            request = request.query(&[("q", query)]);
        }
        if let Some(limit) = options.limit {
            request = request.query(&[("limit", limit)]);
        }
        if let Some(offset) = options.offset {
            request = request.query(&[("offset", offset)]);
        }

        tracing::debug!(space = self.space.space, "fetching records");
        let body = request
            .send()
            .await
            .map_err(transport)?
            .error_for_status()
            .map_err(transport)?
            .json::<serde_json::Value>()
            .await
            .map_err(transport)?;

        Self::decode_records(body)
    }

    async fn insert_one(&self, record: &Post) -> Result<RecordReply, StoreError> {
        tracing::debug!(space = self.space.space, "inserting record");
        let reply = self
            .http
            .post(self.space_url())
            .json(record)
            .send()
            .await
            .map_err(transport)?
            .error_for_status()
            .map_err(transport)?
            .json::<Option<RecordReply>>()
            .await
            .map_err(transport)?;

        // A null body is a valid (failing) reply, not a decode error.
        Ok(reply.unwrap_or_default())
    }

    async fn update_one_by_id(
        &self,
        id: &str,
        patch: &PostPatch,
    ) -> Result<RecordReply, StoreError> {
        tracing::debug!(space = self.space.space, record_id = id, "updating record");
        let reply = self
            .http
            .post(format!("{}/update", self.space_url()))
            .query(&[("id", id)])
            .json(patch)
            .send()
            .await
            .map_err(transport)?
            .error_for_status()
            .map_err(transport)?
            .json::<Option<RecordReply>>()
            .await
            .map_err(transport)?;

        Ok(reply.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::space::blog_space;

    fn client() -> NoboxClient {
        NoboxClient::new(
            NoboxConfig {
                endpoint: "https://api.nobox.cloud/".to_string(),
                project: "prenza".to_string(),
                token: "token".to_string(),
            },
            blog_space(),
        )
        .unwrap()
    }

    #[test]
    fn space_url_joins_endpoint_project_and_space() {
        assert_eq!(client().space_url(), "https://api.nobox.cloud/prenza/Blog");
    }

    #[test]
    fn decode_records_accepts_an_array() {
        let body = json!([{
            "id": "1",
            "title": "T",
            "content": "C",
            "author": "A",
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-01T00:00:00Z",
        }]);

        let posts = NoboxClient::decode_records(body).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, "1");
    }

    #[test]
    fn decode_records_rejects_null() {
        assert!(matches!(
            NoboxClient::decode_records(json!(null)),
            Err(StoreError::UnexpectedShape)
        ));
    }

    #[test]
    fn decode_records_rejects_an_object() {
        assert!(matches!(
            NoboxClient::decode_records(json!({"error": "nope"})),
            Err(StoreError::UnexpectedShape)
        ));
    }
}
