//! The blog board - view state for the listing surface and the
//! create/update submission flows.
//!
//! State handling mirrors a single-page view: one pending flag, one error
//! slot, the fetched list, and a per-card override map that lets an
//! updated card display new values without refetching the whole list.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::{NewPost, Post, PostPatch};
use crate::error::{RequestError, SubmitError};
use crate::ports::{FindOptions, Filter, Notifier, RecordStore};

/// Number of placeholder cards rendered while the list fetch is pending.
pub const SKELETON_COUNT: usize = 10;

/// Generic copy for fetch failures. Shown with a retry affordance.
pub const FETCH_FAILURE: &str = "Unexpected error occured. Please try again later.";

/// Title of every failure notice.
pub const FAILURE_TITLE: &str = "Uh oh! Something went wrong.";
/// Description of request failures. The cause is logged, never shown.
pub const FAILURE_DESCRIPTION: &str = "There was a problem with your request.";
/// Shown when an update patch provides no field at all.
pub const EMPTY_PATCH_NOTICE: &str = "At least one field is required.";

pub const CREATE_SUCCESS: &str = "Blog data sent successfully";
pub const UPDATE_SUCCESS: &str = "Blog data updated successfully";

/// Locally overridden display fields for one card, stored after a
/// successful update instead of refetching the list.
#[derive(Debug, Clone, PartialEq)]
struct CardOverride {
    title: String,
    content: String,
    author: String,
}

/// One card of the listing surface, with any local override applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub cover_image: Option<String>,
}

/// What the listing surface should render right now.
#[derive(Debug, Clone, PartialEq)]
pub enum Rendering {
    /// Fetch failed; show the message and a manual retry control.
    Failed { message: String },
    /// Fetch pending; show placeholder cards.
    Skeletons { count: usize },
    /// Loaded; zero cards is a valid empty listing.
    Cards(Vec<Card>),
}

pub struct BlogBoard {
    store: Arc<dyn RecordStore>,
    notifier: Arc<dyn Notifier>,
    pending: bool,
    error: Option<String>,
    posts: Vec<Post>,
    overrides: HashMap<String, CardOverride>,
}

impl BlogBoard {
    /// A fresh board starts pending, before the first fetch.
    pub fn new(store: Arc<dyn RecordStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            store,
            notifier,
            pending: true,
            error: None,
            posts: Vec::new(),
            overrides: HashMap::new(),
        }
    }

    /// The list as last fetched, plus records appended by `create`.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Error state takes priority over pending; a loaded empty list renders
    /// zero cards.
    pub fn rendering(&self) -> Rendering {
        if let Some(message) = &self.error {
            Rendering::Failed {
                message: message.clone(),
            }
        } else if self.pending {
            Rendering::Skeletons {
                count: SKELETON_COUNT,
            }
        } else {
            Rendering::Cards(self.cards())
        }
    }

    fn cards(&self) -> Vec<Card> {
        self.posts
            .iter()
            .map(|post| match self.overrides.get(&post.id) {
                Some(over) => Card {
                    id: post.id.clone(),
                    title: over.title.clone(),
                    content: over.content.clone(),
                    author: over.author.clone(),
                    cover_image: post.cover_image.clone(),
                },
                None => Card {
                    id: post.id.clone(),
                    title: post.title.clone(),
                    content: post.content.clone(),
                    author: post.author.clone(),
                    cover_image: post.cover_image.clone(),
                },
            })
            .collect()
    }

    /// Fetch the full record list with an empty filter and options,
    /// replacing the in-memory list on success. Any failure, including a
    /// non-sequence response body, lands in the error state with a generic
    /// message. Serves both the initial load and the manual retry.
    pub async fn refresh(&mut self) {
        self.error = None;
        self.pending = true;

        match self
            .store
            .find(&Filter::default(), &FindOptions::default())
            .await
        {
            Ok(posts) => {
                // Fresh remote data supersedes local display overrides.
                self.overrides.clear();
                self.posts = posts;
            }
            Err(err) => {
                tracing::error!(error = %err, "unable to fetch blog records");
                self.error = Some(FETCH_FAILURE.to_string());
            }
        }

        self.pending = false;
    }

    /// Submit a create draft.
    ///
    /// Invalid drafts are rejected with field-level messages before any
    /// network call. On an accepted reply the record is appended to the
    /// in-memory list in order and the caller gets it back so the view can
    /// reset its form and scroll the new entry into sight.
    pub async fn create(&mut self, draft: NewPost) -> Result<Post, SubmitError> {
        draft.validate().map_err(SubmitError::Invalid)?;

        let record = Post::from_draft(draft);
        let accepted = match self.store.insert_one(&record).await {
            Ok(reply) => reply.accept(),
            Err(err) => Err(RequestError::Store(err)),
        };

        match accepted {
            Ok(post) => {
                self.posts.push(post.clone());
                self.notifier.success(CREATE_SUCCESS);
                Ok(post)
            }
            Err(err) => {
                tracing::error!(error = %err, "unable to create new blog record");
                self.notifier.failure(FAILURE_TITLE, FAILURE_DESCRIPTION);
                Err(SubmitError::Request(err))
            }
        }
    }

    /// Submit an update patch for the record with the given id.
    ///
    /// An all-absent patch is rejected locally. Only the present fields
    /// travel; on an accepted reply the returned primary fields are stored
    /// as a card override so the listing shows them without a refetch.
    pub async fn update(&mut self, id: &str, patch: PostPatch) -> Result<(), SubmitError> {
        if patch.is_empty() {
            self.notifier.failure(FAILURE_TITLE, EMPTY_PATCH_NOTICE);
            return Err(SubmitError::EmptyPatch);
        }
        patch.validate().map_err(SubmitError::Invalid)?;

        let accepted = match self.store.update_one_by_id(id, &patch).await {
            Ok(reply) => reply.accept(),
            Err(err) => Err(RequestError::Store(err)),
        };

        match accepted {
            Ok(post) => {
                self.overrides.insert(
                    id.to_string(),
                    CardOverride {
                        title: post.title,
                        content: post.content,
                        author: post.author,
                    },
                );
                self.notifier.success(UPDATE_SUCCESS);
                Ok(())
            }
            Err(err) => {
                tracing::error!(error = %err, record_id = id, "unable to update blog record");
                self.notifier.failure(FAILURE_TITLE, FAILURE_DESCRIPTION);
                Err(SubmitError::Request(err))
            }
        }
    }
}
