//! Drafts - unsaved user input for creating or updating a post.

use serde::{Deserialize, Serialize};

use crate::error::FieldError;

pub const TITLE_MIN: usize = 3;
pub const CONTENT_MIN: usize = 10;
pub const AUTHOR_MIN: usize = 3;

fn check(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    label: &str,
    value: &str,
    min: usize,
) {
    if value.chars().count() < min {
        errors.push(FieldError::new(
            field,
            format!("{label} must have minimum {min} characters"),
        ));
    }
}

/// Draft for creating a post. All three fields are required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author: String,
}

impl NewPost {
    /// Enforce the minimum-length constraints, collecting one message per
    /// offending field.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        check(&mut errors, "title", "Title", &self.title, TITLE_MIN);
        check(&mut errors, "content", "Content", &self.content, CONTENT_MIN);
        check(&mut errors, "author", "Author", &self.author, AUTHOR_MIN);
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Sparse draft for updating a post. `None` means the field was not
/// provided; only present fields are validated and transmitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl PostPatch {
    /// True when no field is provided at all. Such a patch is rejected
    /// before any network call.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.author.is_none()
    }

    /// Same per-field constraints as the create draft, applied only to the
    /// fields that are present.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        if let Some(title) = &self.title {
            check(&mut errors, "title", "Title", title, TITLE_MIN);
        }
        if let Some(content) = &self.content {
            check(&mut errors, "content", "Content", content, CONTENT_MIN);
        }
        if let Some(author) = &self.author {
            check(&mut errors, "author", "Author", author, AUTHOR_MIN);
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_post_rejects_short_fields() {
        let draft = NewPost {
            title: "Hi".into(),
            content: "too short".into(),
            author: "Jo".into(),
        };

        let errors = draft.validate().unwrap_err();
        let messages: Vec<_> = errors.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Title must have minimum 3 characters",
                "Content must have minimum 10 characters",
                "Author must have minimum 3 characters",
            ]
        );
    }

    #[test]
    fn new_post_accepts_boundary_lengths() {
        let draft = NewPost {
            title: "abc".into(),
            content: "0123456789".into(),
            author: "Ann".into(),
        };
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn patch_validates_only_present_fields() {
        let patch = PostPatch {
            title: Some("New title".into()),
            ..Default::default()
        };
        assert!(patch.validate().is_ok());

        let patch = PostPatch {
            author: Some("x".into()),
            ..Default::default()
        };
        let errors = patch.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "author");
    }

    #[test]
    fn explicitly_cleared_field_fails_validation() {
        // Clearing a field to empty is a provided-but-invalid value, not an
        // absent one.
        let patch = PostPatch {
            title: Some(String::new()),
            ..Default::default()
        };
        assert!(!patch.is_empty());
        assert!(patch.validate().is_err());
    }

    #[test]
    fn patch_serializes_exactly_the_present_fields() {
        let patch = PostPatch {
            title: Some("New".into()),
            ..Default::default()
        };

        let value = serde_json::to_value(&patch).unwrap();
        assert_eq!(value, serde_json::json!({ "title": "New" }));
    }

    #[test]
    fn empty_patch_is_empty() {
        assert!(PostPatch::default().is_empty());
    }
}
