//! Domain entities - the blog record and its drafts.

mod draft;

mod post;

pub use draft::{AUTHOR_MIN, CONTENT_MIN, NewPost, PostPatch, TITLE_MIN};
pub use post::Post;
