//! # Prenza Nobox
//!
//! Infrastructure implementations of the `RecordStore` port: the HTTP
//! client for the hosted nobox record store, the space descriptors it
//! declares, and an in-memory store used as fallback and in tests.

pub mod config;
pub mod http;
pub mod memory;
pub mod space;

pub use config::NoboxConfig;
pub use http::NoboxClient;
pub use memory::InMemoryStore;
pub use space::{FieldSpec, FieldType, Space, blog_space};
