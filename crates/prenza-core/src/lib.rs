//! # Prenza Core
//!
//! The domain layer of the Prenza blog client.
//! This crate contains the record types, draft validation and the listing
//! view-state logic, with zero infrastructure dependencies.

pub mod board;
pub mod domain;
pub mod error;
pub mod ports;

pub use error::SubmitError;
