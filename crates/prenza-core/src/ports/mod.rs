//! Ports - trait definitions for external collaborators.
//! These are the "interfaces" that infrastructure must implement.

mod notify;
mod store;

pub use notify::Notifier;
pub use store::{FindOptions, Filter, RecordReply, RecordStore};
