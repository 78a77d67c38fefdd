//! Common types and traits for all records

pub mod hierarchy;
pub mod record;
pub mod status;
pub mod store;

// Re-exports
pub use hierarchy::{Arena, TreeRow};
pub use record::{assign_trimmed, Hierarchical, Ordered, Record, RecordForm, RecordId, UniqueKey};
pub use status::ActiveStatus;
pub use store::{MoveDirection, RecordStore};
