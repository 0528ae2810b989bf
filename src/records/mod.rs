//! Student records
//!
//! Record model and the role-gated directory over the `records` collection.

pub mod directory;
pub mod model;

pub use directory::RecordDirectory;
pub use model::{
    BulkDeleteOutcome, Confirmation, DeleteOutcome, NewRecord, Record, RecordUpdate,
    TIMESTAMP_FORMAT,
};
