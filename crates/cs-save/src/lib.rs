//! JSON save files for Cloudsect profiles.
//!
//! One profile per file. [`SaveStore`] owns a directory of `*.json` saves
//! and handles saving, loading, listing, renaming and deleting them;
//! [`SaveFile`] is the on-disk schema.

/// Error types for persistence.
pub mod error;
/// The on-disk save schema and its conversion to and from profiles.
pub mod schema;
/// Directory-backed save storage.
pub mod store;

pub use error::{SaveError, SaveResult};
pub use schema::SaveFile;
pub use store::{SaveStore, SaveSummary, DEFAULT_SAVE_NAME};
