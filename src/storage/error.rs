use std::path::PathBuf;
use thiserror::Error;

use crate::model::EntityId;

/// Failures of the snapshot file itself.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("snapshot i/o failed for {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("snapshot {} is not a valid entity array: {source}", .path.display())]
    Serialization {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Failures of a single store operation.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: EntityId },

    #[error("no identifier left to assign to a new {kind}")]
    IdentifiersExhausted { kind: &'static str },

    /// The in-memory change was applied but could not be written out.
    #[error("change not persisted: {0}")]
    Persistence(#[from] StorageError),
}
