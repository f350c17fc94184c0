//! Concurrent Storage Module
//!
//! Implements the in-memory entity collections and their file snapshots.
//!
//! ## Core Concepts
//! - **Collection**: the ordered set of entities of one kind, guarded by its own
//!   reader-writer lock. Doctors and patients never contend with each other.
//! - **Snapshot**: the whole collection serialized as a pretty-printed JSON array.
//!   Every successful mutation rewrites it before the lock is released, so a
//!   reload always observes exactly what the process last committed.
//! - **Store**: owns both collections and is handed to the HTTP layer
//!   explicitly; there is no process-global state.
//!
//! ## Known Weaknesses
//! - A failed snapshot write is reported to the caller, but the in-memory
//!   mutation is already applied. Memory and disk diverge until the next
//!   successful write to the same collection.
//! - Each write rewrites the whole file: O(collection size) per mutation.

pub mod collection;
pub mod error;
pub mod snapshot;
pub mod store;

pub use collection::Collection;
pub use error::{StorageError, StoreError};
pub use snapshot::Snapshot;
pub use store::Store;
