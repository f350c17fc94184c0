use parking_lot::RwLock;
use std::path::PathBuf;

use super::error::{StorageError, StoreError};
use super::snapshot::Snapshot;
use crate::filter::Filter;
use crate::model::{Entity, EntityId};

/// All entities of one kind, guarded by a reader-writer lock.
///
/// Every call is atomic on its own. Readers share the lock; a writer holds it
/// exclusively from the first read of the sequence until the snapshot write
/// has returned, so no reader can observe a half-applied mutation and the file
/// never lags behind memory.
///
/// Holding the lock across the file write means slow disk I/O throttles both
/// writers and readers of this collection. Funnelling writes through a
/// single-writer task per collection would release readers sooner, but every
/// write would then pay a queue hop before it is acknowledged.
pub struct Collection<E: Entity> {
    entities: RwLock<Vec<E>>,
    snapshot: Option<Snapshot<E>>,
}

impl<E: Entity> Collection<E> {
    /// Opens a collection backed by `path`, hydrating it from the file if present.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let snapshot = Snapshot::new(path);
        let entities = snapshot.load()?;

        tracing::info!(
            "Loaded {} {} record(s) from {}",
            entities.len(),
            E::KIND,
            snapshot.path().display()
        );

        Ok(Self {
            entities: RwLock::new(entities),
            snapshot: Some(snapshot),
        })
    }

    /// Creates an empty collection with no persistence target.
    pub fn in_memory() -> Self {
        Self {
            entities: RwLock::new(Vec::new()),
            snapshot: None,
        }
    }

    /// Returns every entity accepted by `filter`, in insertion order.
    pub fn list<F>(&self, filter: &F) -> Vec<E>
    where
        F: Filter<E> + ?Sized,
    {
        self.entities
            .read()
            .iter()
            .filter(|entity| filter.matches(entity))
            .cloned()
            .collect()
    }

    pub fn get(&self, id: EntityId) -> Result<E, StoreError> {
        self.entities
            .read()
            .iter()
            .find(|entity| entity.id() == id)
            .cloned()
            .ok_or(StoreError::NotFound { kind: E::KIND, id })
    }

    /// Appends `draft` under a fresh identifier and persists the collection.
    ///
    /// The identifier is the last entity's identifier plus one, or 1 when the
    /// collection is empty. Deleting the last entity and creating another one
    /// therefore reissues the deleted identifier.
    pub fn create(&self, mut draft: E) -> Result<E, StoreError> {
        let mut entities = self.entities.write();

        let id = match entities.last() {
            Some(last) => last
                .id()
                .checked_add(1)
                .ok_or(StoreError::IdentifiersExhausted { kind: E::KIND })?,
            None => 1,
        };
        draft.set_id(id);
        entities.push(draft.clone());

        self.persist(&entities)?;
        tracing::debug!("Created {} {}", E::KIND, id);

        Ok(draft)
    }

    /// Replaces the whole record stored under `id`. The identifier carried by
    /// `replacement` is discarded.
    pub fn update(&self, id: EntityId, mut replacement: E) -> Result<E, StoreError> {
        replacement.set_id(id);

        let mut entities = self.entities.write();
        let slot = entities
            .iter_mut()
            .find(|entity| entity.id() == id)
            .ok_or(StoreError::NotFound { kind: E::KIND, id })?;
        *slot = replacement.clone();

        self.persist(&entities)?;
        tracing::debug!("Updated {} {}", E::KIND, id);

        Ok(replacement)
    }

    /// Removes the entity stored under `id`, keeping the order of the rest.
    pub fn delete(&self, id: EntityId) -> Result<(), StoreError> {
        let mut entities = self.entities.write();
        let position = entities
            .iter()
            .position(|entity| entity.id() == id)
            .ok_or(StoreError::NotFound { kind: E::KIND, id })?;
        entities.remove(position);

        self.persist(&entities)?;
        tracing::debug!("Deleted {} {}", E::KIND, id);

        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entities.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.read().is_empty()
    }

    // Caller holds the write lock. A failure leaves memory ahead of disk.
    fn persist(&self, entities: &[E]) -> Result<(), StorageError> {
        let Some(snapshot) = &self.snapshot else {
            return Ok(());
        };

        snapshot.save(entities).inspect_err(|e| {
            tracing::error!("Failed to persist {} collection: {}", E::KIND, e);
        })
    }
}
