//! Persistence Adapter
//!
//! Whole-collection durability: one JSON file per entity kind, overwritten in
//! full on every save. The adapter takes no locks; the owning `Collection`
//! must hold its exclusive lock across `save`.

use std::fs;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use super::error::StorageError;
use crate::model::Entity;

pub struct Snapshot<E> {
    path: PathBuf,
    _kind: PhantomData<fn() -> E>,
}

impl<E: Entity> Snapshot<E> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _kind: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the snapshot. A missing file is an empty collection, not an error.
    ///
    /// A literal `null` document also loads as empty.
    pub fn load(&self) -> Result<Vec<E>, StorageError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No {} snapshot at {}", E::KIND, self.path.display());
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(StorageError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let entities: Option<Vec<E>> =
            serde_json::from_slice(&bytes).map_err(|source| StorageError::Serialization {
                path: self.path.clone(),
                source,
            })?;

        Ok(entities.unwrap_or_default())
    }

    /// Overwrites the snapshot with `entities`, pretty-printed with two-space
    /// indentation.
    pub fn save(&self, entities: &[E]) -> Result<(), StorageError> {
        let json =
            serde_json::to_vec_pretty(entities).map_err(|source| StorageError::Serialization {
                path: self.path.clone(),
                source,
            })?;

        fs::write(&self.path, json).map_err(|source| StorageError::Io {
            path: self.path.clone(),
            source,
        })
    }
}
