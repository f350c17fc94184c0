use std::path::Path;
use std::sync::Arc;

use super::collection::Collection;
use super::error::StorageError;
use crate::model::{Doctor, Entity, Patient};

/// Owner of both collections.
///
/// Built once by the application root and passed to the HTTP layer as
/// `Arc<Collection<_>>` handles. The collections share nothing, so no
/// operation spans both and deleting a doctor leaves its patients untouched.
pub struct Store {
    doctors: Arc<Collection<Doctor>>,
    patients: Arc<Collection<Patient>>,
}

impl Store {
    /// Opens both collections from their snapshot files inside `data_dir`.
    pub fn open(data_dir: &Path) -> Result<Self, StorageError> {
        let doctors = Collection::open(data_dir.join(Doctor::SNAPSHOT_FILE))?;
        let patients = Collection::open(data_dir.join(Patient::SNAPSHOT_FILE))?;

        Ok(Self {
            doctors: Arc::new(doctors),
            patients: Arc::new(patients),
        })
    }

    pub fn in_memory() -> Self {
        Self {
            doctors: Arc::new(Collection::in_memory()),
            patients: Arc::new(Collection::in_memory()),
        }
    }

    pub fn doctors(&self) -> Arc<Collection<Doctor>> {
        self.doctors.clone()
    }

    pub fn patients(&self) -> Arc<Collection<Patient>> {
        self.patients.clone()
    }
}
