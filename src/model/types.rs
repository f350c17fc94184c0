use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::filter::{DoctorFilter, Filter, PatientFilter};

/// Identifier assigned by the store when an entity is created.
///
/// Signed to match the wire format: a negative path id is a well-formed id
/// that simply names no entity.
pub type EntityId = i64;

/// A record kind the registry can store, filter and expose over HTTP.
///
/// Field order of the implementing struct is the field order of the persisted
/// snapshot and of every JSON response.
pub trait Entity: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Singular, human-readable kind name used in messages ("doctor").
    const KIND: &'static str;
    /// File name of the snapshot holding the whole collection.
    const SNAPSHOT_FILE: &'static str;

    /// Query-string filter accepted by `GET /<collection>`.
    type Filter: Filter<Self> + DeserializeOwned + Default + Send + 'static;

    fn id(&self) -> EntityId;

    fn set_id(&mut self, id: EntityId);
}

/// Absent inbound fields take their zero value (`0`, `""`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Doctor {
    /// Ignored on input; the store always assigns or overwrites it.
    pub id: EntityId,
    pub name: String,
    pub salary: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Patient {
    pub id: EntityId,
    pub name: String,
    pub age: i64,
    /// Not a foreign key: never checked against the doctor collection.
    pub doctor_id: EntityId,
}

impl Entity for Doctor {
    const KIND: &'static str = "doctor";
    const SNAPSHOT_FILE: &'static str = "doctors.json";

    type Filter = DoctorFilter;

    fn id(&self) -> EntityId {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }
}

impl Entity for Patient {
    const KIND: &'static str = "patient";
    const SNAPSHOT_FILE: &'static str = "patients.json";

    type Filter = PatientFilter;

    fn id(&self) -> EntityId {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }
}
