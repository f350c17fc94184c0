//! Filter Engine
//!
//! Stateless predicates applied by `GET /doctors` and `GET /patients`.
//!
//! ## Matching Rules
//! - **Text fields** match when they contain the filter value, ignoring case.
//! - **Numeric fields** match on exact equality. A filter value that does not
//!   parse as a number matches nothing; it is not reported as an error.
//! - **Absent or empty** parameters place no constraint on their field.
//! - All supplied parameters must match (conjunction).
//! - A repeated parameter keeps its first value; later ones are ignored.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::str::FromStr;

use crate::model::{Doctor, EntityId, Patient};

/// A predicate over one entity kind.
pub trait Filter<E> {
    fn matches(&self, entity: &E) -> bool;
}

/// Query parameters accepted by `GET /doctors`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DoctorFilter {
    pub name: Option<String>,
    pub salary: Option<String>,
}

/// Query parameters accepted by `GET /patients`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatientFilter {
    pub name: Option<String>,
    pub age: Option<String>,
    pub doctor_id: Option<String>,
}

impl Filter<Doctor> for DoctorFilter {
    fn matches(&self, doctor: &Doctor) -> bool {
        contains_ignore_case(&doctor.name, self.name.as_deref())
            && equals_parsed(&doctor.salary, self.salary.as_deref())
    }
}

impl Filter<Patient> for PatientFilter {
    fn matches(&self, patient: &Patient) -> bool {
        contains_ignore_case(&patient.name, self.name.as_deref())
            && equals_parsed(&patient.age, self.age.as_deref())
            && equals_parsed::<EntityId>(&patient.doctor_id, self.doctor_id.as_deref())
    }
}

/// Builds a filter from decoded query pairs, first occurrence of a key wins.
///
/// Unknown keys are ignored.
pub fn from_query_pairs<F>(pairs: Vec<(String, String)>) -> Result<F, serde_json::Error>
where
    F: DeserializeOwned,
{
    let mut fields = Map::new();
    for (key, value) in pairs {
        fields.entry(key).or_insert(Value::String(value));
    }
    serde_json::from_value(Value::Object(fields))
}

fn contains_ignore_case(value: &str, needle: Option<&str>) -> bool {
    match needle {
        None | Some("") => true,
        Some(needle) => value.to_lowercase().contains(&needle.to_lowercase()),
    }
}

fn equals_parsed<T>(value: &T, raw: Option<&str>) -> bool
where
    T: FromStr + PartialEq,
{
    match raw {
        None | Some("") => true,
        Some(raw) => raw.parse::<T>().map(|parsed| &parsed == value).unwrap_or(false),
    }
}

#[cfg(test)]
mod tests;
