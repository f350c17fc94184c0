//! Entity Model
//!
//! Plain records for the two entity kinds managed by the registry.
//!
//! ## Core Concepts
//! - **Entity**: a record with a process-assigned integer identifier. The
//!   `Entity` trait is what keeps the store, the filters and the HTTP handlers
//!   generic over the kind.
//! - **References**: `Patient::doctor_id` points at a `Doctor` by identifier only.
//!   Nothing validates it; it may name a doctor that never existed or was deleted.

pub mod types;

pub use types::{Doctor, Entity, EntityId, Patient};
