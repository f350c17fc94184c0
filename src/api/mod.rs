//! HTTP API Module
//!
//! Thin translation layer between REST requests and store operations.
//!
//! ## Routes
//! Both entity kinds are mounted with the same shape:
//! - `GET /<kind>s` lists, filtered by query parameters.
//! - `GET /<kind>s/:id` fetches one entity.
//! - `POST /<kind>s` creates from a body without an id.
//! - `PUT /<kind>s/:id` replaces; the path id wins over any id in the body.
//! - `DELETE /<kind>s/:id` removes and answers `204`.
//!
//! Any other verb on these paths answers `405`.
//!
//! ## Submodules
//! - **`handlers`**: generic handlers, one implementation for both kinds.
//! - **`router`**: route table and pipeline wiring.
//! - **`error`**: mapping of failures to status codes.

pub mod error;
pub mod handlers;
pub mod router;

pub use error::ApiError;
pub use router::{DOCTORS_PATH, PATIENTS_PATH, build_router, entity_routes};
