//! Hospital Registry Library
//!
//! This library crate defines the modules of the doctor/patient registry
//! server. It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! - **`model`**: The `Doctor` and `Patient` records and the `Entity` trait
//!   shared by every generic layer.
//! - **`storage`**: Concurrent in-memory collections, one reader-writer lock per
//!   entity kind, each mirrored to a whole-file JSON snapshot on every mutation.
//! - **`filter`**: Stateless predicates behind the list endpoints.
//! - **`pipeline`**: Composable middleware stages (authorization, access logging)
//!   applied uniformly to every route.
//! - **`api`**: REST handlers and the route table.
//! - **`config`**: Command-line and environment configuration.

pub mod api;
pub mod config;
pub mod filter;
pub mod model;
pub mod pipeline;
pub mod storage;
