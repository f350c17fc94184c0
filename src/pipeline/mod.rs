//! Request Pipeline Module
//!
//! Cross-cutting policies applied uniformly to every route.
//!
//! ## Stages
//! - **Authorization** (`auth`): compares the `Authorization` header with the
//!   shared secret and answers `401` on any mismatch, including absence.
//! - **Logging** (`access_log`): appends one line per request to the access
//!   log: method, URI, remote address and elapsed time. Lines are written by a
//!   background thread; dropping the last handle to the log flushes them.
//!
//! Stages are listed outermost first. The default order is
//! `[Authorization, Logging]`: a rejected request never reaches the logging
//! stage, so it leaves no access-log entry.

pub mod access_log;
pub mod auth;

use axum::{Router, middleware};
use std::sync::Arc;

pub use access_log::{AccessEntry, AccessLog, AccessLogError, log_request};
pub use auth::{AuthGate, authorize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Authorization,
    Logging,
}

/// An ordered chain of middleware stages wrapped around a router.
#[derive(Clone)]
pub struct Pipeline {
    stages: Vec<Stage>,
    gate: Arc<AuthGate>,
    access_log: Arc<AccessLog>,
}

impl Pipeline {
    /// Creates the standard pipeline: authorization, then logging.
    pub fn new(gate: Arc<AuthGate>, access_log: Arc<AccessLog>) -> Self {
        Self {
            stages: vec![Stage::Authorization, Stage::Logging],
            gate,
            access_log,
        }
    }

    /// Replaces the stage order. The first stage runs first.
    pub fn with_stages(mut self, stages: Vec<Stage>) -> Self {
        self.stages = stages;
        self
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    pub fn access_log(&self) -> &Arc<AccessLog> {
        &self.access_log
    }

    /// Wraps every route of `router` in the configured stages.
    pub fn wrap(&self, router: Router) -> Router {
        // The layer added last is the outermost one, so fold from the innermost stage.
        self.stages
            .iter()
            .rev()
            .fold(router, |router, stage| match stage {
                Stage::Authorization => {
                    router.layer(middleware::from_fn_with_state(self.gate.clone(), authorize))
                }
                Stage::Logging => router.layer(middleware::from_fn_with_state(
                    self.access_log.clone(),
                    log_request,
                )),
            })
    }
}
