use axum::extract::{Request, State};
use axum::http::{HeaderMap, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::api::error::ApiError;

/// Shared-secret check on the `Authorization` header.
///
/// The secret is fixed for the life of the process, so the gate is read-only
/// and needs no locking.
pub struct AuthGate {
    secret: String,
}

impl AuthGate {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Exact byte comparison; no scheme prefix is stripped.
    pub fn permits(&self, headers: &HeaderMap) -> bool {
        headers
            .get(header::AUTHORIZATION)
            .map(|value| value.as_bytes() == self.secret.as_bytes())
            .unwrap_or(false)
    }
}

pub async fn authorize(
    State(gate): State<Arc<AuthGate>>,
    request: Request,
    next: Next,
) -> Response {
    if !gate.permits(request.headers()) {
        tracing::warn!(
            "Rejected unauthorized request: {} {}",
            request.method(),
            request.uri()
        );
        return ApiError::Unauthorized.into_response();
    }

    next.run(request).await
}
