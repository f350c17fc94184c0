use axum::Json;
use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Extension, Path, Query};
use axum::http::StatusCode;
use std::sync::Arc;

use super::error::ApiError;
use crate::filter::from_query_pairs;
use crate::model::{Entity, EntityId};
use crate::storage::{Collection, StoreError};

pub async fn handle_list<E: Entity>(
    Extension(collection): Extension<Arc<Collection<E>>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Vec<E>>, ApiError> {
    let Query(pairs) = query.map_err(|e| ApiError::InvalidQuery(e.body_text()))?;
    let filter: E::Filter =
        from_query_pairs(pairs).map_err(|e| ApiError::InvalidQuery(e.to_string()))?;

    let entities = run_blocking(move || Ok(collection.list(&filter))).await?;
    Ok(Json(entities))
}

pub async fn handle_get<E: Entity>(
    Extension(collection): Extension<Arc<Collection<E>>>,
    Path(raw_id): Path<String>,
) -> Result<Json<E>, ApiError> {
    let id = parse_id::<E>(&raw_id)?;

    let entity = run_blocking(move || collection.get(id)).await?;
    Ok(Json(entity))
}

pub async fn handle_create<E: Entity>(
    Extension(collection): Extension<Arc<Collection<E>>>,
    body: Bytes,
) -> Result<Json<E>, ApiError> {
    let draft = parse_body::<E>(&body)?;

    let created = run_blocking(move || collection.create(draft)).await?;
    tracing::info!("Created {} {}", E::KIND, created.id());
    Ok(Json(created))
}

pub async fn handle_update<E: Entity>(
    Extension(collection): Extension<Arc<Collection<E>>>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> Result<Json<E>, ApiError> {
    let id = parse_id::<E>(&raw_id)?;
    let replacement = parse_body::<E>(&body)?;

    let updated = run_blocking(move || collection.update(id, replacement)).await?;
    tracing::info!("Updated {} {}", E::KIND, id);
    Ok(Json(updated))
}

pub async fn handle_delete<E: Entity>(
    Extension(collection): Extension<Arc<Collection<E>>>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id::<E>(&raw_id)?;

    run_blocking(move || collection.delete(id)).await?;
    tracing::info!("Deleted {} {}", E::KIND, id);
    Ok(StatusCode::NO_CONTENT)
}

fn parse_id<E: Entity>(raw: &str) -> Result<EntityId, ApiError> {
    raw.parse().map_err(|_| {
        tracing::debug!("Rejected {} id {:?}", E::KIND, raw);
        ApiError::InvalidId {
            kind: E::KIND,
            raw: raw.to_string(),
        }
    })
}

fn parse_body<E: Entity>(body: &[u8]) -> Result<E, ApiError> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!("Rejected {} body: {}", E::KIND, e);
        ApiError::InvalidBody {
            kind: E::KIND,
            reason: e.to_string(),
        }
    })
}

/// Runs a store operation on the blocking pool.
///
/// Store calls take the collection lock and may write the snapshot while
/// holding it, so they must not run on the async workers.
async fn run_blocking<T, F>(op: F) -> Result<T, ApiError>
where
    F: FnOnce() -> Result<T, StoreError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(op)
        .await
        .map_err(|e| ApiError::Worker(e.to_string()))?
        .map_err(ApiError::from)
}
