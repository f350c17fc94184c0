use axum::Router;
use axum::extract::Extension;
use axum::routing::get;
use std::sync::Arc;

use super::handlers::{handle_create, handle_delete, handle_get, handle_list, handle_update};
use crate::model::Entity;
use crate::pipeline::Pipeline;
use crate::storage::{Collection, Store};

pub const DOCTORS_PATH: &str = "/doctors";
pub const PATIENTS_PATH: &str = "/patients";

/// Mounts the five CRUD routes of one entity kind under `base`.
pub fn entity_routes<E: Entity>(base: &str, collection: Arc<Collection<E>>) -> Router {
    Router::new()
        .route(base, get(handle_list::<E>).post(handle_create::<E>))
        .route(
            &format!("{}/:id", base),
            get(handle_get::<E>)
                .put(handle_update::<E>)
                .delete(handle_delete::<E>),
        )
        .layer(Extension(collection))
}

/// Builds the full application: both entity kinds, wrapped in `pipeline`.
pub fn build_router(store: &Store, pipeline: &Pipeline) -> Router {
    let routes = Router::new()
        .merge(entity_routes(DOCTORS_PATH, store.doctors()))
        .merge(entity_routes(PATIENTS_PATH, store.patients()));

    pipeline.wrap(routes)
}
