use axum::Router;
use axum::extract::FromRef;
use axum::routing::get;
use axum_extra::extract::cookie::Key;

use crate::db::CafeStorage;
use crate::handlers::{cafes, pages};

/// Shared per-request state: the storage handle and the cookie key backing
/// the private CSRF jar.
#[derive(Clone)]
pub struct CafeState {
    pub storage: CafeStorage,
    key: Key,
}

impl CafeState {
    pub fn new(storage: CafeStorage, key: Key) -> Self {
        Self { storage, key }
    }
}

impl FromRef<CafeState> for Key {
    fn from_ref(state: &CafeState) -> Key {
        state.key.clone()
    }
}

pub fn cafe_router(state: CafeState) -> Router {
    Router::new()
        .route("/", get(pages::home))
        .route("/list_of_cafes", get(pages::list_cafes))
        .route("/add_cafe", get(cafes::show_add_form).post(cafes::submit_cafe))
        .route("/delete/{id}", get(cafes::delete_cafe))
        .with_state(state)
}
