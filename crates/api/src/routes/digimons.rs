//! Route definitions for the Digimon CRUD endpoints.
//!
//! ```text
//! GET    /        list_digimons
//! POST   /        create_digimon
//! GET    /{id}    get_digimon
//! PUT    /{id}    update_digimon
//! DELETE /{id}    delete_digimon
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::digimons;
use crate::state::AppState;

/// Digimon routes — mounted at `/digimons`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(digimons::list_digimons).post(digimons::create_digimon),
        )
        .route(
            "/{id}",
            get(digimons::get_digimon)
                .put(digimons::update_digimon)
                .delete(digimons::delete_digimon),
        )
}
