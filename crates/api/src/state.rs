use std::sync::Arc;

use digidex_lookup::LookupClient;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: digidex_db::DbPool,
    /// Client for the external image lookup API.
    pub lookup: Arc<LookupClient>,
}
