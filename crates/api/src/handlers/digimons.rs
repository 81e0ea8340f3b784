//! Handlers for the Digimon CRUD endpoints.
//!
//! Create and update run a fixed three-step pipeline: validate the input,
//! await the image lookup, write the row. The lookup cannot fail the
//! request; storage errors surface as 500s.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use uuid::Uuid;

use digidex_core::digimon;
use digidex_core::error::CoreError;
use digidex_db::models::digimon::{CreateDigimon, Digimon, UpdateDigimon};
use digidex_db::repositories::DigimonRepo;
use digidex_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Verify that a record exists, returning the full row.
async fn ensure_digimon_exists(pool: &DbPool, id: &str) -> AppResult<Digimon> {
    DigimonRepo::find_by_id(pool, id).await?.ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "Digimon",
            id: id.to_string(),
        })
    })
}

// ---------------------------------------------------------------------------
// GET /digimons
// ---------------------------------------------------------------------------

/// List all records in storage order.
pub async fn list_digimons(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = DigimonRepo::list(&state.pool).await?;
    tracing::debug!(count = items.len(), "Listed digimons");
    Ok(Json(items))
}

// ---------------------------------------------------------------------------
// GET /digimons/{id}
// ---------------------------------------------------------------------------

/// Get a single record by id.
pub async fn get_digimon(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let record = ensure_digimon_exists(&state.pool, &id).await?;
    Ok(Json(record))
}

// ---------------------------------------------------------------------------
// POST /digimons
// ---------------------------------------------------------------------------

/// Create a new record.
///
/// `nombre`, `tipo` and `nivel` are all required; `nivel` may arrive as a
/// number or a numeric string. The service assigns the id and starts the
/// version counter at 1. The image is resolved before the insert and may
/// be absent.
pub async fn create_digimon(
    State(state): State<AppState>,
    Json(input): Json<CreateDigimon>,
) -> AppResult<impl IntoResponse> {
    let nombre = digimon::require_text(input.nombre.as_deref())?;
    let tipo = digimon::require_text(input.tipo.as_deref())?;
    let nivel = digimon::require_level(input.nivel.as_ref())?;

    let imagen = state.lookup.image_for(&nombre).await;

    let record = Digimon {
        id: Uuid::new_v4().to_string(),
        nombre,
        tipo,
        nivel,
        version: 1,
        imagen,
    };

    let created = DigimonRepo::insert(&state.pool, &record).await?;
    tracing::info!(id = %created.id, nombre = %created.nombre, "Digimon created");
    Ok((StatusCode::CREATED, Json(created)))
}

// ---------------------------------------------------------------------------
// PUT /digimons/{id}
// ---------------------------------------------------------------------------

/// Update an existing record.
///
/// Any subset of fields may be supplied. An empty-string `nombre` or
/// `tipo` counts as "not supplied" and keeps the stored value. The image
/// is recomputed from the resulting name even when the name did not
/// change, and the version counter advances by exactly 1 from the value
/// just read (read-modify-write, no transaction).
pub async fn update_digimon(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateDigimon>,
) -> AppResult<impl IntoResponse> {
    let existing = ensure_digimon_exists(&state.pool, &id).await?;

    let nombre = input
        .nombre
        .filter(|s| !s.is_empty())
        .unwrap_or(existing.nombre);
    let tipo = input
        .tipo
        .filter(|s| !s.is_empty())
        .unwrap_or(existing.tipo);
    let nivel = match input.nivel.as_ref() {
        Some(level) => level.to_number()?,
        None => existing.nivel,
    };

    let imagen = state.lookup.image_for(&nombre).await;

    let record = Digimon {
        id: existing.id,
        nombre,
        tipo,
        nivel,
        version: existing.version + 1,
        imagen,
    };

    let matched = DigimonRepo::update(&state.pool, &record).await?;
    if !matched {
        // The row vanished between the read and the write.
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Digimon",
            id: record.id,
        }));
    }

    tracing::info!(id = %record.id, version = record.version, "Digimon updated");
    Ok(Json(record))
}

// ---------------------------------------------------------------------------
// DELETE /digimons/{id}
// ---------------------------------------------------------------------------

/// Delete a record by id.
pub async fn delete_digimon(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let deleted = DigimonRepo::delete(&state.pool, &id).await?;
    if deleted {
        tracing::info!(id = %id, "Digimon deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Digimon",
            id,
        }))
    }
}
