//! Repository for the `digimons` table.

use sqlx::PgPool;

use crate::models::digimon::Digimon;

const COLUMNS: &str = "id, nombre, tipo, nivel, version, imagen";

/// Provides CRUD operations for Digimon records.
pub struct DigimonRepo;

impl DigimonRepo {
    /// List all records in storage order. No ordering is imposed.
    pub async fn list(pool: &PgPool) -> Result<Vec<Digimon>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM digimons");
        sqlx::query_as::<_, Digimon>(&query).fetch_all(pool).await
    }

    /// Find a record by id.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Digimon>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM digimons WHERE id = $1");
        sqlx::query_as::<_, Digimon>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a fully-populated record, returning the stored row.
    ///
    /// The service assigns every column up front (id, version, imagen
    /// included), so this takes a complete [`Digimon`] rather than a DTO.
    pub async fn insert(pool: &PgPool, record: &Digimon) -> Result<Digimon, sqlx::Error> {
        let query = format!(
            "INSERT INTO digimons (id, nombre, tipo, nivel, version, imagen) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Digimon>(&query)
            .bind(&record.id)
            .bind(&record.nombre)
            .bind(&record.tipo)
            .bind(record.nivel)
            .bind(record.version)
            .bind(&record.imagen)
            .fetch_one(pool)
            .await
    }

    /// Write all mutable columns back to the row keyed by id.
    ///
    /// Returns `true` if a row matched. The caller computes the new
    /// version; no per-row locking happens here.
    pub async fn update(pool: &PgPool, record: &Digimon) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE digimons \
             SET nombre = $2, tipo = $3, nivel = $4, version = $5, imagen = $6 \
             WHERE id = $1",
        )
        .bind(&record.id)
        .bind(&record.nombre)
        .bind(&record.tipo)
        .bind(record.nivel)
        .bind(record.version)
        .bind(&record.imagen)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a record by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM digimons WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
