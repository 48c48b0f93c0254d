//! Repository for the `photographers` table.

use pawshot_core::types::DbId;
use sqlx::PgPool;

use crate::models::photographer::{CreatePhotographer, Photographer, UpdatePhotographer};

const COLUMNS: &str = "id, name, email, phone, specialty, is_available";

/// Provides CRUD operations for photographers.
pub struct PhotographerRepo;

impl PhotographerRepo {
    /// Insert a new photographer, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreatePhotographer,
    ) -> Result<Photographer, sqlx::Error> {
        let query = format!(
            "INSERT INTO photographers (name, email, phone, specialty, is_available)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Photographer>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.specialty)
            .bind(input.is_available)
            .fetch_one(pool)
            .await
    }

    /// Find a photographer by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Photographer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM photographers WHERE id = $1");
        sqlx::query_as::<_, Photographer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List photographers, optionally restricted to available ones.
    pub async fn list(
        pool: &PgPool,
        available_only: bool,
    ) -> Result<Vec<Photographer>, sqlx::Error> {
        let filter = if available_only {
            "WHERE is_available = true"
        } else {
            ""
        };
        let query = format!("SELECT {COLUMNS} FROM photographers {filter} ORDER BY name");
        sqlx::query_as::<_, Photographer>(&query)
            .fetch_all(pool)
            .await
    }

    /// Replace a photographer's fields. Returns `None` if no row exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePhotographer,
    ) -> Result<Option<Photographer>, sqlx::Error> {
        let query = format!(
            "UPDATE photographers SET
                name = $2, email = $3, phone = $4, specialty = $5, is_available = $6
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Photographer>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.specialty)
            .bind(input.is_available)
            .fetch_optional(pool)
            .await
    }

    /// Delete a photographer. Returns `true` if a row was removed.
    ///
    /// Fails with an FK violation (mapped to 409 at the API boundary) while
    /// bookings still reference the photographer.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM photographers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
