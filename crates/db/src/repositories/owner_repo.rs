//! Repository for the `owners` table.

use pawshot_core::types::DbId;
use sqlx::PgPool;

use crate::models::owner::{CreateOwner, Owner, UpdateOwner};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, phone, address, created_at";

/// Provides CRUD operations for owners.
///
/// Deleting an owner cascades at the SQL level to their pets, bookings
/// (and booking/service links), and notifications.
pub struct OwnerRepo;

impl OwnerRepo {
    /// Insert a new owner, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateOwner) -> Result<Owner, sqlx::Error> {
        let query = format!(
            "INSERT INTO owners (name, email, phone, address)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Owner>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.address)
            .fetch_one(pool)
            .await
    }

    /// Find an owner by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Owner>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM owners WHERE id = $1");
        sqlx::query_as::<_, Owner>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Check whether an owner with the given ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM owners WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// List all owners, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Owner>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM owners ORDER BY created_at DESC");
        sqlx::query_as::<_, Owner>(&query).fetch_all(pool).await
    }

    /// Replace an owner's fields. Returns `None` if no row exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateOwner,
    ) -> Result<Option<Owner>, sqlx::Error> {
        let query = format!(
            "UPDATE owners SET name = $2, email = $3, phone = $4, address = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Owner>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.address)
            .fetch_optional(pool)
            .await
    }

    /// Delete an owner. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM owners WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
