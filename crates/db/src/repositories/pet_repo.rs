//! Repository for the `pets` table.

use pawshot_core::types::DbId;
use sqlx::PgPool;

use crate::models::pet::{CreatePet, Pet, UpdatePet};

const COLUMNS: &str =
    "id, name, species, breed, age, color, special_notes, photo_path, owner_id, created_at";

/// Provides CRUD operations for pets.
pub struct PetRepo;

impl PetRepo {
    /// Insert a new pet, returning the created row.
    ///
    /// The referenced owner must exist; callers check this first so a
    /// missing owner surfaces as 404 rather than an FK error.
    pub async fn create(pool: &PgPool, input: &CreatePet) -> Result<Pet, sqlx::Error> {
        let query = format!(
            "INSERT INTO pets (name, species, breed, age, color, special_notes, photo_path, owner_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Pet>(&query)
            .bind(&input.name)
            .bind(&input.species)
            .bind(&input.breed)
            .bind(input.age)
            .bind(&input.color)
            .bind(&input.special_notes)
            .bind(&input.photo_path)
            .bind(input.owner_id)
            .fetch_one(pool)
            .await
    }

    /// Find a pet by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Pet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pets WHERE id = $1");
        sqlx::query_as::<_, Pet>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all pets, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Pet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pets ORDER BY created_at DESC");
        sqlx::query_as::<_, Pet>(&query).fetch_all(pool).await
    }

    /// List all pets belonging to one owner.
    pub async fn list_by_owner(pool: &PgPool, owner_id: DbId) -> Result<Vec<Pet>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM pets WHERE owner_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Pet>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// List pets of a given species (case-insensitive match).
    pub async fn list_by_species(pool: &PgPool, species: &str) -> Result<Vec<Pet>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM pets WHERE LOWER(species) = LOWER($1) ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Pet>(&query)
            .bind(species)
            .fetch_all(pool)
            .await
    }

    /// Replace a pet's fields. Returns `None` if no row exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePet,
    ) -> Result<Option<Pet>, sqlx::Error> {
        let query = format!(
            "UPDATE pets SET
                name = $2, species = $3, breed = $4, age = $5,
                color = $6, special_notes = $7, photo_path = $8, owner_id = $9
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Pet>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.species)
            .bind(&input.breed)
            .bind(input.age)
            .bind(&input.color)
            .bind(&input.special_notes)
            .bind(&input.photo_path)
            .bind(input.owner_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a pet. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM pets WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
