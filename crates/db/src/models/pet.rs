//! Pet entity model and DTOs.

use pawshot_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `pets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Pet {
    pub id: DbId,
    pub name: String,
    pub species: String,
    pub breed: Option<String>,
    pub age: i32,
    pub color: Option<String>,
    pub special_notes: Option<String>,
    /// Reference to an externally stored photo. Upload handling itself is
    /// not part of this API.
    pub photo_path: Option<String>,
    pub owner_id: DbId,
    pub created_at: Timestamp,
}

/// DTO for creating a pet.
#[derive(Debug, Deserialize)]
pub struct CreatePet {
    pub name: String,
    pub species: String,
    pub breed: Option<String>,
    #[serde(default)]
    pub age: i32,
    pub color: Option<String>,
    pub special_notes: Option<String>,
    pub photo_path: Option<String>,
    pub owner_id: DbId,
}

/// DTO for replacing a pet's fields (PUT).
#[derive(Debug, Deserialize)]
pub struct UpdatePet {
    pub name: String,
    pub species: String,
    pub breed: Option<String>,
    #[serde(default)]
    pub age: i32,
    pub color: Option<String>,
    pub special_notes: Option<String>,
    pub photo_path: Option<String>,
    pub owner_id: DbId,
}
