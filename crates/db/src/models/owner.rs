//! Owner entity model and DTOs.

use pawshot_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `owners` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Owner {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating an owner.
#[derive(Debug, Deserialize)]
pub struct CreateOwner {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// DTO for replacing an owner's fields (PUT).
#[derive(Debug, Deserialize)]
pub struct UpdateOwner {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}
