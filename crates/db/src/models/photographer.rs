//! Photographer entity model and DTOs.

use pawshot_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `photographers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Photographer {
    pub id: DbId,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub specialty: Option<String>,
    pub is_available: bool,
}

/// DTO for creating a photographer.
#[derive(Debug, Deserialize)]
pub struct CreatePhotographer {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub specialty: Option<String>,
    #[serde(default = "default_available")]
    pub is_available: bool,
}

/// DTO for replacing a photographer's fields (PUT).
#[derive(Debug, Deserialize)]
pub struct UpdatePhotographer {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub specialty: Option<String>,
    pub is_available: bool,
}

fn default_available() -> bool {
    true
}
