//! Service entity model and DTOs.

use pawshot_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `services` table. Prices are integer cents.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Service {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a service. New services always start active.
#[derive(Debug, Deserialize)]
pub struct CreateService {
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i64,
}

/// DTO for replacing a service's fields (PUT).
#[derive(Debug, Deserialize)]
pub struct UpdateService {
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub is_active: bool,
}

/// Outcome of a service delete request.
///
/// A service still referenced by a non-cancelled booking is deactivated
/// instead of removed, so callers can tell the two apart.
#[derive(Debug)]
pub enum ServiceDeleteOutcome {
    /// The row was removed.
    Deleted,
    /// The row was kept and `is_active` flipped to false.
    Deactivated(Service),
}
