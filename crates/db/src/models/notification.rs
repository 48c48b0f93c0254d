//! Notification entity model and DTOs.

use pawshot_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `notifications` table. Notifications are addressed to an
/// owner and removed when that owner is deleted.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Notification {
    pub id: DbId,
    pub message: String,
    pub kind: String,
    pub is_read: bool,
    pub owner_id: DbId,
    pub created_at: Timestamp,
}

/// DTO for creating a notification.
#[derive(Debug, Deserialize)]
pub struct CreateNotification {
    pub message: String,
    pub kind: String,
    pub owner_id: DbId,
}
