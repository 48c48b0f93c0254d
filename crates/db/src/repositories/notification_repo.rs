//! Repository for the `notifications` table.

use pawshot_core::types::DbId;
use sqlx::PgPool;

use crate::models::notification::{CreateNotification, Notification};

const COLUMNS: &str = "id, message, kind, is_read, owner_id, created_at";

/// Provides CRUD operations for owner notifications.
pub struct NotificationRepo;

impl NotificationRepo {
    /// Create a notification for an owner, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateNotification,
    ) -> Result<Notification, sqlx::Error> {
        let query = format!(
            "INSERT INTO notifications (message, kind, owner_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(&input.message)
            .bind(&input.kind)
            .bind(input.owner_id)
            .fetch_one(pool)
            .await
    }

    /// Find a notification by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Notification>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notifications WHERE id = $1");
        sqlx::query_as::<_, Notification>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List notifications, newest first, optionally scoped to one owner
    /// and/or unread ones only.
    pub async fn list(
        pool: &PgPool,
        owner_id: Option<DbId>,
        unread_only: bool,
    ) -> Result<Vec<Notification>, sqlx::Error> {
        let owner_filter = if owner_id.is_some() {
            "AND owner_id = $1"
        } else {
            "AND ($1::BIGINT IS NULL)"
        };
        let read_filter = if unread_only { "AND is_read = false" } else { "" };
        let query = format!(
            "SELECT {COLUMNS} FROM notifications
             WHERE true {owner_filter} {read_filter}
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// Mark a notification as read. Returns `true` if a row was updated.
    pub async fn mark_read(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE notifications SET is_read = true WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a notification. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notifications WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
