//! Repository for the `services` table.

use pawshot_core::status::STATUS_CANCELLED;
use pawshot_core::types::DbId;
use sqlx::PgPool;

use crate::models::service::{CreateService, Service, ServiceDeleteOutcome, UpdateService};

const COLUMNS: &str = "id, name, description, price_cents, is_active, created_at, updated_at";

/// Provides CRUD operations for services, including the soft-delete rule
/// for services still referenced by live bookings.
pub struct ServiceRepo;

impl ServiceRepo {
    /// Insert a new service, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateService) -> Result<Service, sqlx::Error> {
        let query = format!(
            "INSERT INTO services (name, description, price_cents)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Service>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price_cents)
            .fetch_one(pool)
            .await
    }

    /// Find a service by ID (active or not).
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Service>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM services WHERE id = $1");
        sqlx::query_as::<_, Service>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Check whether a service with the given ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM services WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// List active services ordered by name.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Service>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM services WHERE is_active = true ORDER BY name"
        );
        sqlx::query_as::<_, Service>(&query).fetch_all(pool).await
    }

    /// List active services whose price falls within `[min_cents, max_cents]`.
    pub async fn list_by_price_range(
        pool: &PgPool,
        min_cents: i64,
        max_cents: i64,
    ) -> Result<Vec<Service>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM services
             WHERE is_active = true AND price_cents >= $1 AND price_cents <= $2
             ORDER BY price_cents"
        );
        sqlx::query_as::<_, Service>(&query)
            .bind(min_cents)
            .bind(max_cents)
            .fetch_all(pool)
            .await
    }

    /// Replace a service's fields and bump `updated_at`.
    /// Returns `None` if no row exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateService,
    ) -> Result<Option<Service>, sqlx::Error> {
        let query = format!(
            "UPDATE services SET
                name = $2, description = $3, price_cents = $4, is_active = $5,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Service>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price_cents)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a service, softly when it is still in use.
    ///
    /// A service referenced by any booking whose status is not "Cancelled"
    /// keeps its row and has `is_active` cleared; otherwise the row (and any
    /// links from cancelled bookings) is removed. Returns `None` when the
    /// service does not exist.
    pub async fn delete(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ServiceDeleteOutcome>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let exists: bool = sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM services WHERE id = $1)")
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;
        if !exists {
            return Ok(None);
        }

        let in_use: bool = sqlx::query_scalar(
            "SELECT EXISTS (
                SELECT 1 FROM booking_services bs
                JOIN bookings b ON b.id = bs.booking_id
                WHERE bs.service_id = $1 AND b.status <> $2
             )",
        )
        .bind(id)
        .bind(STATUS_CANCELLED)
        .fetch_one(&mut *tx)
        .await?;

        let outcome = if in_use {
            let query = format!(
                "UPDATE services SET is_active = false, updated_at = NOW()
                 WHERE id = $1
                 RETURNING {COLUMNS}"
            );
            let service = sqlx::query_as::<_, Service>(&query)
                .bind(id)
                .fetch_one(&mut *tx)
                .await?;
            ServiceDeleteOutcome::Deactivated(service)
        } else {
            // Links from cancelled bookings would otherwise trip the
            // RESTRICT on booking_services.service_id.
            sqlx::query("DELETE FROM booking_services WHERE service_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            sqlx::query("DELETE FROM services WHERE id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            ServiceDeleteOutcome::Deleted
        };

        tx.commit().await?;
        Ok(Some(outcome))
    }
}
