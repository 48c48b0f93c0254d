//! Repository for the `bookings` table and its `booking_services` links.
//!
//! Booking writes are multi-row (the booking plus its service links) and run
//! inside a single transaction: either everything commits or nothing does.
//! Referential checks happen inside the same transaction so a failed create
//! or update leaves no partial rows behind.

use pawshot_core::error::CoreError;
use pawshot_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::error::DbError;
use crate::models::booking::{
    BookingDetail, BookingDetailHeader, BookingServiceLine, BookingSummary, CreateBooking,
    UpdateBooking,
};

/// Shared SELECT body for the flattened summary projection.
const SUMMARY_SELECT: &str = "SELECT b.id, b.booking_date, b.location, b.status,
        o.name AS owner_name, p.name AS pet_name, ph.name AS photographer_name,
        COUNT(bs.service_id) AS service_count
     FROM bookings b
     JOIN owners o ON o.id = b.owner_id
     JOIN pets p ON p.id = b.pet_id
     JOIN photographers ph ON ph.id = b.photographer_id
     LEFT JOIN booking_services bs ON bs.booking_id = b.id";

const SUMMARY_GROUP_ORDER: &str =
    "GROUP BY b.id, o.name, p.name, ph.name ORDER BY b.booking_date DESC";

/// Lifecycle and projection operations for bookings.
pub struct BookingRepo;

impl BookingRepo {
    /// Create a booking together with its service links.
    ///
    /// The referenced owner, pet, photographer, and every service must
    /// exist; the pet must belong to the given owner and the photographer
    /// must be available. On success returns the fully populated detail.
    pub async fn create(pool: &PgPool, input: &CreateBooking) -> Result<BookingDetail, DbError> {
        let service_ids = dedup_ids(&input.service_ids);
        let mut tx = pool.begin().await?;

        check_references(
            &mut tx,
            input.owner_id,
            input.pet_id,
            input.photographer_id,
            &service_ids,
        )
        .await?;

        let available: bool =
            sqlx::query_scalar("SELECT is_available FROM photographers WHERE id = $1")
                .bind(input.photographer_id)
                .fetch_one(&mut *tx)
                .await?;
        if !available {
            return Err(CoreError::Validation(format!(
                "Photographer {} is not available for new bookings",
                input.photographer_id
            ))
            .into());
        }

        let booking_id: DbId = sqlx::query_scalar(
            "INSERT INTO bookings (booking_date, location, notes, owner_id, pet_id, photographer_id)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id",
        )
        .bind(input.booking_date)
        .bind(&input.location)
        .bind(&input.notes)
        .bind(input.owner_id)
        .bind(input.pet_id)
        .bind(input.photographer_id)
        .fetch_one(&mut *tx)
        .await?;

        insert_service_links(&mut tx, booking_id, &service_ids).await?;

        let detail = fetch_detail(&mut tx, booking_id)
            .await?
            .ok_or_else(|| CoreError::Internal("created booking vanished mid-transaction".into()))?;

        tx.commit().await?;
        Ok(detail)
    }

    /// Replace a booking's scalar fields and its entire service selection.
    ///
    /// The service list is replaced wholesale: all existing links are
    /// deleted and fresh ones inserted with status "Pending". This is a
    /// replace, not a merge; per-service status on dropped or re-added
    /// links is discarded.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBooking,
    ) -> Result<BookingDetail, DbError> {
        let service_ids = dedup_ids(&input.service_ids);
        let mut tx = pool.begin().await?;

        check_references(
            &mut tx,
            input.owner_id,
            input.pet_id,
            input.photographer_id,
            &service_ids,
        )
        .await?;

        // Zero rows here means the booking was deleted, possibly by a
        // concurrent request between our read and this write.
        let updated = sqlx::query(
            "UPDATE bookings SET
                booking_date = $2, location = $3, notes = $4,
                status = COALESCE($5, status),
                owner_id = $6, pet_id = $7, photographer_id = $8
             WHERE id = $1",
        )
        .bind(id)
        .bind(input.booking_date)
        .bind(&input.location)
        .bind(&input.notes)
        .bind(&input.status)
        .bind(input.owner_id)
        .bind(input.pet_id)
        .bind(input.photographer_id)
        .execute(&mut *tx)
        .await?;
        if updated.rows_affected() == 0 {
            return Err(CoreError::NotFound {
                entity: "Booking",
                id,
            }
            .into());
        }

        sqlx::query("DELETE FROM booking_services WHERE booking_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        insert_service_links(&mut tx, id, &service_ids).await?;

        let detail = fetch_detail(&mut tx, id)
            .await?
            .ok_or_else(|| CoreError::Internal("updated booking vanished mid-transaction".into()))?;

        tx.commit().await?;
        Ok(detail)
    }

    /// Delete a booking and its service links. Returns `true` if the
    /// booking existed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        // The FK cascade would handle this, but the links are removed
        // explicitly so the two deletes always travel together.
        sqlx::query("DELETE FROM booking_services WHERE booking_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        let result = sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    /// One booking with its nested service list, or `None`.
    pub async fn find_detail(pool: &PgPool, id: DbId) -> Result<Option<BookingDetail>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let detail = fetch_detail(&mut tx, id).await?;
        tx.commit().await?;
        Ok(detail)
    }

    /// All bookings as flat summaries, most recent date first.
    pub async fn list(pool: &PgPool) -> Result<Vec<BookingSummary>, sqlx::Error> {
        let query = format!("{SUMMARY_SELECT} {SUMMARY_GROUP_ORDER}");
        sqlx::query_as::<_, BookingSummary>(&query)
            .fetch_all(pool)
            .await
    }

    /// Summaries for one owner's bookings.
    pub async fn list_by_owner(
        pool: &PgPool,
        owner_id: DbId,
    ) -> Result<Vec<BookingSummary>, sqlx::Error> {
        let query = format!("{SUMMARY_SELECT} WHERE b.owner_id = $1 {SUMMARY_GROUP_ORDER}");
        sqlx::query_as::<_, BookingSummary>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// Summaries for one photographer's bookings.
    pub async fn list_by_photographer(
        pool: &PgPool,
        photographer_id: DbId,
    ) -> Result<Vec<BookingSummary>, sqlx::Error> {
        let query = format!("{SUMMARY_SELECT} WHERE b.photographer_id = $1 {SUMMARY_GROUP_ORDER}");
        sqlx::query_as::<_, BookingSummary>(&query)
            .bind(photographer_id)
            .fetch_all(pool)
            .await
    }

    /// Summaries for every booking that includes the given service.
    pub async fn list_by_service(
        pool: &PgPool,
        service_id: DbId,
    ) -> Result<Vec<BookingSummary>, sqlx::Error> {
        let query = format!(
            "{SUMMARY_SELECT}
             WHERE EXISTS (
                SELECT 1 FROM booking_services x
                WHERE x.booking_id = b.id AND x.service_id = $1
             )
             {SUMMARY_GROUP_ORDER}"
        );
        sqlx::query_as::<_, BookingSummary>(&query)
            .bind(service_id)
            .fetch_all(pool)
            .await
    }

    /// The service lines attached to one booking, or `None` if the booking
    /// itself does not exist (distinct from an empty list).
    pub async fn services_for_booking(
        pool: &PgPool,
        booking_id: DbId,
    ) -> Result<Option<Vec<BookingServiceLine>>, sqlx::Error> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM bookings WHERE id = $1)")
            .bind(booking_id)
            .fetch_one(pool)
            .await?;
        if !exists {
            return Ok(None);
        }
        let lines = sqlx::query_as::<_, BookingServiceLine>(
            "SELECT bs.service_id, s.name, s.price_cents, bs.status
             FROM booking_services bs
             JOIN services s ON s.id = bs.service_id
             WHERE bs.booking_id = $1
             ORDER BY bs.service_id",
        )
        .bind(booking_id)
        .fetch_all(pool)
        .await?;
        Ok(Some(lines))
    }
}

/// Sort and deduplicate a service id list so duplicate selections cannot
/// trip the composite primary key.
fn dedup_ids(ids: &[DbId]) -> Vec<DbId> {
    let mut out = ids.to_vec();
    out.sort_unstable();
    out.dedup();
    out
}

/// Verify that the owner, pet, photographer, and all services exist and
/// that the pet belongs to the owner.
async fn check_references(
    tx: &mut Transaction<'_, Postgres>,
    owner_id: DbId,
    pet_id: DbId,
    photographer_id: DbId,
    service_ids: &[DbId],
) -> Result<(), DbError> {
    let owner_exists: bool = sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM owners WHERE id = $1)")
        .bind(owner_id)
        .fetch_one(&mut **tx)
        .await?;
    if !owner_exists {
        return Err(CoreError::NotFound {
            entity: "Owner",
            id: owner_id,
        }
        .into());
    }

    let pet_owner: Option<DbId> = sqlx::query_scalar("SELECT owner_id FROM pets WHERE id = $1")
        .bind(pet_id)
        .fetch_optional(&mut **tx)
        .await?;
    match pet_owner {
        None => {
            return Err(CoreError::NotFound {
                entity: "Pet",
                id: pet_id,
            }
            .into())
        }
        Some(actual) if actual != owner_id => {
            return Err(CoreError::Validation(format!(
                "Pet {pet_id} does not belong to owner {owner_id}"
            ))
            .into())
        }
        Some(_) => {}
    }

    let photographer_exists: bool =
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM photographers WHERE id = $1)")
            .bind(photographer_id)
            .fetch_one(&mut **tx)
            .await?;
    if !photographer_exists {
        return Err(CoreError::NotFound {
            entity: "Photographer",
            id: photographer_id,
        }
        .into());
    }

    for &service_id in service_ids {
        let service_exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM services WHERE id = $1)")
                .bind(service_id)
                .fetch_one(&mut **tx)
                .await?;
        if !service_exists {
            return Err(CoreError::NotFound {
                entity: "Service",
                id: service_id,
            }
            .into());
        }
    }

    Ok(())
}

/// Insert one link row per service id, all with the default "Pending" status.
async fn insert_service_links(
    tx: &mut Transaction<'_, Postgres>,
    booking_id: DbId,
    service_ids: &[DbId],
) -> Result<(), sqlx::Error> {
    for &service_id in service_ids {
        sqlx::query("INSERT INTO booking_services (booking_id, service_id) VALUES ($1, $2)")
            .bind(booking_id)
            .bind(service_id)
            .execute(&mut **tx)
            .await?;
    }
    Ok(())
}

/// Fetch the detail projection inside an open transaction.
async fn fetch_detail(
    tx: &mut Transaction<'_, Postgres>,
    id: DbId,
) -> Result<Option<BookingDetail>, sqlx::Error> {
    let header = sqlx::query_as::<_, BookingDetailHeader>(
        "SELECT b.id, b.booking_date, b.location, b.notes, b.status,
                b.owner_id, o.name AS owner_name,
                b.pet_id, p.name AS pet_name,
                b.photographer_id, ph.name AS photographer_name
         FROM bookings b
         JOIN owners o ON o.id = b.owner_id
         JOIN pets p ON p.id = b.pet_id
         JOIN photographers ph ON ph.id = b.photographer_id
         WHERE b.id = $1",
    )
    .bind(id)
    .fetch_optional(&mut **tx)
    .await?;

    let Some(header) = header else {
        return Ok(None);
    };

    let services = sqlx::query_as::<_, BookingServiceLine>(
        "SELECT bs.service_id, s.name, s.price_cents, bs.status
         FROM booking_services bs
         JOIN services s ON s.id = bs.service_id
         WHERE bs.booking_id = $1
         ORDER BY bs.service_id",
    )
    .bind(id)
    .fetch_all(&mut **tx)
    .await?;

    Ok(Some(header.into_detail(services)))
}

#[cfg(test)]
mod tests {
    use super::dedup_ids;

    #[test]
    fn dedup_ids_sorts_and_removes_duplicates() {
        assert_eq!(dedup_ids(&[3, 1, 3, 2, 1]), vec![1, 2, 3]);
        assert_eq!(dedup_ids(&[]), Vec::<i64>::new());
    }
}
