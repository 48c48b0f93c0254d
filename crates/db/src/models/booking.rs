//! Booking entity models, projections, and DTOs.

use pawshot_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `bookings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Booking {
    pub id: DbId,
    pub booking_date: Timestamp,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub status: String,
    pub owner_id: DbId,
    pub pet_id: DbId,
    pub photographer_id: DbId,
    pub created_at: Timestamp,
}

/// Flattened list projection: one row per booking with related names and
/// the number of attached services.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BookingSummary {
    pub id: DbId,
    pub booking_date: Timestamp,
    pub location: Option<String>,
    pub status: String,
    pub owner_name: String,
    pub pet_name: String,
    pub photographer_name: String,
    pub service_count: i64,
}

/// One service attached to a booking, with its per-link status.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct BookingServiceLine {
    pub service_id: DbId,
    pub name: String,
    pub price_cents: i64,
    pub status: String,
}

/// Detail projection: the booking row, related ids and names, and the full
/// nested service list.
#[derive(Debug, Clone, Serialize)]
pub struct BookingDetail {
    pub id: DbId,
    pub booking_date: Timestamp,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub status: String,
    pub owner_id: DbId,
    pub owner_name: String,
    pub pet_id: DbId,
    pub pet_name: String,
    pub photographer_id: DbId,
    pub photographer_name: String,
    pub services: Vec<BookingServiceLine>,
}

/// Header portion of [`BookingDetail`], fetched in one join before the
/// service lines are attached.
#[derive(Debug, Clone, FromRow)]
pub struct BookingDetailHeader {
    pub id: DbId,
    pub booking_date: Timestamp,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub status: String,
    pub owner_id: DbId,
    pub owner_name: String,
    pub pet_id: DbId,
    pub pet_name: String,
    pub photographer_id: DbId,
    pub photographer_name: String,
}

impl BookingDetailHeader {
    pub fn into_detail(self, services: Vec<BookingServiceLine>) -> BookingDetail {
        BookingDetail {
            id: self.id,
            booking_date: self.booking_date,
            location: self.location,
            notes: self.notes,
            status: self.status,
            owner_id: self.owner_id,
            owner_name: self.owner_name,
            pet_id: self.pet_id,
            pet_name: self.pet_name,
            photographer_id: self.photographer_id,
            photographer_name: self.photographer_name,
            services,
        }
    }
}

/// DTO for creating a booking together with its service selection.
#[derive(Debug, Deserialize)]
pub struct CreateBooking {
    pub booking_date: Timestamp,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub owner_id: DbId,
    pub pet_id: DbId,
    pub photographer_id: DbId,
    #[serde(default)]
    pub service_ids: Vec<DbId>,
}

/// DTO for replacing a booking (PUT).
///
/// The `service_ids` list fully replaces the existing association set;
/// any per-service status accumulated on dropped links is discarded.
#[derive(Debug, Deserialize)]
pub struct UpdateBooking {
    pub booking_date: Timestamp,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub status: Option<String>,
    pub owner_id: DbId,
    pub pet_id: DbId,
    pub photographer_id: DbId,
    #[serde(default)]
    pub service_ids: Vec<DbId>,
}
