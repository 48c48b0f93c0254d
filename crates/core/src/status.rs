//! Booking status string constants.
//!
//! Status is stored as free text on both `bookings` and `booking_services`;
//! these constants cover the values the backend itself writes or inspects.

/// Default status for a freshly created booking or booking/service link.
pub const STATUS_PENDING: &str = "Pending";

/// A cancelled booking no longer counts as an active reference to a service,
/// so it does not block hard-deleting that service.
pub const STATUS_CANCELLED: &str = "Cancelled";
