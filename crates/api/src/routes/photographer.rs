//! Route definitions for the `/photographers` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::{booking, photographer};
use crate::state::AppState;

/// Routes mounted at `/photographers`.
///
/// ```text
/// GET    /                -> list (?available=)
/// POST   /                -> create
/// GET    /{id}            -> get_by_id
/// PUT    /{id}            -> update
/// DELETE /{id}            -> delete
/// GET    /{id}/bookings   -> bookings filtered by photographer
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(photographer::list).post(photographer::create))
        .route(
            "/{id}",
            get(photographer::get_by_id)
                .put(photographer::update)
                .delete(photographer::delete),
        )
        .route("/{id}/bookings", get(booking::list_by_photographer))
}
