//! Route definitions for the `/services` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::{booking, service};
use crate::state::AppState;

/// Routes mounted at `/services`.
///
/// ```text
/// GET    /                -> list (?min_price_cents=&max_price_cents=)
/// POST   /                -> create
/// GET    /{id}            -> get_by_id
/// PUT    /{id}            -> update
/// DELETE /{id}            -> delete (soft when still referenced)
/// GET    /{id}/bookings   -> bookings filtered by service
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(service::list).post(service::create))
        .route(
            "/{id}",
            get(service::get_by_id)
                .put(service::update)
                .delete(service::delete),
        )
        .route("/{id}/bookings", get(booking::list_by_service))
}
