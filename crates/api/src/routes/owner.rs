//! Route definitions for the `/owners` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::{booking, owner};
use crate::state::AppState;

/// Routes mounted at `/owners`.
///
/// ```text
/// GET    /                -> list
/// POST   /                -> create
/// GET    /{id}            -> get_by_id
/// PUT    /{id}            -> update
/// DELETE /{id}            -> delete
/// GET    /{id}/pets       -> list_pets
/// GET    /{id}/bookings   -> bookings filtered by owner
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(owner::list).post(owner::create))
        .route(
            "/{id}",
            get(owner::get_by_id)
                .put(owner::update)
                .delete(owner::delete),
        )
        .route("/{id}/pets", get(owner::list_pets))
        .route("/{id}/bookings", get(booking::list_by_owner))
}
