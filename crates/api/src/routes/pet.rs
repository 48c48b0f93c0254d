//! Route definitions for the `/pets` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::pet;
use crate::state::AppState;

/// Routes mounted at `/pets`.
///
/// ```text
/// GET    /      -> list (?species=)
/// POST   /      -> create
/// GET    /{id}  -> get_by_id
/// PUT    /{id}  -> update
/// DELETE /{id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pet::list).post(pet::create))
        .route(
            "/{id}",
            get(pet::get_by_id).put(pet::update).delete(pet::delete),
        )
}
