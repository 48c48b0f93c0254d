//! Route definitions for the `/notifications` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::notification;
use crate::state::AppState;

/// Routes mounted at `/notifications`.
///
/// ```text
/// GET    /            -> list (?owner_id=&unread_only=)
/// POST   /            -> create
/// GET    /{id}        -> get_by_id
/// DELETE /{id}        -> delete
/// POST   /{id}/read   -> mark_read
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(notification::list).post(notification::create))
        .route(
            "/{id}",
            get(notification::get_by_id).delete(notification::delete),
        )
        .route("/{id}/read", post(notification::mark_read))
}
