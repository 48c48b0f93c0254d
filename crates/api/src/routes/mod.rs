pub mod auth;
pub mod booking;
pub mod health;
pub mod notification;
pub mod owner;
pub mod pet;
pub mod photographer;
pub mod service;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                        login (public)
/// /auth/me                           current user (auth)
///
/// /bookings                          list, create
/// /bookings/{id}                     get, update, delete
/// /bookings/{id}/services            services attached to one booking
///
/// /owners                            list, create
/// /owners/{id}                       get, update, delete
/// /owners/{id}/pets                  pets belonging to one owner
/// /owners/{id}/bookings              bookings filtered by owner
///
/// /pets                              list (?species=), create
/// /pets/{id}                         get, update, delete
///
/// /photographers                     list (?available=), create
/// /photographers/{id}                get, update, delete
/// /photographers/{id}/bookings       bookings filtered by photographer
///
/// /services                          list (?min_price_cents=&max_price_cents=), create
/// /services/{id}                     get, update, delete (soft when in use)
/// /services/{id}/bookings            bookings filtered by service
///
/// /notifications                     list (?owner_id=&unread_only=), create
/// /notifications/{id}                get, delete
/// /notifications/{id}/read           mark read (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/bookings", booking::router())
        .nest("/owners", owner::router())
        .nest("/pets", pet::router())
        .nest("/photographers", photographer::router())
        .nest("/services", service::router())
        .nest("/notifications", notification::router())
}
