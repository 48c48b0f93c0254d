//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers delegate to the corresponding repository in `pawshot_db` and map
//! errors via [`crate::error::AppError`]. Authorization is enforced by the
//! extractor parameters ([`crate::middleware::rbac`]).

pub mod auth;
pub mod booking;
pub mod notification;
pub mod owner;
pub mod pet;
pub mod photographer;
pub mod service;
