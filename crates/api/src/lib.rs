//! HTTP API for the pawshot booking backend.
//!
//! Exposed as a library so integration tests can build the exact router the
//! production binary serves.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod routes;
pub mod state;
