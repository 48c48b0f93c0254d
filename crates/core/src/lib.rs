//! Shared domain types for the pawshot booking backend.

pub mod error;
pub mod roles;
pub mod status;
pub mod types;
