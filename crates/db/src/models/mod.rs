//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO for full-object replacement (PUT semantics;
//!   there is no partial patch on these resources)

pub mod booking;
pub mod notification;
pub mod owner;
pub mod pet;
pub mod photographer;
pub mod service;
pub mod user;
