//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod booking_repo;
pub mod notification_repo;
pub mod owner_repo;
pub mod pet_repo;
pub mod photographer_repo;
pub mod service_repo;
pub mod user_repo;

pub use booking_repo::BookingRepo;
pub use notification_repo::NotificationRepo;
pub use owner_repo::OwnerRepo;
pub use pet_repo::PetRepo;
pub use photographer_repo::PhotographerRepo;
pub use service_repo::ServiceRepo;
pub use user_repo::UserRepo;
