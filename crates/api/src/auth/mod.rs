//! Authentication primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- JWT access-token generation and validation.

pub mod jwt;
pub mod password;

use pawshot_core::roles::ROLE_ADMIN;
use pawshot_db::repositories::UserRepo;
use pawshot_db::DbPool;

/// Create the initial admin account when the `users` table is empty.
///
/// Reads `ADMIN_EMAIL` and `ADMIN_PASSWORD` from the environment. Does
/// nothing when users already exist or the variables are unset.
pub async fn bootstrap_initial_admin(pool: &DbPool) -> Result<(), sqlx::Error> {
    if UserRepo::count(pool).await? > 0 {
        return Ok(());
    }

    let (Ok(email), Ok(admin_password)) =
        (std::env::var("ADMIN_EMAIL"), std::env::var("ADMIN_PASSWORD"))
    else {
        tracing::warn!("No users exist and ADMIN_EMAIL/ADMIN_PASSWORD are not set; skipping admin bootstrap");
        return Ok(());
    };

    let hash = password::hash_password(&admin_password)
        .expect("Failed to hash ADMIN_PASSWORD at startup");
    UserRepo::create(pool, &email, &hash, "Administrator", ROLE_ADMIN).await?;
    tracing::info!(%email, "Bootstrapped initial admin user");
    Ok(())
}
