use pawshot_core::error::CoreError;

/// Error type for repository methods that perform their own referential
/// checks (the booking lifecycle).
///
/// Plain CRUD repositories return `sqlx::Error` directly; this wrapper exists
/// so multi-step writes can report a domain failure (missing reference,
/// ownership mismatch) discovered mid-transaction.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),

    #[error(transparent)]
    Domain(#[from] CoreError),
}
