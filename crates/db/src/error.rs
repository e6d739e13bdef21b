/// Errors surfaced by the diagnostics primitives.
///
/// The repositories themselves return `sqlx::Error` directly; this type only
/// exists where the layer adds failure modes of its own.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("no matching row in table {table}")]
    NotFound { table: String },

    #[error("invalid SQL identifier {0:?}")]
    InvalidIdentifier(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}
