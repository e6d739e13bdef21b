/// All database primary keys are PostgreSQL BIGSERIAL.
///
/// Ids are environment-local: the same entity carries different ids in
/// different databases. Cross-environment identity is the `code` string.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
