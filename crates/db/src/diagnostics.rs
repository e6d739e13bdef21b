//! Debug query primitives.
//!
//! `column_value` and `first_row` read from arbitrary tables named at
//! runtime. They exist for harnesses and ad-hoc inspection, not as a
//! production data path. Table and column names cannot be bound parameters,
//! so both are validated against a strict identifier grammar before being
//! spliced into SQL.

use sqlx::{PgPool, Row};

use crate::error::DbError;

/// True for ASCII identifiers: `[a-zA-Z_][a-zA-Z0-9_]*`, at most 63 bytes
/// (the PostgreSQL identifier limit).
pub fn is_valid_identifier(name: &str) -> bool {
    if name.is_empty() || name.len() > 63 {
        return false;
    }
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn checked(name: &str) -> Result<&str, DbError> {
    if is_valid_identifier(name) {
        Ok(name)
    } else {
        Err(DbError::InvalidIdentifier(name.to_string()))
    }
}

/// Read a single column value from the first matching row of `table`.
///
/// The value comes back JSON-encoded so callers need no per-type decoding.
/// Fails with [`DbError::NotFound`] when the table is empty.
pub async fn column_value(
    pool: &PgPool,
    table: &str,
    column: &str,
) -> Result<serde_json::Value, DbError> {
    let table = checked(table)?;
    let column = checked(column)?;
    tracing::debug!(table, column, "diagnostic column read");
    let query = format!("SELECT to_jsonb({column})::text AS value FROM {table} LIMIT 1");
    let row = sqlx::query(&query).fetch_optional(pool).await?;
    match row {
        Some(row) => {
            // A NULL column value JSON-encodes to SQL NULL, not "null".
            let text: Option<String> = row.try_get("value")?;
            match text {
                Some(text) => serde_json::from_str(&text)
                    .map_err(|e| DbError::Sqlx(sqlx::Error::Decode(Box::new(e)))),
                None => Ok(serde_json::Value::Null),
            }
        }
        None => Err(DbError::NotFound {
            table: table.to_string(),
        }),
    }
}

/// Read the first row of `table` as a JSON object.
///
/// Fails with [`DbError::NotFound`] when the table is empty.
pub async fn first_row(pool: &PgPool, table: &str) -> Result<serde_json::Value, DbError> {
    let table = checked(table)?;
    tracing::debug!(table, "diagnostic first-row read");
    let query = format!("SELECT row_to_json(t)::text AS row FROM {table} t LIMIT 1");
    let row = sqlx::query(&query).fetch_optional(pool).await?;
    match row {
        Some(row) => {
            let text: String = row.try_get("row")?;
            serde_json::from_str(&text)
                .map_err(|e| DbError::Sqlx(sqlx::Error::Decode(Box::new(e))))
        }
        None => Err(DbError::NotFound {
            table: table.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_identifiers_accepted() {
        assert!(is_valid_identifier("projects"));
        assert!(is_valid_identifier("word_goal"));
        assert!(is_valid_identifier("_private"));
        assert!(is_valid_identifier("t1"));
    }

    #[test]
    fn injection_shapes_rejected() {
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("1abc"));
        assert!(!is_valid_identifier("projects; DROP TABLE projects"));
        assert!(!is_valid_identifier("projects--"));
        assert!(!is_valid_identifier("pro jects"));
        assert!(!is_valid_identifier("\"projects\""));
    }

    #[test]
    fn overlong_identifier_rejected() {
        assert!(!is_valid_identifier(&"a".repeat(64)));
        assert!(is_valid_identifier(&"a".repeat(63)));
    }
}
