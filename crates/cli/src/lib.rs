//! Shared plumbing for the draftbase command-line binaries.

use std::path::PathBuf;

use anyhow::Context;

/// Project code the harness binaries default to.
pub const SAMPLE_PROJECT_CODE: &str = "SAMPLE-PROJECT";

/// Local project folder the harness binaries default to.
pub const SAMPLE_PROJECT_DIR: &str = "sample_project";

/// Tracing bootstrap shared by every binary.
pub fn init_tracing(default_filter: &str) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Connect to the database named by `DATABASE_URL` and verify it responds.
pub async fn connect() -> anyhow::Result<sqlx::PgPool> {
    let url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = draftbase_db::create_pool(&url)
        .await
        .context("failed to connect to database")?;
    draftbase_db::health_check(&pool)
        .await
        .context("database health check failed")?;
    Ok(pool)
}

/// Exit codes of the `run_sql` binary.
pub mod sql_exit {
    pub const OK: i32 = 0;
    pub const EXECUTION_FAILED: i32 = 1;
    pub const MISSING_FILE_ARG: i32 = 2;
    pub const FILE_NOT_FOUND: i32 = 3;
    pub const NO_CONNECTION_STRING: i32 = 4;
}

/// A fully resolved `run_sql` invocation.
#[derive(Debug)]
pub struct SqlRun {
    pub file: PathBuf,
    pub conn: String,
}

/// Why a `run_sql` invocation could not be resolved.
#[derive(Debug, PartialEq, Eq)]
pub enum SqlRunError {
    MissingFileArg,
    FileNotFound(PathBuf),
    NoConnectionString,
}

impl SqlRunError {
    pub fn exit_code(&self) -> i32 {
        match self {
            SqlRunError::MissingFileArg => sql_exit::MISSING_FILE_ARG,
            SqlRunError::FileNotFound(_) => sql_exit::FILE_NOT_FOUND,
            SqlRunError::NoConnectionString => sql_exit::NO_CONNECTION_STRING,
        }
    }
}

/// Resolve `run_sql` arguments against an environment lookup.
///
/// Connection string precedence: second positional argument, then
/// `DATABASE_URL`, then `PG_CONNECTION`. Resolution never opens a
/// connection; a missing connection string is reported before one could
/// be attempted.
pub fn resolve_sql_run(
    mut args: impl Iterator<Item = String>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<SqlRun, SqlRunError> {
    let Some(file) = args.next() else {
        return Err(SqlRunError::MissingFileArg);
    };
    let file = PathBuf::from(file);
    if !file.is_file() {
        return Err(SqlRunError::FileNotFound(file));
    }
    let Some(conn) = args
        .next()
        .or_else(|| env("DATABASE_URL"))
        .or_else(|| env("PG_CONNECTION"))
    else {
        return Err(SqlRunError::NoConnectionString);
    };
    Ok(SqlRun { file, conn })
}

/// Run `sql` inside one transaction. Any statement failure rolls the
/// whole file back and surfaces the original error.
pub async fn apply_sql(pool: &sqlx::PgPool, sql: &str) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;
    if let Err(e) = sqlx::raw_sql(sql).execute(&mut *tx).await {
        if let Err(e) = tx.rollback().await {
            tracing::error!(error = %e, "rollback failed");
        }
        return Err(e);
    }
    tx.commit().await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> std::vec::IntoIter<String> {
        v.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn sql_file(dir: &std::path::Path) -> PathBuf {
        let path = dir.join("stmt.sql");
        std::fs::write(&path, "SELECT 1;\n").unwrap();
        path
    }

    #[test]
    fn missing_file_argument_is_exit_2() {
        let err = resolve_sql_run(args(&[]), no_env).unwrap_err();
        assert_eq!(err, SqlRunError::MissingFileArg);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn nonexistent_file_is_exit_3() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("missing.sql");
        let err = resolve_sql_run(args(&[missing.to_str().unwrap()]), no_env).unwrap_err();
        assert_eq!(err, SqlRunError::FileNotFound(missing));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn no_connection_string_is_exit_4_without_opening_a_connection() {
        let tmp = tempfile::tempdir().unwrap();
        let file = sql_file(tmp.path());
        // Resolution is pure: no pool, no socket, just the exit code.
        let err = resolve_sql_run(args(&[file.to_str().unwrap()]), no_env).unwrap_err();
        assert_eq!(err, SqlRunError::NoConnectionString);
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn positional_connection_string_wins_over_env() {
        let tmp = tempfile::tempdir().unwrap();
        let file = sql_file(tmp.path());
        let env = |key: &str| match key {
            "DATABASE_URL" => Some("postgres://env/db".to_string()),
            _ => None,
        };
        let run =
            resolve_sql_run(args(&[file.to_str().unwrap(), "postgres://arg/db"]), env).unwrap();
        assert_eq!(run.conn, "postgres://arg/db");
        assert_eq!(run.file, file);
    }

    #[test]
    fn database_url_is_preferred_over_pg_connection() {
        let tmp = tempfile::tempdir().unwrap();
        let file = sql_file(tmp.path());
        let env = |key: &str| match key {
            "DATABASE_URL" => Some("postgres://primary/db".to_string()),
            "PG_CONNECTION" => Some("postgres://fallback/db".to_string()),
            _ => None,
        };
        let run = resolve_sql_run(args(&[file.to_str().unwrap()]), env).unwrap();
        assert_eq!(run.conn, "postgres://primary/db");
    }

    #[test]
    fn pg_connection_is_the_last_fallback() {
        let tmp = tempfile::tempdir().unwrap();
        let file = sql_file(tmp.path());
        let env = |key: &str| match key {
            "PG_CONNECTION" => Some("postgres://fallback/db".to_string()),
            _ => None,
        };
        let run = resolve_sql_run(args(&[file.to_str().unwrap()]), env).unwrap();
        assert_eq!(run.conn, "postgres://fallback/db");
    }
}
