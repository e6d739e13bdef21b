//! SQL file runner.
//!
//! Usage: `run_sql <file.sql> [connection-string]`
//!
//! The connection string comes from the second positional argument, else
//! `DATABASE_URL`, else `PG_CONNECTION`. The whole file runs inside one
//! transaction; any statement failure rolls everything back.
//!
//! Exit codes: `0` success, `1` connection or execution error, `2` missing
//! file argument, `3` file not found, `4` no connection string (no
//! connection is attempted).

use std::process::exit;

use draftbase_cli::{sql_exit, SqlRunError};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    draftbase_cli::init_tracing("run_sql=info");
    exit(run().await);
}

async fn run() -> i32 {
    let resolved =
        draftbase_cli::resolve_sql_run(std::env::args().skip(1), |key| std::env::var(key).ok());
    let run = match resolved {
        Ok(run) => run,
        Err(e) => {
            match &e {
                SqlRunError::MissingFileArg => {
                    eprintln!("usage: run_sql <file.sql> [connection-string]");
                }
                SqlRunError::FileNotFound(path) => {
                    tracing::error!(file = %path.display(), "SQL file not found");
                }
                SqlRunError::NoConnectionString => {
                    tracing::error!(
                        "no connection string: pass it as the second argument or set DATABASE_URL/PG_CONNECTION"
                    );
                }
            }
            return e.exit_code();
        }
    };

    let sql = match std::fs::read_to_string(&run.file) {
        Ok(sql) => sql,
        Err(e) => {
            tracing::error!(file = %run.file.display(), error = %e, "failed to read SQL file");
            return sql_exit::EXECUTION_FAILED;
        }
    };

    let pool = match draftbase_db::create_pool(&run.conn).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!(error = %e, "connection failed");
            return sql_exit::EXECUTION_FAILED;
        }
    };

    match draftbase_cli::apply_sql(&pool, &sql).await {
        Ok(()) => {
            tracing::info!(file = %run.file.display(), "SQL file applied");
            sql_exit::OK
        }
        Err(e) => {
            tracing::error!(error = %e, "statement failed, rolled back");
            sql_exit::EXECUTION_FAILED
        }
    }
}
