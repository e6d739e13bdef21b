//! Harness: translate a staged database snapshot into a local folder.
//!
//! Usage: `translate_db [staging-file] [out-root]` — defaults to
//! `temporary.json` in the working directory and the working directory
//! itself.
//! Exit codes: `0` success, `2` error.

use std::path::PathBuf;

use draftbase_format::{translate_db_to_local, STAGING_FILE};

fn main() {
    dotenvy::dotenv().ok();
    draftbase_cli::init_tracing("translate_db=info");
    if let Err(e) = run() {
        tracing::error!(error = ?e, "translate_db failed");
        std::process::exit(2);
    }
}

fn run() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let staging_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(STAGING_FILE));
    let out_root = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    let dir = translate_db_to_local(&staging_path, &out_root)?;
    println!(
        "{}",
        serde_json::to_string_pretty(&serde_json::json!({ "path": dir }))?
    );
    Ok(())
}
