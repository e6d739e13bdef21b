//! Harness: stage a local project folder as the upload snapshot.
//!
//! Usage: `full_upload [project-dir] [staging-file]` — defaults to the
//! sample project folder and `temporary.json` in the working directory.
//! Exit codes: `0` success, `2` error.

use std::path::PathBuf;

use draftbase_format::STAGING_FILE;

fn main() {
    dotenvy::dotenv().ok();
    draftbase_cli::init_tracing("full_upload=info");
    if let Err(e) = run() {
        tracing::error!(error = ?e, "full_upload failed");
        std::process::exit(2);
    }
}

fn run() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let project_dir = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(draftbase_cli::SAMPLE_PROJECT_DIR));
    let staging_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(STAGING_FILE));

    let report = draftbase_sync::full_upload_to_staging(&project_dir, &staging_path)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
