//! Harness: materialize every database project as a local folder.
//!
//! Usage: `full_load [out-root]` — defaults to `./projects`.
//! Exit codes: `0` success, `2` error.

use std::path::PathBuf;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    draftbase_cli::init_tracing("full_load=info");
    if let Err(e) = run().await {
        tracing::error!(error = ?e, "full_load failed");
        std::process::exit(2);
    }
}

async fn run() -> anyhow::Result<()> {
    let out_root = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("projects"));
    let pool = draftbase_cli::connect().await?;

    let report = draftbase_sync::full_load(&pool, &out_root).await?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
