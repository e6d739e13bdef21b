//! Harness: fetch one project's metadata and entries, print them as JSON.
//!
//! Usage: `project_info [code]` — defaults to the sample project code.
//! Exit codes: `0` success, `2` error.

use anyhow::Context;
use draftbase_db::repositories::ProjectRepo;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    draftbase_cli::init_tracing("project_info=info");
    if let Err(e) = run().await {
        tracing::error!(error = ?e, "project_info failed");
        std::process::exit(2);
    }
}

async fn run() -> anyhow::Result<()> {
    let code = std::env::args()
        .nth(1)
        .unwrap_or_else(|| draftbase_cli::SAMPLE_PROJECT_CODE.to_string());
    let pool = draftbase_cli::connect().await?;

    let project = ProjectRepo::find_by_code(&pool, &code)
        .await?
        .with_context(|| format!("project {code} not found"))?;
    let entries = ProjectRepo::entries(&pool, &code)
        .await?
        .with_context(|| format!("project {code} not found"))?;

    let out = serde_json::json!({
        "project": project,
        "entries": entries,
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
