//! Harness: load a local project folder and print its row-oriented views.
//!
//! Usage: `load_project [path]` — defaults to the sample project folder.
//! Exit codes: `0` success, `2` error.

use std::path::PathBuf;

use draftbase_format::LoadSession;

fn main() {
    dotenvy::dotenv().ok();
    draftbase_cli::init_tracing("load_project=info");
    if let Err(e) = run() {
        tracing::error!(error = ?e, "load_project failed");
        std::process::exit(2);
    }
}

fn run() -> anyhow::Result<()> {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(draftbase_cli::SAMPLE_PROJECT_DIR));
    let session = LoadSession::load(&path)?;

    let out = serde_json::json!({
        "project": session.project(),
        "creator": session.creator(),
        "chapters": session.chapter_rows(),
        "notes": session.note_rows(),
        "refs": session.ref_rows(),
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
