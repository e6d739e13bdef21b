//! File-sync utility: copies the app-data payload files into the per-user
//! workspace directory, creating it if missing, then tails the debug log.
//!
//! Exit codes: `0` success, `1` error.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context};

const PAYLOAD_FILES: [&str; 2] = ["config/settings.json", "config/keymap.json"];
const WORKSPACE_DIR: &str = "draftbase";
const DEBUG_LOG: &str = "debug.log";
const LOG_TAIL_LINES: usize = 40;

fn main() {
    draftbase_cli::init_tracing("sync_workspace=info");
    if let Err(e) = run() {
        tracing::error!(error = ?e, "sync_workspace failed");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let data = dirs::data_dir().context("no per-user data directory on this platform")?;
    let workspace = data.join(WORKSPACE_DIR);
    fs::create_dir_all(&workspace)
        .with_context(|| format!("creating {}", workspace.display()))?;

    for src in PAYLOAD_FILES {
        let from = Path::new(src);
        if !from.is_file() {
            bail!("payload file {src} not found (run from the app checkout root)");
        }
        let file_name = from.file_name().context("payload path has no file name")?;
        let to = workspace.join(file_name);
        fs::copy(from, &to).with_context(|| format!("copying {src} to {}", to.display()))?;
        tracing::info!(from = src, to = %to.display(), "synced");
    }

    let log = workspace.join(DEBUG_LOG);
    if log.is_file() {
        let contents =
            fs::read_to_string(&log).with_context(|| format!("reading {}", log.display()))?;
        let lines: Vec<&str> = contents.lines().collect();
        let start = lines.len().saturating_sub(LOG_TAIL_LINES);
        println!("--- {} ---", log.display());
        for line in &lines[start..] {
            println!("{line}");
        }
    }
    Ok(())
}
