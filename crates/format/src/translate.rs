//! Database-snapshot to local-format translation.

use std::path::{Path, PathBuf};

use crate::error::FormatError;
use crate::local::{write_project_dir, LocalProject};
use crate::staging::read_staging;

/// Convert a previously staged database snapshot into the local project
/// representation under `out_root`. Returns the created project directory.
pub fn translate_db_to_local(staging_path: &Path, out_root: &Path) -> Result<PathBuf, FormatError> {
    let staged = read_staging(staging_path)?;
    let local = LocalProject {
        project: staged.project,
        creator: staged.creator,
        chapters: staged.chapters,
        notes: staged.notes,
        refs: staged.refs,
    };
    let dir = write_project_dir(out_root, &local)?;
    tracing::info!(
        staging = %staging_path.display(),
        dir = %dir.display(),
        "translated staged snapshot to local format"
    );
    Ok(dir)
}
