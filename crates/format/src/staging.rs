//! The staged database snapshot file.
//!
//! `full_upload` writes this file and `translate_db_to_local` reads it back;
//! the two sides share [`StagedProject`] as their schema contract.

use std::fs;
use std::path::Path;

use draftbase_db::models::{Chapter, Creator, Note, Project, Reference};
use serde::{Deserialize, Serialize};

use crate::error::FormatError;

/// Default staging file name, written to the working directory.
pub const STAGING_FILE: &str = "temporary.json";

/// One project's snapshot as staged on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StagedProject {
    pub project: Project,
    pub creator: Creator,
    pub chapters: Vec<Chapter>,
    pub notes: Vec<Note>,
    pub refs: Vec<Reference>,
}

/// Serialize `staged` to `path`.
pub fn write_staging(path: &Path, staged: &StagedProject) -> Result<(), FormatError> {
    let mut bytes = serde_json::to_vec_pretty(staged).map_err(FormatError::json(path))?;
    bytes.push(b'\n');
    fs::write(path, bytes).map_err(FormatError::io(path))
}

/// Read a staged snapshot back from `path`.
pub fn read_staging(path: &Path) -> Result<StagedProject, FormatError> {
    let bytes = fs::read(path).map_err(FormatError::io(path))?;
    serde_json::from_slice(&bytes).map_err(FormatError::json(path))
}
