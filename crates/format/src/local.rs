//! Local on-disk project layout.
//!
//! ```text
//! <project dir>/
//!   project.json          { "project": ..., "creator": ... }
//!   chapters/<code>.json
//!   notes/<code>.json
//!   references/<code>.json
//! ```
//!
//! Missing entity directories read as empty collections. Reading validates
//! the ownership invariant: every child row's `project_id` and `creator_id`
//! must match the manifest's project and creator.

use std::fs;
use std::path::{Path, PathBuf};

use draftbase_core::code::validate_code;
use draftbase_core::order::seq_code_order;
use draftbase_db::models::{Chapter, Creator, Note, Project, Reference, SyncEntity};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::FormatError;

pub const MANIFEST_FILE: &str = "project.json";
pub const CHAPTERS_DIR: &str = "chapters";
pub const NOTES_DIR: &str = "notes";
pub const REFERENCES_DIR: &str = "references";

/// The `project.json` manifest at the root of a project directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectManifest {
    pub project: Project,
    pub creator: Creator,
}

/// A fully materialized local project: manifest plus ordered children.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalProject {
    pub project: Project,
    pub creator: Creator,
    pub chapters: Vec<Chapter>,
    pub notes: Vec<Note>,
    pub refs: Vec<Reference>,
}

/// Parse a local project directory.
pub fn read_project_dir(path: &Path) -> Result<LocalProject, FormatError> {
    let manifest_path = path.join(MANIFEST_FILE);
    if !manifest_path.is_file() {
        return Err(FormatError::MissingManifest(manifest_path));
    }
    let manifest: ProjectManifest = read_json(&manifest_path)?;
    validate_code(&manifest.project.code)?;

    let mut chapters: Vec<Chapter> = read_entity_dir(&path.join(CHAPTERS_DIR))?;
    let mut notes: Vec<Note> = read_entity_dir(&path.join(NOTES_DIR))?;
    let mut refs: Vec<Reference> = read_entity_dir(&path.join(REFERENCES_DIR))?;

    for ch in &chapters {
        check_owned("chapter", &ch.code, ch.project_id, ch.creator_id, &manifest)?;
    }
    for n in &notes {
        check_owned("note", &n.code, n.project_id, n.creator_id, &manifest)?;
    }
    for r in &refs {
        check_owned("reference", &r.code, r.project_id, r.creator_id, &manifest)?;
    }

    chapters.sort_by(|a, b| seq_code_order(a.seq, &a.code, b.seq, &b.code));
    notes.sort_by(|a, b| seq_code_order(a.seq, &a.code, b.seq, &b.code));
    refs.sort_by(|a, b| seq_code_order(a.seq, &a.code, b.seq, &b.code));

    tracing::debug!(
        project = %manifest.project.code,
        chapters = chapters.len(),
        notes = notes.len(),
        refs = refs.len(),
        "parsed local project directory"
    );

    Ok(LocalProject {
        project: manifest.project,
        creator: manifest.creator,
        chapters,
        notes,
        refs,
    })
}

/// Materialize `local` as a project directory under `root`, named by the
/// project code. Returns the created directory path.
pub fn write_project_dir(root: &Path, local: &LocalProject) -> Result<PathBuf, FormatError> {
    validate_code(&local.project.code)?;
    let dir = root.join(&local.project.code);
    fs::create_dir_all(&dir).map_err(FormatError::io(&dir))?;

    let manifest = ProjectManifest {
        project: local.project.clone(),
        creator: local.creator.clone(),
    };
    write_json(&dir.join(MANIFEST_FILE), &manifest)?;

    write_entity_dir(&dir.join(CHAPTERS_DIR), &local.chapters)?;
    write_entity_dir(&dir.join(NOTES_DIR), &local.notes)?;
    write_entity_dir(&dir.join(REFERENCES_DIR), &local.refs)?;

    Ok(dir)
}

fn check_owned(
    entity: &'static str,
    code: &str,
    project_id: i64,
    creator_id: i64,
    manifest: &ProjectManifest,
) -> Result<(), FormatError> {
    validate_code(code)?;
    if project_id != manifest.project.id || creator_id != manifest.creator.id {
        return Err(FormatError::ForeignEntity {
            entity,
            code: code.to_string(),
        });
    }
    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, FormatError> {
    let bytes = fs::read(path).map_err(FormatError::io(path))?;
    serde_json::from_slice(&bytes).map_err(FormatError::json(path))
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), FormatError> {
    let mut bytes = serde_json::to_vec_pretty(value).map_err(FormatError::json(path))?;
    bytes.push(b'\n');
    fs::write(path, bytes).map_err(FormatError::io(path))
}

fn read_entity_dir<T: DeserializeOwned>(dir: &Path) -> Result<Vec<T>, FormatError> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut out = Vec::new();
    let entries = fs::read_dir(dir).map_err(FormatError::io(dir))?;
    for entry in entries {
        let entry = entry.map_err(FormatError::io(dir))?;
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) == Some("json") {
            out.push(read_json(&path)?);
        }
    }
    Ok(out)
}

fn write_entity_dir<T: Serialize + SyncEntity>(dir: &Path, rows: &[T]) -> Result<(), FormatError> {
    // Codes become file names; a malformed one could escape the entity
    // directory. Same rule as the read path.
    for row in rows {
        validate_code(row.code())?;
    }
    fs::create_dir_all(dir).map_err(FormatError::io(dir))?;
    for row in rows {
        write_json(&dir.join(format!("{}.json", row.code())), row)?;
    }
    Ok(())
}
