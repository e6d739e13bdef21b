//! Explicit load sessions.
//!
//! One [`LoadSession`] is the result of parsing one local project directory.
//! It owns its column-oriented snapshot; nothing is process-global, so any
//! number of sessions can coexist and a later load never invalidates an
//! earlier one.

use std::path::Path;

use draftbase_db::models::{Chapter, Creator, Note, Project, Reference};

use crate::columns::{ChapterColumns, NoteColumns, RefColumns};
use crate::error::FormatError;
use crate::local::{read_project_dir, LocalProject};
use crate::staging::StagedProject;

#[derive(Debug, Clone)]
pub struct LoadSession {
    project: Project,
    creator: Creator,
    chapters: ChapterColumns,
    notes: NoteColumns,
    refs: RefColumns,
}

impl LoadSession {
    /// Parse the project directory at `path` into a new session.
    pub fn load(path: &Path) -> Result<Self, FormatError> {
        Ok(Self::from_local(read_project_dir(path)?))
    }

    /// Build a session from an already materialized local project.
    pub fn from_local(local: LocalProject) -> Self {
        Self {
            project: local.project,
            creator: local.creator,
            chapters: ChapterColumns::from_rows(local.chapters),
            notes: NoteColumns::from_rows(local.notes),
            refs: RefColumns::from_rows(local.refs),
        }
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn creator(&self) -> &Creator {
        &self.creator
    }

    pub fn chapter_cols(&self) -> &ChapterColumns {
        &self.chapters
    }

    pub fn note_cols(&self) -> &NoteColumns {
        &self.notes
    }

    pub fn ref_cols(&self) -> &RefColumns {
        &self.refs
    }

    /// Chapter cursor: yields chapters one at a time until exhausted. Each
    /// call starts a fresh pass over the session's snapshot.
    pub fn chapters(&self) -> impl Iterator<Item = Chapter> + '_ {
        self.chapters.iter()
    }

    /// Row-oriented view of the chapter snapshot.
    pub fn chapter_rows(&self) -> Vec<Chapter> {
        self.chapters.to_rows()
    }

    /// Row-oriented view of the note snapshot.
    pub fn note_rows(&self) -> Vec<Note> {
        self.notes.to_rows()
    }

    /// Row-oriented view of the reference snapshot.
    pub fn ref_rows(&self) -> Vec<Reference> {
        self.refs.to_rows()
    }

    /// Snapshot in the staging-file shape.
    pub fn to_staged(&self) -> StagedProject {
        StagedProject {
            project: self.project.clone(),
            creator: self.creator.clone(),
            chapters: self.chapter_rows(),
            notes: self.note_rows(),
            refs: self.ref_rows(),
        }
    }
}
