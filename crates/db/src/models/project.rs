//! Project entity model and DTOs.

use draftbase_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::chapter::Chapter;
use crate::models::note::Note;
use crate::models::reference::Reference;

/// A project row from the `projects` table.
///
/// `code` is the stable cross-environment identifier; `id` is local to one
/// database and never compared across environments.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Project {
    pub id: DbId,
    pub code: String,
    pub title: String,
    pub creator_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub code: String,
    pub title: String,
    pub creator_id: DbId,
}

/// All child collections of one project, each ordered by
/// (`seq` NULLS LAST, `code`).
#[derive(Debug, Clone, Serialize)]
pub struct ProjectEntries {
    pub chapters: Vec<Chapter>,
    pub notes: Vec<Note>,
    pub refs: Vec<Reference>,
}
