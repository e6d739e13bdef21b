//! Note entity model and DTOs.

use draftbase_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A note row from the `notes` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Note {
    pub id: DbId,
    pub code: String,
    pub project_id: DbId,
    pub creator_id: DbId,
    pub seq: Option<i32>,
    pub title: String,
    pub content: Option<String>,
    pub tags: Vec<String>,
    pub category: Option<String>,
    pub pinned: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new note.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateNote {
    pub code: String,
    pub project_id: DbId,
    pub creator_id: DbId,
    pub seq: Option<i32>,
    pub title: String,
    pub content: Option<String>,
    pub tags: Vec<String>,
    pub category: Option<String>,
    /// Defaults to false if omitted.
    pub pinned: Option<bool>,
}
