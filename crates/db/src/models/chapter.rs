//! Chapter entity model and DTOs.

use draftbase_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A chapter row from the `chapters` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Chapter {
    pub id: DbId,
    pub code: String,
    pub project_id: DbId,
    pub creator_id: DbId,
    pub seq: Option<i32>,
    pub title: String,
    pub content: Option<String>,
    /// Free-form workflow status, e.g. "draft", "revised", "final".
    pub status: String,
    pub summary: Option<String>,
    pub tags: Vec<String>,
    pub word_goal: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new chapter.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateChapter {
    pub code: String,
    pub project_id: DbId,
    pub creator_id: DbId,
    pub seq: Option<i32>,
    pub title: String,
    pub content: Option<String>,
    /// Defaults to "draft" if omitted.
    pub status: Option<String>,
    pub summary: Option<String>,
    pub tags: Vec<String>,
    /// Defaults to 0 if omitted.
    pub word_goal: Option<i32>,
}
