//! Reference entity model and DTOs.
//!
//! Field names follow the current schema revision: the column and JSON key
//! for the reference kind is `type` (a Rust keyword, so the field is `kind`)
//! and the source link column is `link`.

use draftbase_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A reference row from the `refs` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Reference {
    pub id: DbId,
    pub code: String,
    pub project_id: DbId,
    pub creator_id: DbId,
    pub seq: Option<i32>,
    pub title: String,
    pub tags: Vec<String>,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub summary: Option<String>,
    pub link: Option<String>,
    pub content: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new reference.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateReference {
    pub code: String,
    pub project_id: DbId,
    pub creator_id: DbId,
    pub seq: Option<i32>,
    pub title: String,
    pub tags: Vec<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub summary: Option<String>,
    pub link: Option<String>,
    pub content: Option<String>,
}
