//! Creator entity model and DTOs.

use draftbase_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A creator row from the `creators` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Creator {
    pub id: DbId,
    pub code: String,
    pub name: String,
    pub email: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new creator.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCreator {
    pub code: String,
    pub name: String,
    pub email: Option<String>,
}
