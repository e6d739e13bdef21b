//! Repository for the `notes` table.

use draftbase_core::types::DbId;
use sqlx::PgPool;

use crate::models::note::{CreateNote, Note};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, code, project_id, creator_id, seq, title, content, \
                       tags, category, pinned, created_at, updated_at";

pub struct NoteRepo;

impl NoteRepo {
    /// Insert a new note, returning the created row.
    ///
    /// `pinned` defaults to false when omitted.
    pub async fn create(pool: &PgPool, input: &CreateNote) -> Result<Note, sqlx::Error> {
        let query = format!(
            "INSERT INTO notes
                 (code, project_id, creator_id, seq, title, content, tags,
                  category, pinned)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, COALESCE($9, false))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(&input.code)
            .bind(input.project_id)
            .bind(input.creator_id)
            .bind(input.seq)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.tags)
            .bind(&input.category)
            .bind(input.pinned)
            .fetch_one(pool)
            .await
    }

    /// List all notes of a project in (`seq` NULLS LAST, `code`) order.
    pub async fn list_for_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Note>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM notes
             WHERE project_id = $1
             ORDER BY seq NULLS LAST, code"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }
}
