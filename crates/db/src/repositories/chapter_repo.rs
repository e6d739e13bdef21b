//! Repository for the `chapters` table.

use draftbase_core::types::DbId;
use sqlx::PgPool;

use crate::models::chapter::{Chapter, CreateChapter};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, code, project_id, creator_id, seq, title, content, \
                       status, summary, tags, word_goal, created_at, updated_at";

pub struct ChapterRepo;

impl ChapterRepo {
    /// Insert a new chapter, returning the created row.
    ///
    /// `status` defaults to "draft" and `word_goal` to 0 when omitted.
    pub async fn create(pool: &PgPool, input: &CreateChapter) -> Result<Chapter, sqlx::Error> {
        let query = format!(
            "INSERT INTO chapters
                 (code, project_id, creator_id, seq, title, content, status,
                  summary, tags, word_goal)
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, 'draft'), $8, $9,
                     COALESCE($10, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Chapter>(&query)
            .bind(&input.code)
            .bind(input.project_id)
            .bind(input.creator_id)
            .bind(input.seq)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.status)
            .bind(&input.summary)
            .bind(&input.tags)
            .bind(input.word_goal)
            .fetch_one(pool)
            .await
    }

    /// List all chapters of a project in (`seq` NULLS LAST, `code`) order.
    pub async fn list_for_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Chapter>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM chapters
             WHERE project_id = $1
             ORDER BY seq NULLS LAST, code"
        );
        sqlx::query_as::<_, Chapter>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }
}
