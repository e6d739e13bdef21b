//! Repository for the `refs` table.
//!
//! The table is named `refs` because `references` is a reserved word in
//! PostgreSQL.

use draftbase_core::types::DbId;
use sqlx::PgPool;

use crate::models::reference::{CreateReference, Reference};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, code, project_id, creator_id, seq, title, tags, \
                       type, summary, link, content, created_at, updated_at";

pub struct ReferenceRepo;

impl ReferenceRepo {
    /// Insert a new reference, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateReference) -> Result<Reference, sqlx::Error> {
        let query = format!(
            "INSERT INTO refs
                 (code, project_id, creator_id, seq, title, tags, type,
                  summary, link, content)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Reference>(&query)
            .bind(&input.code)
            .bind(input.project_id)
            .bind(input.creator_id)
            .bind(input.seq)
            .bind(&input.title)
            .bind(&input.tags)
            .bind(&input.kind)
            .bind(&input.summary)
            .bind(&input.link)
            .bind(&input.content)
            .fetch_one(pool)
            .await
    }

    /// List all references of a project in (`seq` NULLS LAST, `code`) order.
    pub async fn list_for_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Reference>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM refs
             WHERE project_id = $1
             ORDER BY seq NULLS LAST, code"
        );
        sqlx::query_as::<_, Reference>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }
}
