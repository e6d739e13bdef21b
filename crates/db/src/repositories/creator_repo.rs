//! Repository for the `creators` table.

use draftbase_core::types::DbId;
use sqlx::PgPool;

use crate::models::creator::{CreateCreator, Creator};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, code, name, email, created_at, updated_at";

pub struct CreatorRepo;

impl CreatorRepo {
    /// Insert a new creator, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCreator) -> Result<Creator, sqlx::Error> {
        let query = format!(
            "INSERT INTO creators (code, name, email)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Creator>(&query)
            .bind(&input.code)
            .bind(&input.name)
            .bind(&input.email)
            .fetch_one(pool)
            .await
    }

    /// Find a creator by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Creator>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM creators WHERE id = $1");
        sqlx::query_as::<_, Creator>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a creator by code.
    pub async fn find_by_code(pool: &PgPool, code: &str) -> Result<Option<Creator>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM creators WHERE code = $1");
        sqlx::query_as::<_, Creator>(&query)
            .bind(code)
            .fetch_optional(pool)
            .await
    }
}
