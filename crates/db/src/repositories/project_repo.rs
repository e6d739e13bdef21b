//! Repository for the `projects` table.

use sqlx::PgPool;

use crate::models::project::{CreateProject, Project, ProjectEntries};
use crate::repositories::{ChapterRepo, NoteRepo, ReferenceRepo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, code, title, creator_id, created_at, updated_at";

pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (code, title, creator_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.code)
            .bind(&input.title)
            .bind(input.creator_id)
            .fetch_one(pool)
            .await
    }

    /// Fetch project metadata by its stable code.
    pub async fn find_by_code(pool: &PgPool, code: &str) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE code = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(code)
            .fetch_optional(pool)
            .await
    }

    /// List all projects ordered by code.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY code");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// Fetch all child collections for the project with the given code.
    ///
    /// Returns `None` when no such project exists; collections come back in
    /// (`seq` NULLS LAST, `code`) order.
    pub async fn entries(
        pool: &PgPool,
        code: &str,
    ) -> Result<Option<ProjectEntries>, sqlx::Error> {
        let Some(project) = Self::find_by_code(pool, code).await? else {
            return Ok(None);
        };
        let chapters = ChapterRepo::list_for_project(pool, project.id).await?;
        let notes = NoteRepo::list_for_project(pool, project.id).await?;
        let refs = ReferenceRepo::list_for_project(pool, project.id).await?;
        Ok(Some(ProjectEntries {
            chapters,
            notes,
            refs,
        }))
    }
}
