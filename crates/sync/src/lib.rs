//! Load/upload orchestration.
//!
//! `full_load` materializes every database-resident project as a local
//! folder; `full_upload_to_staging` serializes one local project to the
//! staging JSON file. The database-application half of upload is disabled;
//! staging is where the upload flow ends. `project_changes` computes the
//! reconciliation diff a future upload transaction would apply.

use std::path::{Path, PathBuf};

use draftbase_db::models::{EntityChanges, ProjectChanges};
use draftbase_db::repositories::{ChapterRepo, CreatorRepo, NoteRepo, ProjectRepo, ReferenceRepo};
use draftbase_format::local::{write_project_dir, LocalProject};
use draftbase_format::staging::{write_staging, StagedProject};
use draftbase_format::{FormatError, LoadSession};
use serde::Serialize;
use sqlx::PgPool;

#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("project {code} references a missing creator")]
    MissingCreator { code: String },

    #[error(transparent)]
    Db(#[from] sqlx::Error),

    #[error(transparent)]
    Format(#[from] FormatError),
}

/// Result of a full load: one created folder per database project.
#[derive(Debug, Clone, Serialize)]
pub struct LoadReport {
    pub created: Vec<PathBuf>,
}

/// Result of staging an upload.
#[derive(Debug, Clone, Serialize)]
pub struct StagingReport {
    pub path: PathBuf,
}

/// Materialize every project in the database as a local folder under
/// `out_root`.
pub async fn full_load(pool: &PgPool, out_root: &Path) -> Result<LoadReport, SyncError> {
    let projects = ProjectRepo::list(pool).await?;
    let mut created = Vec::with_capacity(projects.len());

    for project in projects {
        let creator = CreatorRepo::find_by_id(pool, project.creator_id)
            .await?
            .ok_or_else(|| SyncError::MissingCreator {
                code: project.code.clone(),
            })?;
        let chapters = ChapterRepo::list_for_project(pool, project.id).await?;
        let notes = NoteRepo::list_for_project(pool, project.id).await?;
        let refs = ReferenceRepo::list_for_project(pool, project.id).await?;

        let local = LocalProject {
            project,
            creator,
            chapters,
            notes,
            refs,
        };
        let dir = write_project_dir(out_root, &local)?;
        tracing::info!(
            project = %local.project.code,
            path = %dir.display(),
            "materialized project folder"
        );
        created.push(dir);
    }

    Ok(LoadReport { created })
}

/// Load the project folder at `project_dir` and serialize its snapshot to
/// the staging file at `staging_path`.
pub fn full_upload_to_staging(
    project_dir: &Path,
    staging_path: &Path,
) -> Result<StagingReport, SyncError> {
    let session = LoadSession::load(project_dir)?;
    write_staging(staging_path, &session.to_staged())?;
    tracing::info!(
        project = %session.project().code,
        path = %staging_path.display(),
        "staged project snapshot"
    );
    Ok(StagingReport {
        path: staging_path.to_path_buf(),
    })
}

/// Reconciliation diff between a loaded local project and a staged database
/// snapshot: the changes an upload transaction would apply.
pub fn project_changes(local: &LoadSession, remote: &StagedProject) -> ProjectChanges {
    ProjectChanges {
        project: local.project().clone(),
        chapters: EntityChanges::between(&local.chapter_rows(), &remote.chapters),
        notes: EntityChanges::between(&local.note_rows(), &remote.notes),
        refs: EntityChanges::between(&local.ref_rows(), &remote.refs),
    }
}
