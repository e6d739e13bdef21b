//! Upload-staging and reconciliation flow tests.

use draftbase_db::models::{Chapter, Creator, Note, Project, Reference};
use draftbase_format::local::{write_project_dir, LocalProject};
use draftbase_format::staging::read_staging;
use draftbase_format::LoadSession;
use draftbase_sync::{full_upload_to_staging, project_changes};

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

fn creator() -> Creator {
    Creator {
        id: 10,
        code: "author-1".to_string(),
        name: "A. Writer".to_string(),
        email: None,
        created_at: chrono::Utc::now(),
        updated_at: chrono::Utc::now(),
    }
}

fn project() -> Project {
    Project {
        id: 1,
        code: "SAMPLE-PROJECT".to_string(),
        title: "The Sample Project".to_string(),
        creator_id: 10,
        created_at: chrono::Utc::now(),
        updated_at: chrono::Utc::now(),
    }
}

fn chapter(code: &str, seq: Option<i32>, title: &str) -> Chapter {
    Chapter {
        id: 100,
        code: code.to_string(),
        project_id: 1,
        creator_id: 10,
        seq,
        title: title.to_string(),
        content: None,
        status: "draft".to_string(),
        summary: None,
        tags: vec![],
        word_goal: 0,
        created_at: chrono::Utc::now(),
        updated_at: chrono::Utc::now(),
    }
}

fn note(code: &str) -> Note {
    Note {
        id: 200,
        code: code.to_string(),
        project_id: 1,
        creator_id: 10,
        seq: None,
        title: format!("Note {code}"),
        content: None,
        tags: vec![],
        category: None,
        pinned: false,
        created_at: chrono::Utc::now(),
        updated_at: chrono::Utc::now(),
    }
}

fn reference(code: &str) -> Reference {
    Reference {
        id: 300,
        code: code.to_string(),
        project_id: 1,
        creator_id: 10,
        seq: None,
        title: format!("Reference {code}"),
        tags: vec![],
        kind: None,
        summary: None,
        link: None,
        content: None,
        created_at: chrono::Utc::now(),
        updated_at: chrono::Utc::now(),
    }
}

fn sample_local() -> LocalProject {
    LocalProject {
        project: project(),
        creator: creator(),
        chapters: vec![
            chapter("ch-01", Some(1), "One"),
            chapter("ch-02", Some(2), "Two"),
        ],
        notes: vec![note("n-01")],
        refs: vec![reference("r-01")],
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn upload_stages_the_full_snapshot() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = write_project_dir(tmp.path(), &sample_local()).unwrap();
    let staging = tmp.path().join("temporary.json");

    let report = full_upload_to_staging(&dir, &staging).unwrap();
    assert_eq!(report.path, staging);

    let staged = read_staging(&staging).unwrap();
    assert_eq!(staged.project.code, "SAMPLE-PROJECT");
    assert_eq!(staged.chapters.len(), 2);
    assert_eq!(staged.notes.len(), 1);
    assert_eq!(staged.refs.len(), 1);
}

#[test]
fn unchanged_project_yields_empty_changes() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = write_project_dir(tmp.path(), &sample_local()).unwrap();
    let staging = tmp.path().join("temporary.json");
    full_upload_to_staging(&dir, &staging).unwrap();

    let session = LoadSession::load(&dir).unwrap();
    let staged = read_staging(&staging).unwrap();
    let changes = project_changes(&session, &staged);
    assert!(changes.is_empty());
}

#[test]
fn local_edits_show_up_in_changes() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = write_project_dir(tmp.path(), &sample_local()).unwrap();
    let staging = tmp.path().join("temporary.json");
    full_upload_to_staging(&dir, &staging).unwrap();

    // Edit the local side after staging: retitle one chapter, add a note,
    // delete the reference.
    let mut edited = sample_local();
    edited.chapters[1] = chapter("ch-02", Some(2), "Two, revised");
    edited.notes.push(note("n-02"));
    edited.refs.clear();
    let edited_dir = write_project_dir(&tmp.path().join("edited"), &edited).unwrap();

    let session = LoadSession::load(&edited_dir).unwrap();
    let staged = read_staging(&staging).unwrap();
    let changes = project_changes(&session, &staged);

    assert!(!changes.is_empty());
    assert_eq!(changes.chapters.updated.len(), 1);
    assert_eq!(changes.chapters.updated[0].code, "ch-02");
    assert_eq!(changes.notes.added.len(), 1);
    assert_eq!(changes.notes.added[0].code, "n-02");
    assert_eq!(changes.refs.deleted, vec!["r-01".to_string()]);
}

#[sqlx::test(migrations = "../db/migrations")]
#[ignore = "requires a live PostgreSQL (DATABASE_URL)"]
async fn full_load_materializes_every_project(pool: sqlx::PgPool) {
    use draftbase_db::models::creator::CreateCreator;
    use draftbase_db::models::project::CreateProject;
    use draftbase_db::repositories::{CreatorRepo, ProjectRepo};

    let creator = CreatorRepo::create(
        &pool,
        &CreateCreator {
            code: "author-1".to_string(),
            name: "A. Writer".to_string(),
            email: None,
        },
    )
    .await
    .unwrap();
    for code in ["proj-a", "proj-b"] {
        ProjectRepo::create(
            &pool,
            &CreateProject {
                code: code.to_string(),
                title: format!("Project {code}"),
                creator_id: creator.id,
            },
        )
        .await
        .unwrap();
    }

    let tmp = tempfile::tempdir().unwrap();
    let report = draftbase_sync::full_load(&pool, tmp.path()).await.unwrap();
    assert_eq!(report.created.len(), 2);
    assert!(tmp.path().join("proj-a/project.json").is_file());
    assert!(tmp.path().join("proj-b/project.json").is_file());

    // A created folder loads back with counts matching the database entries.
    let session = LoadSession::load(&tmp.path().join("proj-a")).unwrap();
    let entries = ProjectRepo::entries(&pool, "proj-a").await.unwrap().unwrap();
    assert_eq!(session.chapter_cols().len(), entries.chapters.len());
    assert_eq!(session.note_cols().len(), entries.notes.len());
    assert_eq!(session.ref_cols().len(), entries.refs.len());
}
