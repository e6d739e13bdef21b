//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that accept
//! `&PgPool` as the first argument. The sync read path only ever SELECTs;
//! `create` methods exist for seeding and tests.

pub mod chapter_repo;
pub mod creator_repo;
pub mod note_repo;
pub mod project_repo;
pub mod reference_repo;

pub use chapter_repo::ChapterRepo;
pub use creator_repo::CreatorRepo;
pub use note_repo::NoteRepo;
pub use project_repo::ProjectRepo;
pub use reference_repo::ReferenceRepo;
