//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` + `Deserialize` entity struct matching the
//!   database row (also the on-disk JSON shape in the local project layout)
//! - A `Deserialize` create DTO for inserts (seeding and tests)

pub mod changes;
pub mod chapter;
pub mod creator;
pub mod note;
pub mod project;
pub mod reference;

pub use changes::{EntityChanges, ProjectChanges, SyncEntity};
pub use chapter::{Chapter, CreateChapter};
pub use creator::{CreateCreator, Creator};
pub use note::{CreateNote, Note};
pub use project::{CreateProject, Project, ProjectEntries};
pub use reference::{CreateReference, Reference};
