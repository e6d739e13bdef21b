//! Format/translation layer: converts between the local on-disk project
//! representation, the in-memory column-oriented snapshot, and the staged
//! database snapshot.
//!
//! The original desktop app kept one process-wide "last loaded" snapshot
//! behind free functions. Here every load returns an explicit
//! [`LoadSession`] value instead, so loads can coexist and nothing is
//! implicitly shared.

pub mod columns;
pub mod error;
pub mod local;
pub mod session;
pub mod staging;
pub mod translate;

pub use error::FormatError;
pub use local::LocalProject;
pub use session::LoadSession;
pub use staging::{StagedProject, STAGING_FILE};
pub use translate::translate_db_to_local;
