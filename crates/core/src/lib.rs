//! Shared substrate for the draftbase workspace: primitive type aliases,
//! the core error type, and the cross-layer ordering/identity rules.

pub mod code;
pub mod error;
pub mod order;
pub mod types;

pub use error::CoreError;
