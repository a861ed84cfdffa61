//! Infrastructure layer
//!
//! Child process execution, filesystem helpers, and the per-run scratch
//! area. No pipeline logic lives here - that belongs in [`crate::core`].

pub mod command;
pub mod filesystem;
pub mod scratch;
