//! Core pipeline logic
//!
//! Everything between "a directory of jars" and "a runnable application
//! tree": archive discovery, platform-module resolution, the jlink
//! invocation, launcher assembly, and the coordinator that sequences them.

pub mod archives;
pub mod assemble;
pub mod config;
pub mod doctor;
pub mod image;
pub mod manifest;
pub mod modules;
pub mod pipeline;
pub mod resolver;
