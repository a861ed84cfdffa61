//! jrelink - application-specific Java runtime image builder
//!
//! This library provides the core functionality for building trimmed Java
//! runtime images: it resolves the platform modules a set of jars actually
//! needs, drives `jlink` to produce a minimal runtime, and assembles a
//! self-contained application directory with launcher scripts.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - The resolve/link/assemble pipeline
//! - [`infra`] - Infrastructure layer (child processes, filesystem, scratch area)
//! - [`config`] - Configuration defaults and constants
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;
