//! Input archive discovery
//!
//! Builds the set of jars participating in a run from the configured libs
//! locations. A location that is a regular file is taken as-is; a directory
//! is expanded exactly one level (files only, no recursion into
//! subdirectories). The result is sorted and deduplicated so downstream
//! steps see a deterministic order.

use std::path::PathBuf;

use walkdir::WalkDir;

use crate::error::FilesystemError;

/// The input archives discovered for one run
#[derive(Debug, Clone, Default)]
pub struct ArchiveSet {
    files: Vec<PathBuf>,
}

impl ArchiveSet {
    /// Discover archives from the configured locations
    pub fn discover(locations: &[PathBuf]) -> Result<Self, FilesystemError> {
        let mut files = Vec::new();
        for location in locations {
            if location.is_file() {
                files.push(location.clone());
            } else if location.is_dir() {
                for entry in WalkDir::new(location).min_depth(1).max_depth(1) {
                    let entry = entry.map_err(|e| FilesystemError::ListDir {
                        path: location.clone(),
                        error: e.to_string(),
                    })?;
                    if entry.file_type().is_file() {
                        files.push(entry.into_path());
                    }
                }
            }
            // Anything else (absent, special file) contributes nothing.
        }
        files.sort();
        files.dedup();
        Ok(Self { files })
    }

    /// The discovered archive files, in deterministic order
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Find an archive by its file name
    pub fn find_by_name(&self, name: &str) -> Option<&PathBuf> {
        self.files
            .iter()
            .find(|p| p.file_name().is_some_and(|f| f == name))
    }
}
