//! Per-run scratch area for captured command output
//!
//! The scratch directory lives under the build tree and holds one log file
//! per labelled command invocation. It is cleared and recreated at the start
//! of each run, and deliberately left in place afterwards so tool output can
//! be inspected post-mortem, including after a failed run.

use std::path::{Path, PathBuf};

use crate::config::defaults::SCRATCH_DIR;
use crate::error::FilesystemError;
use crate::infra::filesystem;

/// Handle to the run-scoped scratch directory
#[derive(Debug, Clone)]
pub struct ScratchArea {
    dir: PathBuf,
}

impl ScratchArea {
    /// Clear and recreate the scratch directory under the build tree
    pub fn prepare(build_dir: &Path) -> Result<Self, FilesystemError> {
        let dir = build_dir.join(SCRATCH_DIR);
        filesystem::recreate_dir(&dir)?;
        Ok(Self { dir })
    }

    /// Path of the scratch directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Log file path for a labelled command
    pub fn log_file(&self, label: &str) -> PathBuf {
        self.dir.join(format!("{label}.log"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_prepare_clears_previous_run() {
        let tmp = TempDir::new().expect("Failed to create temp directory");
        let build_dir = tmp.path();

        let scratch = ScratchArea::prepare(build_dir).unwrap();
        std::fs::write(scratch.log_file("jdeps-app"), "stale output").unwrap();

        let scratch = ScratchArea::prepare(build_dir).unwrap();
        assert!(scratch.dir().is_dir());
        assert!(!scratch.log_file("jdeps-app").exists());
    }

    #[test]
    fn test_log_file_name() {
        let tmp = TempDir::new().expect("Failed to create temp directory");
        let scratch = ScratchArea::prepare(tmp.path()).unwrap();
        assert_eq!(
            scratch.log_file("list-modules").file_name().unwrap(),
            "list-modules.log"
        );
    }
}
