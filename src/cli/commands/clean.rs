//! Clean command implementation
//!
//! Removes the runtime image output directory and the scratch/log area.
//! Deliberately does not require a JDK: only the manifest (if any) is
//! consulted to locate the directories.

use anyhow::{Context, Result};
use std::path::Path;

use crate::cli::output::{print_detail, print_success};
use crate::config::defaults::SCRATCH_DIR;
use crate::core::config::resolve_dirs;
use crate::core::manifest::Manifest;
use crate::infra::filesystem;

/// Execute the clean command
pub async fn execute(project_dir: &Path) -> Result<()> {
    let manifest = Manifest::load(project_dir).with_context(|| "Failed to load jrelink.toml")?;
    let (build_dir, output_dir) = resolve_dirs(project_dir, &manifest);
    let scratch_dir = build_dir.join(SCRATCH_DIR);

    let mut removed = Vec::new();
    for dir in [&output_dir, &scratch_dir] {
        if dir.exists() {
            filesystem::remove_dir_all(dir)?;
            removed.push(dir.display().to_string());
        }
    }

    if removed.is_empty() {
        print_success("Nothing to clean");
    } else {
        print_success("Cleaned:");
        for dir in removed {
            print_detail(&dir);
        }
    }
    Ok(())
}
