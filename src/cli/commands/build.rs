//! Build command implementation
//!
//! Implements `jrelink build`: loads the manifest, merges CLI overrides,
//! and runs the resolve/link/assemble pipeline.

use anyhow::{Context, Result};
use std::path::Path;

use crate::cli::output::{create_spinner, is_json, is_quiet, print_detail, print_success, print_warning};
use crate::core::config::{BuildConfig, BuildOverrides};
use crate::core::manifest::Manifest;
use crate::core::pipeline::{Pipeline, PipelineSummary};

/// Execute the build command
pub async fn execute(project_dir: &Path, overrides: BuildOverrides) -> Result<()> {
    let manifest = Manifest::load(project_dir).with_context(|| "Failed to load jrelink.toml")?;
    let config = BuildConfig::from_sources(project_dir, &manifest, overrides)?;

    tracing::info!(
        "Building runtime image for archives in {}",
        config
            .libs
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );

    let pipeline = Pipeline::new(config)?;

    let spinner = if is_quiet() || is_json() {
        None
    } else {
        Some(create_spinner("Resolving modules and linking runtime..."))
    };
    let result = pipeline.run().await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    let summary = result?;

    report(&summary);
    Ok(())
}

fn report(summary: &PipelineSummary) {
    if is_json() {
        let payload = serde_json::json!({
            "status": "success",
            "archives": summary.archives,
            "modules": summary.modules,
            "image_built": summary.image_built,
            "output_dir": summary.output_dir,
            "launcher": summary.scripts.as_ref().map(|s| serde_json::json!({
                "posix": s.posix,
                "windows": s.windows,
                "executable_jar": s.executable_jar,
            })),
        });
        println!("{}", serde_json::to_string_pretty(&payload).unwrap_or_default());
        return;
    }

    if !summary.image_built {
        print_warning("No platform module dependencies detected; nothing to link");
        return;
    }

    print_success(&format!(
        "Runtime image with {} module(s) at {}",
        summary.modules.len(),
        summary.output_dir.display()
    ));
    match &summary.scripts {
        Some(scripts) => {
            print_detail(&format!("Launcher: {}", scripts.posix.display()));
            print_detail(&format!("Launcher: {}", scripts.windows.display()));
        }
        None => print_detail("No main class configured; launcher scripts skipped"),
    }
}
