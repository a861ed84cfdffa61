//! Runtime image linking
//!
//! Drives `jlink` to produce the trimmed runtime tree. The output directory
//! is destroyed and recreated by the linker on every run; stale content is
//! never merged. A failed link may leave a partially written tree behind -
//! there is no rollback.

use crate::config::defaults::{JLINK_COMPRESS_LEVEL, MODULE_PATH_EXTRA};
use crate::error::JrelinkError;
use crate::infra::command::CommandRunner;
use crate::infra::filesystem;

use super::config::BuildConfig;
use super::modules::{self, ModuleSet};

/// Link the runtime image for a non-empty module set
///
/// The caller skips this step entirely when no modules were resolved.
pub async fn build_image(
    config: &BuildConfig,
    runner: &CommandRunner,
    modules: &ModuleSet,
) -> Result<(), JrelinkError> {
    debug_assert!(!modules.is_empty());

    // Destructive by contract: whatever sits at the output path goes away.
    filesystem::remove_dir_all(&config.output_dir)?;

    let module_path = format!("{}:{MODULE_PATH_EXTRA}", config.jmods_dir().display());
    let args = vec![
        "--module-path".to_string(),
        module_path,
        "--add-modules".to_string(),
        modules::join_modules(modules),
        "--output".to_string(),
        config.output_dir.display().to_string(),
        "--no-header-files".to_string(),
        "--no-man-pages".to_string(),
        format!("--compress={JLINK_COMPRESS_LEVEL}"),
    ];

    tracing::info!(
        "Linking runtime image with {} module(s) into {}",
        modules.len(),
        config.output_dir.display()
    );
    runner
        .run(Some("jlink"), &config.tool("jlink"), &args)
        .await?;
    Ok(())
}
