//! Platform module resolution
//!
//! Computes the module closure for a run. In the default per-archive mode
//! every input jar is fed to `jdeps --list-deps` and the platform-module
//! lines are unioned; in all-modules mode a single `java --list-modules`
//! invocation yields the complete platform catalogue. Fat-jar mode narrows
//! the per-archive walk to the designated executable jar alone.

use std::path::{Path, PathBuf};

use crate::error::{AssemblyError, JrelinkError};
use crate::infra::command::CommandRunner;

use super::archives::ArchiveSet;
use super::config::BuildConfig;
use super::modules::{self, ModuleSet, PlatformModuleFilter};

/// Resolves the platform module closure for one run
pub struct ModuleResolver<'a> {
    config: &'a BuildConfig,
    runner: &'a CommandRunner,
    filter: PlatformModuleFilter,
}

impl<'a> ModuleResolver<'a> {
    pub fn new(config: &'a BuildConfig, runner: &'a CommandRunner) -> Self {
        Self {
            config,
            runner,
            filter: PlatformModuleFilter::new(),
        }
    }

    /// Resolve the module set for the given archives
    ///
    /// An empty result is legitimate: it means no platform-module
    /// dependencies were detected and the caller skips the image build.
    pub async fn resolve(&self, archives: &ArchiveSet) -> Result<ModuleSet, JrelinkError> {
        if self.config.all_modules {
            return self.all_platform_modules().await;
        }

        let candidates = self.candidate_archives(archives)?;
        let mut set = ModuleSet::new();
        for archive in candidates {
            let found = self.archive_modules(&archive).await?;
            tracing::debug!(
                "{}: {} platform module(s)",
                archive.display(),
                found.len()
            );
            set.extend(found);
        }
        Ok(set)
    }

    /// Archives participating in resolution
    ///
    /// Fat-jar mode considers only the designated executable, which must be
    /// present among the inputs; otherwise every discovered archive is
    /// analyzed.
    fn candidate_archives(&self, archives: &ArchiveSet) -> Result<Vec<PathBuf>, JrelinkError> {
        if self.config.fat_jar {
            if let Some(name) = self.config.executable_jar.as_deref() {
                let path = archives.find_by_name(name).cloned().ok_or_else(|| {
                    AssemblyError::ExecutableNotFound {
                        name: name.to_string(),
                        libs: render_libs(&self.config.libs),
                    }
                })?;
                return Ok(vec![path]);
            }
        }
        Ok(archives.files().to_vec())
    }

    /// Full platform catalogue via `java --list-modules`
    async fn all_platform_modules(&self) -> Result<ModuleSet, JrelinkError> {
        let args = vec![
            "--list-modules".to_string(),
            "--module-path".to_string(),
            self.config.jmods_dir().display().to_string(),
        ];
        let lines = self
            .runner
            .run(Some("list-modules"), &self.config.tool("java"), &args)
            .await?;
        Ok(lines.iter().map(|l| modules::normalize(l)).collect())
    }

    /// Platform modules one archive depends on, via `jdeps --list-deps`
    async fn archive_modules(&self, archive: &Path) -> Result<ModuleSet, JrelinkError> {
        let label = format!(
            "jdeps-{}",
            archive
                .file_stem()
                .map_or_else(|| "archive".to_string(), |s| s.to_string_lossy().to_string())
        );
        let args = vec![
            "--list-deps".to_string(),
            archive.display().to_string(),
        ];
        let lines = self
            .runner
            .run(Some(&label), &self.config.tool("jdeps"), &args)
            .await?;
        Ok(lines
            .iter()
            .filter(|l| self.filter.matches(l))
            .map(|l| modules::strip_qualifier(l))
            .collect())
    }
}

fn render_libs(libs: &[PathBuf]) -> String {
    libs.iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
