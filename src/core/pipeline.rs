//! Pipeline coordinator
//!
//! Sequences one run: discover archives, resolve the platform module
//! closure, link the runtime image, assemble the launcher. Strictly
//! sequential with no retries; the first failure aborts the remaining
//! steps and propagates unchanged.
//!
//! Concurrent runs against the same output directory are not supported -
//! the image build deletes and recreates that directory, so two runs would
//! race destructively. One invocation per output directory at a time.

use std::path::PathBuf;

use crate::error::JrelinkError;
use crate::infra::command::CommandRunner;
use crate::infra::filesystem;
use crate::infra::scratch::ScratchArea;

use super::archives::ArchiveSet;
use super::assemble::{self, LauncherScripts};
use super::config::BuildConfig;
use super::image;
use super::resolver::ModuleResolver;

/// What one pipeline run produced
#[derive(Debug)]
pub struct PipelineSummary {
    /// Resolved platform modules, in the order handed to jlink
    pub modules: Vec<String>,
    /// Number of input archives discovered
    pub archives: usize,
    /// Whether a runtime image was linked (false when no modules resolved)
    pub image_built: bool,
    /// Launcher scripts, when a main class was configured
    pub scripts: Option<LauncherScripts>,
    /// The configured output directory
    pub output_dir: PathBuf,
}

/// Coordinates one build run
pub struct Pipeline {
    config: BuildConfig,
    runner: CommandRunner,
}

impl Pipeline {
    /// Prepare a run: clears the scratch area under the build directory
    pub fn new(config: BuildConfig) -> Result<Self, JrelinkError> {
        let scratch = ScratchArea::prepare(&config.build_dir)?;
        let runner = CommandRunner::new(scratch, config.verbose);
        Ok(Self { config, runner })
    }

    /// Run the pipeline: Resolve, Build, Assemble
    pub async fn run(&self) -> Result<PipelineSummary, JrelinkError> {
        // Conventional layout materializes on first use.
        for location in &self.config.libs {
            if !location.exists() {
                filesystem::create_dir_all(location)?;
            }
        }

        let archives = ArchiveSet::discover(&self.config.libs)?;
        tracing::info!("Discovered {} input archive(s)", archives.len());

        // Validate executable selection up front so a misconfigured launcher
        // fails before any destructive image step runs. An empty archive set
        // is left to the resolver, which turns it into a clean no-op.
        if self.config.main_class.is_some() && !archives.is_empty() {
            assemble::select_executable(&archives, self.config.executable_jar.as_deref())?;
        }

        let resolver = ModuleResolver::new(&self.config, &self.runner);
        let modules = resolver.resolve(&archives).await?;

        if modules.is_empty() {
            tracing::warn!(
                "No platform module dependencies detected; skipping image build"
            );
            return Ok(PipelineSummary {
                modules: Vec::new(),
                archives: archives.len(),
                image_built: false,
                scripts: None,
                output_dir: self.config.output_dir.clone(),
            });
        }
        tracing::info!("Resolved {} platform module(s)", modules.len());

        image::build_image(&self.config, &self.runner, &modules).await?;

        let scripts = if self.config.main_class.is_some() {
            Some(assemble::assemble(&self.config, &archives)?)
        } else {
            None
        };

        Ok(PipelineSummary {
            modules: modules.into_iter().collect(),
            archives: archives.len(),
            image_built: true,
            scripts,
            output_dir: self.config.output_dir.clone(),
        })
    }
}
