//! Command-line interface module
//!
//! This module handles argument parsing and output formatting.
//! It contains no pipeline logic - that belongs in the [`crate::core`] module.

pub mod commands;
pub mod output;

use anyhow::Result;
use clap::Parser;

use commands::Commands;

/// jrelink - application-specific Java runtime image builder
///
/// Resolve the platform modules your jars need, link a trimmed runtime with
/// jlink, and assemble a self-contained application directory.
#[derive(Parser, Debug)]
#[command(name = "jrelink")]
#[command(author, version, about, long_about = None)]
#[command(long_version = concat!(
    env!("CARGO_PKG_VERSION"),
    " (commit ", env!("VERGEN_GIT_SHA"),
    ", built ", env!("VERGEN_BUILD_TIMESTAMP"),
    ", rustc ", env!("VERGEN_RUSTC_SEMVER"), ")"
))]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output (-v for info, -vv for debug); also echoes
    /// every external command before it runs
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format for scripting
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Execute the CLI command
    pub async fn run(self) -> Result<()> {
        if let Some(cmd) = self.command {
            cmd.run(self.verbose > 0).await
        } else {
            // No subcommand provided, show help
            use clap::CommandFactory;
            let mut cmd = Self::command();
            cmd.print_help()?;
            Ok(())
        }
    }
}
