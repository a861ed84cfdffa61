//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod build;
pub mod clean;
pub mod doctor;

use std::path::PathBuf;

use anyhow::Result;
use clap::Subcommand;

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve modules, link the runtime image, and assemble the launcher
    Build {
        /// Build directory (default: ./build)
        #[arg(long)]
        build_dir: Option<PathBuf>,

        /// JDK home holding bin/java, bin/jdeps, bin/jlink
        #[arg(long)]
        java_home: Option<PathBuf>,

        /// Home of the platform module files (default: java home)
        #[arg(long)]
        modules_home: Option<PathBuf>,

        /// Output directory for the runtime image (default: <build>/app)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Input archive file or directory; repeatable (default: <build>/libs)
        #[arg(long = "lib")]
        libs: Vec<PathBuf>,

        /// File name of the executable jar among the inputs
        #[arg(long)]
        executable_jar: Option<String>,

        /// Main class the launcher scripts start
        #[arg(long)]
        main_class: Option<String>,

        /// Extra JVM arguments placed before -jar
        #[arg(long)]
        jvm_args: Option<String>,

        /// Application arguments placed after the main class
        #[arg(long)]
        app_args: Option<String>,

        /// Launcher script location relative to the image root (default: bin/app)
        #[arg(long)]
        script_location: Option<String>,

        /// Link every platform module instead of resolving per archive
        #[arg(long)]
        all_modules: bool,

        /// Resolve modules of the executable jar only
        #[arg(long)]
        fat_jar: bool,
    },

    /// Remove the runtime image and scratch logs
    Clean,

    /// Check that the JDK tools are available
    Doctor {
        /// JDK home to check instead of PATH
        #[arg(long)]
        java_home: Option<PathBuf>,
    },
}

impl Commands {
    /// Execute the command
    pub async fn run(self, verbose: bool) -> Result<()> {
        match self {
            Self::Build {
                build_dir,
                java_home,
                modules_home,
                output_dir,
                libs,
                executable_jar,
                main_class,
                jvm_args,
                app_args,
                script_location,
                all_modules,
                fat_jar,
            } => {
                let current_dir = std::env::current_dir()?;
                let overrides = crate::core::config::BuildOverrides {
                    build_dir,
                    java_home,
                    modules_home,
                    output_dir,
                    libs,
                    executable_jar,
                    main_class,
                    jvm_args,
                    app_args,
                    script_location,
                    all_modules,
                    fat_jar,
                    verbose,
                };
                build::execute(&current_dir, overrides).await
            }
            Self::Clean => {
                let current_dir = std::env::current_dir()?;
                clean::execute(&current_dir).await
            }
            Self::Doctor { java_home } => {
                let current_dir = std::env::current_dir()?;
                doctor::execute(&current_dir, java_home.as_deref()).await
            }
        }
    }
}
