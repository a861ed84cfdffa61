//! Build configuration
//!
//! Merges the manifest with CLI overrides into one immutable [`BuildConfig`]
//! and validates it once, at the pipeline boundary. All relative paths are
//! resolved here (libs and output against the build directory, the build
//! directory against the project directory); the rest of the pipeline only
//! ever sees resolved paths and `Option` fields that are `None` when unset.

use std::path::{Path, PathBuf};

use crate::config::defaults::{
    DEFAULT_BUILD_DIR, DEFAULT_LIBS_DIR, DEFAULT_OUTPUT_DIR, DEFAULT_SCRIPT_LOCATION, JMODS_DIR,
};
use crate::core::manifest::Manifest;
use crate::error::ConfigError;

/// CLI-level overrides applied on top of the manifest
#[derive(Debug, Clone, Default)]
pub struct BuildOverrides {
    pub build_dir: Option<PathBuf>,
    pub java_home: Option<PathBuf>,
    pub modules_home: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub libs: Vec<PathBuf>,
    pub executable_jar: Option<String>,
    pub main_class: Option<String>,
    pub jvm_args: Option<String>,
    pub app_args: Option<String>,
    pub script_location: Option<String>,
    pub all_modules: bool,
    pub fat_jar: bool,
    pub verbose: bool,
}

/// Immutable configuration for one pipeline run
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Build directory; scratch logs live beneath it
    pub build_dir: PathBuf,
    /// JDK home holding bin/java, bin/jdeps, bin/jlink
    pub java_home: PathBuf,
    /// Home of the platform module files
    pub modules_home: PathBuf,
    /// Runtime image output directory
    pub output_dir: PathBuf,
    /// Input archive locations (files, or directories expanded one level)
    pub libs: Vec<PathBuf>,
    /// File name of the executable jar among the inputs
    pub executable_jar: Option<String>,
    /// Main class started by the launcher scripts
    pub main_class: Option<String>,
    /// Extra JVM arguments placed before -jar
    pub jvm_args: Option<String>,
    /// Application arguments placed after the main class
    pub app_args: Option<String>,
    /// Launcher script location, relative to the image root
    pub script_location: String,
    /// Link every platform module instead of resolving per archive
    pub all_modules: bool,
    /// Resolve modules of the executable jar only
    pub fat_jar: bool,
    /// Echo every external command before running it
    pub verbose: bool,
}

impl BuildConfig {
    /// Merge manifest and overrides for a project directory and validate
    pub fn from_sources(
        project_dir: &Path,
        manifest: &Manifest,
        overrides: BuildOverrides,
    ) -> Result<Self, ConfigError> {
        let build_dir = resolve_against(
            project_dir,
            overrides
                .build_dir
                .or_else(|| manifest.build_dir.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_BUILD_DIR)),
        );

        let java_home = overrides
            .java_home
            .or_else(|| manifest.runtime.java_home.clone())
            .or_else(java_home_from_env)
            .ok_or(ConfigError::MissingJavaHome)?;
        let java_home = resolve_against(&build_dir, java_home);
        if !java_home.is_dir() {
            return Err(ConfigError::JavaHomeNotFound { path: java_home });
        }

        let modules_home = overrides
            .modules_home
            .or_else(|| manifest.runtime.modules_home.clone())
            .map_or_else(|| java_home.clone(), |p| resolve_against(&build_dir, p));

        let output_dir = resolve_against(
            &build_dir,
            overrides
                .output_dir
                .or_else(|| manifest.image.output.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
        );

        let libs = if overrides.libs.is_empty() {
            manifest
                .app
                .libs
                .clone()
                .unwrap_or_else(|| vec![PathBuf::from(DEFAULT_LIBS_DIR)])
        } else {
            overrides.libs
        };
        let libs = libs
            .into_iter()
            .map(|p| resolve_against(&build_dir, p))
            .collect();

        let script_location = overrides
            .script_location
            .or_else(|| manifest.app.script.clone())
            .unwrap_or_else(|| DEFAULT_SCRIPT_LOCATION.to_string());
        validate_script_location(&script_location)?;

        Ok(Self {
            build_dir,
            java_home,
            modules_home,
            output_dir,
            libs,
            executable_jar: overrides
                .executable_jar
                .or_else(|| manifest.app.executable_jar.clone()),
            main_class: overrides
                .main_class
                .or_else(|| manifest.app.main_class.clone()),
            jvm_args: overrides.jvm_args.or_else(|| manifest.app.jvm_args.clone()),
            app_args: overrides.app_args.or_else(|| manifest.app.app_args.clone()),
            script_location,
            all_modules: overrides.all_modules || manifest.image.all_modules,
            fat_jar: overrides.fat_jar || manifest.app.fat_jar,
            verbose: overrides.verbose,
        })
    }

    /// Path of a JDK tool under java_home/bin
    pub fn tool(&self, name: &str) -> PathBuf {
        self.java_home.join("bin").join(name)
    }

    /// Platform module directory under modules_home
    pub fn jmods_dir(&self) -> PathBuf {
        self.modules_home.join(JMODS_DIR)
    }
}

/// Resolve the build and output directories without requiring a JDK
///
/// Used by `jrelink clean`, which must locate the directories to delete even
/// when no JDK is configured on the machine.
pub fn resolve_dirs(project_dir: &Path, manifest: &Manifest) -> (PathBuf, PathBuf) {
    let build_dir = resolve_against(
        project_dir,
        manifest
            .build_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_BUILD_DIR)),
    );
    let output_dir = resolve_against(
        &build_dir,
        manifest
            .image
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
    );
    (build_dir, output_dir)
}

fn resolve_against(base: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

fn java_home_from_env() -> Option<PathBuf> {
    std::env::var_os("JAVA_HOME").map(PathBuf::from)
}

fn validate_script_location(location: &str) -> Result<(), ConfigError> {
    if location.is_empty() {
        return Err(ConfigError::EmptyScriptLocation);
    }
    let path = Path::new(location);
    let escapes = path
        .components()
        .any(|c| matches!(c, std::path::Component::ParentDir));
    if path.is_absolute() || escapes {
        return Err(ConfigError::InvalidScriptLocation {
            location: location.to_string(),
        });
    }
    Ok(())
}
