//! Manifest (jrelink.toml) parsing
//!
//! The manifest is the optional per-project configuration file. Every field
//! has a default, so a project with conventional layout (jars in
//! `build/libs`, image at `build/app`) needs no manifest at all. CLI flags
//! override manifest values field by field.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::config::defaults::MANIFEST_FILE;
use crate::error::ConfigError;

/// The project manifest (jrelink.toml)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Build directory, relative to the project directory
    #[serde(default)]
    pub build_dir: Option<PathBuf>,

    /// JDK / module source locations
    #[serde(default)]
    pub runtime: RuntimeSection,

    /// Runtime image settings
    #[serde(default)]
    pub image: ImageSection,

    /// Application launcher settings
    #[serde(default)]
    pub app: AppSection,
}

/// `[runtime]` section: where the JDK tools and platform modules live
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RuntimeSection {
    /// JDK home holding bin/java, bin/jdeps, bin/jlink
    pub java_home: Option<PathBuf>,

    /// Home of the platform module files (defaults to java_home)
    pub modules_home: Option<PathBuf>,
}

/// `[image]` section: what jlink produces
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ImageSection {
    /// Output directory, relative to the build directory
    pub output: Option<PathBuf>,

    /// Link every platform module instead of resolving per archive
    #[serde(default)]
    pub all_modules: bool,
}

/// `[app]` section: archives and launcher
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AppSection {
    /// Input archive locations, relative to the build directory
    pub libs: Option<Vec<PathBuf>>,

    /// File name of the executable jar among the inputs
    pub executable_jar: Option<String>,

    /// Main class started by the launcher scripts
    pub main_class: Option<String>,

    /// Extra JVM arguments placed before -jar
    pub jvm_args: Option<String>,

    /// Application arguments placed after the main class
    pub app_args: Option<String>,

    /// Launcher script location, relative to the image root
    pub script: Option<String>,

    /// Resolve modules of the executable jar only
    #[serde(default)]
    pub fat_jar: bool,
}

impl Manifest {
    /// Parse a manifest from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::ManifestParse { source })
    }

    /// Load the manifest from a project directory, or defaults when absent
    pub fn load(project_dir: &Path) -> Result<Self, ConfigError> {
        let path = project_dir.join(MANIFEST_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::ManifestRead {
            path: path.clone(),
            error: e.to_string(),
        })?;
        Self::from_toml(&content)
    }
}
