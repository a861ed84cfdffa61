//! Error types for jrelink
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration errors, reported once at the pipeline boundary
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No JDK home configured and JAVA_HOME unset
    #[error("No JDK home configured. Set java_home in jrelink.toml, pass --java-home, or export JAVA_HOME")]
    MissingJavaHome,

    /// JDK home does not exist
    #[error("JDK home does not exist: {path}")]
    JavaHomeNotFound { path: PathBuf },

    /// Launcher script location is empty
    #[error("Launcher script location must not be empty (e.g. \"bin/app\")")]
    EmptyScriptLocation,

    /// Assembly requested without a main class
    #[error("Missing main class name - needed to generate launcher scripts")]
    MissingMainClass,

    /// Launcher script location escapes the image root
    #[error("Launcher script location must be relative and must not contain '..': {location}")]
    InvalidScriptLocation { location: String },

    /// Manifest parse error
    #[error("Failed to parse jrelink.toml: {source}")]
    ManifestParse { source: toml::de::Error },

    /// Manifest read error
    #[error("Cannot read manifest at '{path}': {error}")]
    ManifestRead { path: PathBuf, error: String },
}

/// External command execution errors
#[derive(Error, Debug)]
pub enum CommandError {
    /// Command could not be started
    #[error("Failed to start command '{command}': {error}")]
    Spawn { command: String, error: String },

    /// Command exited with a non-zero status
    #[error("Command failed with exit code {code}: {command} (captured output under {log_dir})")]
    Failed {
        command: String,
        code: i32,
        log_dir: PathBuf,
    },

    /// Command did not finish within the timeout and was killed
    #[error("Command timed out after {timeout_secs}s and was killed: {command}")]
    TimedOut { command: String, timeout_secs: u64 },

    /// Captured output could not be read back
    #[error("Cannot read captured output at '{path}': {error}")]
    Capture { path: PathBuf, error: String },
}

/// Launcher assembly errors
#[derive(Error, Debug)]
pub enum AssemblyError {
    /// Named executable jar missing from the resolved archive set
    #[error("Executable jar '{name}' not found among input archives in {libs}")]
    ExecutableNotFound { name: String, libs: String },

    /// No executable jar named and the archive set is not a singleton
    #[error("Expected exactly one input archive but found {count}. Set the executable_jar property to name the executable jar")]
    AmbiguousExecutable { count: usize },

    /// Runtime image has no lib directory
    #[error("No lib dir in runtime image at: {path}")]
    RuntimeLibMissing { path: PathBuf },

    /// Copy or script write failed
    #[error("Assembly I/O failure for '{path}': {error}")]
    Io { path: PathBuf, error: String },
}

/// Filesystem errors
#[derive(Error, Debug)]
pub enum FilesystemError {
    /// Failed to create directory
    #[error("Failed to create directory '{path}': {error}")]
    CreateDir { path: PathBuf, error: String },

    /// Failed to remove directory
    #[error("Failed to remove directory '{path}': {error}")]
    RemoveDir { path: PathBuf, error: String },

    /// Failed to write file
    #[error("Failed to write file '{path}': {error}")]
    WriteFile { path: PathBuf, error: String },

    /// Failed to read file
    #[error("Failed to read file '{path}': {error}")]
    ReadFile { path: PathBuf, error: String },

    /// Failed to copy file
    #[error("Failed to copy '{from}' to '{to}': {error}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        error: String,
    },

    /// Failed to list directory
    #[error("Failed to list directory '{path}': {error}")]
    ListDir { path: PathBuf, error: String },
}

/// Top-level jrelink error type
#[derive(Error, Debug)]
pub enum JrelinkError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Command error
    #[error("Command error: {0}")]
    Command(#[from] CommandError),

    /// Assembly error
    #[error("Assembly error: {0}")]
    Assembly(#[from] AssemblyError),

    /// Filesystem error
    #[error("Filesystem error: {0}")]
    Filesystem(#[from] FilesystemError),
}
