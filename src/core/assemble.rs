//! Application assembly
//!
//! Turns a freshly linked runtime image into a runnable application tree:
//! copies the input jars into the image's lib directory, picks the
//! executable jar, and writes a POSIX launcher script plus a sibling
//! Windows batch file. The generated command lines use paths relative to
//! the image root so the tree can be moved or unpacked anywhere.

use std::path::{Path, PathBuf};

use crate::config::defaults::IMAGE_LIB_DIR;
use crate::error::{AssemblyError, ConfigError, JrelinkError};
use crate::infra::filesystem;

use super::archives::ArchiveSet;
use super::config::BuildConfig;

/// The launcher script pair written by assembly
#[derive(Debug, Clone)]
pub struct LauncherScripts {
    /// POSIX shell script, marked executable
    pub posix: PathBuf,
    /// Windows batch file
    pub windows: PathBuf,
    /// File name of the executable jar both scripts reference
    pub executable_jar: String,
}

/// Assemble the application tree inside the runtime image
///
/// Requires a configured main class; the pipeline only calls this when one
/// is set.
pub fn assemble(config: &BuildConfig, archives: &ArchiveSet) -> Result<LauncherScripts, JrelinkError> {
    let main_class = config
        .main_class
        .as_deref()
        .ok_or(ConfigError::MissingMainClass)?;

    let lib_dir = config.output_dir.join(IMAGE_LIB_DIR);
    if !lib_dir.is_dir() {
        return Err(AssemblyError::RuntimeLibMissing { path: lib_dir }.into());
    }

    let executable_jar = select_executable(archives, config.executable_jar.as_deref())?;

    // Copy the jars into the image so the tree is self-contained.
    for archive in archives.files() {
        let name = archive
            .file_name()
            .expect("discovered archives are regular files");
        filesystem::copy_file(archive, &lib_dir.join(name)).map_err(|e| AssemblyError::Io {
            path: archive.clone(),
            error: e.to_string(),
        })?;
    }

    let to_root = path_to_root(&config.script_location);
    let classpath = classpath(archives, &executable_jar, &to_root);
    let command = render_command_line(
        &to_root,
        config.jvm_args.as_deref(),
        &executable_jar,
        main_class,
        config.app_args.as_deref(),
        &classpath,
    );

    let posix = config.output_dir.join(&config.script_location);
    let windows = windows_sibling(&posix);

    write_script(&posix, &format!("#!/usr/bin/env bash\n{command} \"$@\"\n"))?;
    write_script(&windows, &format!("{command} %*\n"))?;

    tracing::info!(
        "Launcher scripts written: {} / {}",
        posix.display(),
        windows.display()
    );
    Ok(LauncherScripts {
        posix,
        windows,
        executable_jar,
    })
}

/// Pick the executable jar for the launcher
///
/// A configured name must exist among the inputs; with none configured the
/// archive set must contain exactly one jar.
pub fn select_executable(
    archives: &ArchiveSet,
    configured: Option<&str>,
) -> Result<String, AssemblyError> {
    match configured {
        Some(name) => {
            if archives.find_by_name(name).is_none() {
                return Err(AssemblyError::ExecutableNotFound {
                    name: name.to_string(),
                    libs: archives
                        .files()
                        .iter()
                        .filter_map(|p| p.parent())
                        .map(|p| p.display().to_string())
                        .next()
                        .unwrap_or_default(),
                });
            }
            Ok(name.to_string())
        }
        None => {
            if archives.len() != 1 {
                return Err(AssemblyError::AmbiguousExecutable {
                    count: archives.len(),
                });
            }
            Ok(archives.files()[0]
                .file_name()
                .expect("discovered archives are regular files")
                .to_string_lossy()
                .to_string())
        }
    }
}

/// `../` segments climbing from the script location back to the image root
///
/// One segment per path separator: `bin/app` yields `../`, a bare `app`
/// yields the empty string, so generated paths work at any nesting depth.
pub fn path_to_root(script_location: &str) -> String {
    let depth = Path::new(script_location).components().count().saturating_sub(1);
    "../".repeat(depth)
}

/// Classpath referencing every non-executable jar inside the image
pub fn classpath(archives: &ArchiveSet, executable_jar: &str, to_root: &str) -> String {
    archives
        .files()
        .iter()
        .filter_map(|p| p.file_name())
        .map(|n| n.to_string_lossy())
        .filter(|n| n != executable_jar)
        .map(|n| format!("{to_root}{IMAGE_LIB_DIR}/{n}"))
        .collect::<Vec<_>>()
        .join(":")
}

/// One launcher command line, shared by both script dialects
fn render_command_line(
    to_root: &str,
    jvm_args: Option<&str>,
    executable_jar: &str,
    main_class: &str,
    app_args: Option<&str>,
    classpath: &str,
) -> String {
    let mut command = format!("{to_root}bin/java");
    if let Some(jvm_args) = jvm_args {
        command.push(' ');
        command.push_str(jvm_args);
    }
    command.push_str(&format!(" -jar {to_root}{IMAGE_LIB_DIR}/{executable_jar} {main_class}"));
    if let Some(app_args) = app_args {
        command.push(' ');
        command.push_str(app_args);
    }
    if !classpath.is_empty() {
        command.push_str(" -cp ");
        command.push_str(classpath);
    }
    command
}

/// Batch-file sibling of the POSIX script (`bin/app` -> `bin/app.bat`)
fn windows_sibling(posix: &Path) -> PathBuf {
    let stem = posix
        .file_stem()
        .map_or_else(|| "app".to_string(), |s| s.to_string_lossy().to_string());
    posix.with_file_name(format!("{stem}.bat"))
}

fn write_script(path: &Path, content: &str) -> Result<(), AssemblyError> {
    filesystem::write_file(path, content).map_err(|e| AssemblyError::Io {
        path: path.to_path_buf(),
        error: e.to_string(),
    })?;
    filesystem::make_executable(path).map_err(|e| AssemblyError::Io {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}
