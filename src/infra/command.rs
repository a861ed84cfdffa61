//! External command execution
//!
//! Runs the JDK tools (`java`, `jdeps`, `jlink`) as child processes, one at
//! a time. Standard error is always inherited so tool diagnostics reach the
//! user; standard output is captured to a scratch log file only when the
//! caller passes a label and wants the output lines back.

use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;

use crate::config::defaults::COMMAND_TIMEOUT_SECS;
use crate::error::CommandError;
use crate::infra::scratch::ScratchArea;

/// Runs external commands with a bounded timeout and scratch-area capture
#[derive(Debug, Clone)]
pub struct CommandRunner {
    scratch: ScratchArea,
    timeout: Duration,
    verbose: bool,
}

impl CommandRunner {
    /// Create a runner writing captured output under the given scratch area
    pub fn new(scratch: ScratchArea, verbose: bool) -> Self {
        Self {
            scratch,
            timeout: Duration::from_secs(COMMAND_TIMEOUT_SECS),
            verbose,
        }
    }

    /// Override the command timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Scratch area receiving captured output
    pub fn scratch(&self) -> &ScratchArea {
        &self.scratch
    }

    /// Run a command to completion and return its captured output lines
    ///
    /// With a label, stdout is redirected to `<scratch>/<label>.log` and the
    /// file's lines are returned after a successful exit. Without a label no
    /// output is captured and the result is empty.
    ///
    /// A child that outlives the timeout is killed and reported as
    /// [`CommandError::TimedOut`]; a non-zero exit is reported as
    /// [`CommandError::Failed`] with the full command line and a pointer to
    /// the scratch directory.
    pub async fn run(
        &self,
        label: Option<&str>,
        program: &Path,
        args: &[String],
    ) -> Result<Vec<String>, CommandError> {
        let command_line = render_command_line(program, args);
        if self.verbose {
            eprintln!("jrelink: {command_line}");
        }
        tracing::debug!("Executing: {command_line}");

        let log_file = label.map(|l| self.scratch.log_file(l));

        let stdout = match &log_file {
            Some(path) => {
                let file = std::fs::File::create(path).map_err(|e| CommandError::Capture {
                    path: path.clone(),
                    error: e.to_string(),
                })?;
                Stdio::from(file)
            }
            None => Stdio::null(),
        };

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(stdout)
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| CommandError::Spawn {
                command: command_line.clone(),
                error: e.to_string(),
            })?;

        let status = match tokio::time::timeout(self.timeout, child.wait()).await {
            Ok(waited) => waited.map_err(|e| CommandError::Spawn {
                command: command_line.clone(),
                error: e.to_string(),
            })?,
            Err(_) => {
                // Hung tool: kill it rather than reading the exit status of
                // a process that is still running.
                let _ = child.kill().await;
                return Err(CommandError::TimedOut {
                    command: command_line,
                    timeout_secs: self.timeout.as_secs(),
                });
            }
        };

        if !status.success() {
            return Err(CommandError::Failed {
                command: command_line,
                code: status.code().unwrap_or(-1),
                log_dir: self.scratch.dir().to_path_buf(),
            });
        }

        match log_file {
            Some(path) => {
                let content =
                    std::fs::read_to_string(&path).map_err(|e| CommandError::Capture {
                        path: path.clone(),
                        error: e.to_string(),
                    })?;
                Ok(content.lines().map(str::to_string).collect())
            }
            None => Ok(Vec::new()),
        }
    }
}

/// Render a command line for error messages and verbose echo
fn render_command_line(program: &Path, args: &[String]) -> String {
    let mut line = program.display().to_string();
    for arg in args {
        line.push(' ');
        line.push_str(arg);
    }
    line
}
