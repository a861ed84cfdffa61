//! Doctor command logic
//!
//! Checks that the JDK tools the pipeline shells out to are actually
//! available, and reports manifest problems.

use std::path::{Path, PathBuf};

use crate::core::manifest::Manifest;

/// Result of a single tool check
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Name of the tool being checked
    pub name: String,
    /// Whether the check passed
    pub passed: bool,
    /// Version if available
    pub version: Option<String>,
    /// Error message if check failed
    pub error: Option<String>,
    /// Suggestion for fixing the issue
    pub suggestion: Option<String>,
}

impl CheckResult {
    /// Create a passing check result
    pub fn pass(name: &str, version: Option<String>) -> Self {
        Self {
            name: name.to_string(),
            passed: true,
            version,
            error: None,
            suggestion: None,
        }
    }

    /// Create a failing check result
    pub fn fail(name: &str, error: &str, suggestion: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            passed: false,
            version: None,
            error: Some(error.to_string()),
            suggestion: suggestion.map(String::from),
        }
    }
}

/// Overall doctor report
#[derive(Debug, Default)]
pub struct DoctorReport {
    /// Individual tool check results
    pub checks: Vec<CheckResult>,
    /// Configuration issues found
    pub config_issues: Vec<String>,
}

impl DoctorReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_check(&mut self, result: CheckResult) {
        self.checks.push(result);
    }

    pub fn add_config_issue(&mut self, issue: String) {
        self.config_issues.push(issue);
    }

    /// Whether every check passed and no config issue was found
    pub fn all_passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed) && self.config_issues.is_empty()
    }

    pub fn passed_count(&self) -> usize {
        self.checks.iter().filter(|c| c.passed).count()
    }

    pub fn failed(&self) -> Vec<&CheckResult> {
        self.checks.iter().filter(|c| !c.passed).collect()
    }
}

/// The JDK tools the pipeline depends on
pub const REQUIRED_TOOLS: &[&str] = &["java", "jdeps", "jlink"];

/// Locate a JDK tool: under java_home/bin when a home is known, else PATH
pub fn locate_tool(java_home: Option<&Path>, name: &str) -> Option<PathBuf> {
    match java_home {
        Some(home) => {
            let candidate = home.join("bin").join(name);
            candidate.is_file().then_some(candidate)
        }
        None => which::which(name).ok(),
    }
}

/// Ask a tool for its version; None when it cannot be run
pub fn tool_version(path: &Path) -> Option<String> {
    std::process::Command::new(path)
        .arg("--version")
        .output()
        .ok()
        .and_then(|output| {
            if output.status.success() {
                let stdout = String::from_utf8_lossy(&output.stdout);
                let stderr = String::from_utf8_lossy(&output.stderr);
                let combined = format!("{stdout}{stderr}");
                extract_version(&combined)
            } else {
                None
            }
        })
}

/// Extract a version string from tool output
fn extract_version(output: &str) -> Option<String> {
    let version_regex = regex::Regex::new(r"(\d+(?:\.\d+)*(?:[+-][\w.]+)?)").ok()?;
    version_regex
        .captures(output)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Check one JDK tool
pub fn check_tool(java_home: Option<&Path>, name: &str) -> CheckResult {
    let where_hint = java_home.map_or_else(
        || "on PATH".to_string(),
        |h| format!("under {}", h.join("bin").display()),
    );
    match locate_tool(java_home, name) {
        Some(path) => CheckResult::pass(name, tool_version(&path)),
        None => CheckResult::fail(
            name,
            &format!("{name} not found {where_hint}"),
            Some("Install a JDK (9+) and set java_home in jrelink.toml or export JAVA_HOME"),
        ),
    }
}

/// Check the project manifest for problems
pub fn check_project_config(project_dir: &Path) -> Vec<String> {
    let mut issues = Vec::new();
    let manifest_path = project_dir.join(crate::config::defaults::MANIFEST_FILE);
    if !manifest_path.exists() {
        return issues;
    }
    match std::fs::read_to_string(&manifest_path) {
        Ok(content) => match Manifest::from_toml(&content) {
            Ok(manifest) => {
                if manifest.app.fat_jar && manifest.app.executable_jar.is_none() {
                    issues.push(
                        "fat_jar is set but executable_jar is not; fat-jar mode needs a named executable".to_string(),
                    );
                }
                if manifest.app.main_class.as_deref() == Some("") {
                    issues.push("main_class is empty".to_string());
                }
            }
            Err(e) => issues.push(format!("Invalid manifest: {e}")),
        },
        Err(e) => issues.push(format!("Cannot read manifest: {e}")),
    }
    issues
}

/// Run all doctor checks
pub fn run_doctor(project_dir: &Path, java_home: Option<&Path>) -> DoctorReport {
    let mut report = DoctorReport::new();

    for tool in REQUIRED_TOOLS {
        report.add_check(check_tool(java_home, tool));
    }

    for issue in check_project_config(project_dir) {
        report.add_config_issue(issue);
    }

    report
}
