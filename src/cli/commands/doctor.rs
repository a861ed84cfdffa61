//! CLI command for `jrelink doctor`
//!
//! Checks that java, jdeps and jlink are available and reports manifest
//! issues with suggestions.

use anyhow::Result;
use std::path::Path;

use crate::cli::output::{is_json, is_quiet, print_detail, print_info, print_warning, status};
use crate::core::doctor::run_doctor;
use crate::core::manifest::Manifest;

/// Execute the doctor command
pub async fn execute(project_dir: &Path, java_home_flag: Option<&Path>) -> Result<()> {
    // Fall back to the manifest's java_home, then JAVA_HOME, then PATH.
    let manifest_home = Manifest::load(project_dir)
        .ok()
        .and_then(|m| m.runtime.java_home);
    let env_home = std::env::var_os("JAVA_HOME").map(std::path::PathBuf::from);
    let java_home = java_home_flag
        .map(Path::to_path_buf)
        .or(manifest_home)
        .or(env_home);

    let report = run_doctor(project_dir, java_home.as_deref());

    // JSON output mode
    if is_json() {
        let payload = serde_json::json!({
            "status": if report.all_passed() { "success" } else { "error" },
            "java_home": java_home,
            "checks": report.checks.iter().map(|c| serde_json::json!({
                "name": c.name,
                "passed": c.passed,
                "version": c.version,
                "error": c.error,
                "suggestion": c.suggestion,
            })).collect::<Vec<_>>(),
            "config_issues": report.config_issues,
        });
        println!("{}", serde_json::to_string_pretty(&payload).unwrap_or_default());

        if !report.failed().is_empty() {
            return Err(anyhow::anyhow!("Missing required JDK tools"));
        }
        return Ok(());
    }

    // Quiet mode - only show errors
    if is_quiet() {
        let failed = report.failed();
        if !failed.is_empty() {
            for check in failed {
                eprintln!("{} Missing required: {}", status::ERROR, check.name);
            }
            return Err(anyhow::anyhow!("Missing required JDK tools"));
        }
        return Ok(());
    }

    // Normal output mode
    match &java_home {
        Some(home) => print_info(&format!("Checking JDK tools under {}", home.display())),
        None => print_info("Checking JDK tools on PATH"),
    }
    println!();

    for check in &report.checks {
        let version_str = check
            .version
            .as_ref()
            .map(|v| format!(" ({v})"))
            .unwrap_or_default();

        if check.passed {
            println!("  {} {}{version_str}", status::SUCCESS, check.name);
        } else {
            println!("  {} {}", status::ERROR, check.name);
            if let Some(error) = &check.error {
                print_detail(&format!("Error: {error}"));
            }
            if let Some(suggestion) = &check.suggestion {
                print_detail(&format!("Suggestion: {suggestion}"));
            }
        }
    }

    if !report.config_issues.is_empty() {
        println!();
        print_warning("Configuration issues:");
        for issue in &report.config_issues {
            print_detail(&format!("• {issue}"));
        }
    }

    println!();
    let passed = report.passed_count();
    let total = report.checks.len();
    if report.all_passed() {
        println!("{} All checks passed ({passed}/{total})", status::SUCCESS);
        Ok(())
    } else if report.failed().is_empty() {
        print_warning(&format!("{passed}/{total} checks passed"));
        Ok(())
    } else {
        println!("{} {passed}/{total} checks passed", status::ERROR);
        Err(anyhow::anyhow!(
            "Missing required JDK tools. Run 'jrelink doctor' for details."
        ))
    }
}
