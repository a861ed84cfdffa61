//! Output formatting and progress indicators
//!
//! Global quiet/json/verbose state plus the message helpers and spinner
//! used by the commands.

use std::sync::atomic::{AtomicBool, Ordering};

use indicatif::{ProgressBar, ProgressStyle};

static QUIET: AtomicBool = AtomicBool::new(false);
static JSON: AtomicBool = AtomicBool::new(false);

/// Output configuration derived from global CLI flags
#[derive(Debug, Clone, Copy)]
pub struct OutputConfig {
    pub quiet: bool,
    pub json: bool,
    pub verbose: u8,
}

impl OutputConfig {
    pub fn new(quiet: bool, json: bool, verbose: u8) -> Self {
        Self {
            quiet,
            json,
            verbose,
        }
    }

    /// Publish the configuration for the helpers below
    pub fn apply_global(self) {
        QUIET.store(self.quiet, Ordering::Relaxed);
        JSON.store(self.json, Ordering::Relaxed);
    }
}

/// Whether --quiet is in effect
pub fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Whether --json is in effect
pub fn is_json() -> bool {
    JSON.load(Ordering::Relaxed)
}

/// Status message prefixes
pub mod status {
    /// Success prefix (green checkmark)
    pub const SUCCESS: &str = "✓";

    /// Error prefix (red X)
    pub const ERROR: &str = "✗";

    /// Warning prefix (yellow triangle)
    pub const WARNING: &str = "⚠";

    /// Info prefix (blue circle)
    pub const INFO: &str = "ℹ";
}

/// Print an informational message (suppressed by --quiet and --json)
pub fn print_info(message: &str) {
    if !is_quiet() && !is_json() {
        println!("{} {message}", status::INFO);
    }
}

/// Print a success message (suppressed by --quiet and --json)
pub fn print_success(message: &str) {
    if !is_quiet() && !is_json() {
        println!("{} {message}", status::SUCCESS);
    }
}

/// Print a warning message (suppressed by --quiet and --json)
pub fn print_warning(message: &str) {
    if !is_quiet() && !is_json() {
        println!("{} {message}", status::WARNING);
    }
}

/// Print an indented detail line (suppressed by --quiet and --json)
pub fn print_detail(message: &str) {
    if !is_quiet() && !is_json() {
        println!("  {message}");
    }
}

/// Print a final error to stderr, JSON-shaped when --json is in effect
pub fn display_error(error: &anyhow::Error) {
    if is_json() {
        let payload = serde_json::json!({
            "status": "error",
            "message": format!("{error:#}"),
        });
        eprintln!("{}", serde_json::to_string_pretty(&payload).unwrap_or_default());
    } else {
        eprintln!("{} {error:#}", status::ERROR);
    }
}

/// Create a spinner for operations with unknown duration
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.blue} {msg}")
            .expect("Invalid spinner template"),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}
