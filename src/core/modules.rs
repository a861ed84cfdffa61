//! Platform module names
//!
//! Normalization and filtering of the lines emitted by `java --list-modules`
//! and `jdeps --list-deps`. Module names are kept in a `BTreeSet` so the
//! list handed to jlink is deduplicated and deterministically ordered.

use std::collections::BTreeSet;

use regex::Regex;

use crate::config::defaults::PLATFORM_MODULE_PATTERN;

/// Deduplicated, ordered set of platform module names
pub type ModuleSet = BTreeSet<String>;

/// Trim a module-lister line and strip any `@version` suffix
pub fn normalize(line: &str) -> String {
    let trimmed = line.trim();
    match trimmed.find('@') {
        Some(idx) => trimmed[..idx].to_string(),
        None => trimmed.to_string(),
    }
}

/// Trim a dependency-lister line and strip any trailing `/qualifier`
pub fn strip_qualifier(line: &str) -> String {
    let trimmed = line.trim();
    match trimmed.find('/') {
        Some(idx) => trimmed[..idx].to_string(),
        None => trimmed.to_string(),
    }
}

/// Recognizes platform module names in jdeps output
///
/// Application and third-party package names do not match and are discarded
/// by the resolver.
#[derive(Debug, Clone)]
pub struct PlatformModuleFilter {
    pattern: Regex,
}

impl PlatformModuleFilter {
    pub fn new() -> Self {
        Self {
            // The pattern is a compile-time constant; it always parses.
            pattern: Regex::new(PLATFORM_MODULE_PATTERN).expect("invalid platform module pattern"),
        }
    }

    /// Whether a raw output line names a platform module
    pub fn matches(&self, line: &str) -> bool {
        self.pattern.is_match(line)
    }
}

impl Default for PlatformModuleFilter {
    fn default() -> Self {
        Self::new()
    }
}

/// Comma-join a module set for the jlink --add-modules argument
pub fn join_modules(modules: &ModuleSet) -> String {
    modules.iter().cloned().collect::<Vec<_>>().join(",")
}
