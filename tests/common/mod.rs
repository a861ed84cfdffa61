//! Common test utilities and helpers
//!
//! Provides a temporary project directory plus a fake JDK whose `java`,
//! `jdeps` and `jlink` are small shell scripts with the same command-line
//! contract as the real tools. `jdeps --list-deps foo.jar` prints the
//! contents of a sidecar `foo.jar.deps` file, `java --list-modules` prints
//! the fake catalogue in `<jdk>/modules.txt`, and `jlink` records its
//! arguments in `<jdk>/jlink.args` before creating the output tree.

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test project context
pub struct TestProject {
    /// Temporary directory for the test project
    pub dir: TempDir,
}

#[allow(dead_code)]
impl TestProject {
    /// Create a new test project in a temporary directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Get the path to the test project directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Create a file in the test project
    pub fn create_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Create a directory in the test project
    pub fn create_dir(&self, name: &str) {
        let path = self.dir.path().join(name);
        std::fs::create_dir_all(path).expect("Failed to create directory");
    }

    /// Check if a file exists in the test project
    pub fn file_exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }

    /// Read a file from the test project
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).expect("Failed to read file")
    }

    /// Create a jar file under build/libs and return its name
    pub fn add_jar(&self, name: &str) {
        self.create_file(&format!("build/libs/{name}"), "PK\u{3}\u{4}fake-jar");
    }

    /// Set the fake jdeps output for a jar under build/libs
    pub fn set_jar_deps(&self, jar_name: &str, lines: &[&str]) {
        let content = lines.join("\n");
        self.create_file(&format!("build/libs/{jar_name}.deps"), &content);
    }

    /// Install a fake JDK under <project>/jdk and return its home path
    pub fn fake_jdk(&self) -> PathBuf {
        let home = self.path().join("jdk");
        write_fake_jdk(&home);
        home
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// Default module catalogue printed by the fake `java --list-modules`
pub const FAKE_CATALOGUE: &str = "java.base@21.0.2\njava.logging@21.0.2\njava.sql@21.0.2\njdk.unsupported@21.0.2\n";

/// Write the fake JDK tool scripts under `<home>/bin`
pub fn write_fake_jdk(home: &Path) {
    let bin = home.join("bin");
    std::fs::create_dir_all(&bin).expect("Failed to create fake jdk bin");
    std::fs::create_dir_all(home.join("jmods")).expect("Failed to create fake jmods");
    std::fs::write(home.join("modules.txt"), FAKE_CATALOGUE).expect("Failed to write catalogue");

    write_script(
        &bin.join("java"),
        r#"#!/bin/sh
if [ "$1" = "--version" ]; then
    echo "openjdk 21.0.2 2024-01-16"
    exit 0
fi
if [ "$1" = "--list-modules" ]; then
    cat "$(dirname "$0")/../modules.txt"
    exit 0
fi
exit 0
"#,
    );

    write_script(
        &bin.join("jdeps"),
        r#"#!/bin/sh
if [ "$1" = "--version" ]; then
    echo "21.0.2"
    exit 0
fi
if [ "$1" = "--list-deps" ] && [ -f "$2.deps" ]; then
    cat "$2.deps"
fi
exit 0
"#,
    );

    write_script(
        &bin.join("jlink"),
        r#"#!/bin/sh
home="$(cd "$(dirname "$0")/.." && pwd)"
if [ "$1" = "--version" ]; then
    echo "21.0.2"
    exit 0
fi
printf '%s\n' "$@" > "$home/jlink.args"
out=""
prev=""
for a in "$@"; do
    if [ "$prev" = "--output" ]; then out="$a"; fi
    prev="$a"
done
if [ -z "$out" ]; then
    echo "jlink: no --output given" >&2
    exit 1
fi
mkdir -p "$out/lib" "$out/bin"
printf 'stub-runtime\n' > "$out/bin/java"
exit 0
"#,
    );
}

/// Overwrite a fake JDK tool with a script that fails with the given code
#[allow(dead_code)]
pub fn break_tool(home: &Path, tool: &str, exit_code: i32) {
    write_script(
        &home.join("bin").join(tool),
        &format!("#!/bin/sh\necho \"{tool}: simulated failure\" >&2\nexit {exit_code}\n"),
    );
}

fn write_script(path: &Path, content: &str) {
    std::fs::write(path, content).expect("Failed to write fake tool script");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = std::fs::metadata(path)
            .expect("Failed to stat fake tool")
            .permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(path, perms).expect("Failed to chmod fake tool");
    }
}
