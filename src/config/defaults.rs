//! Default configuration values

/// Manifest file name looked up in the project directory
pub const MANIFEST_FILE: &str = "jrelink.toml";

/// Default build directory, relative to the project directory
pub const DEFAULT_BUILD_DIR: &str = "build";

/// Default input archive directory, relative to the build directory
pub const DEFAULT_LIBS_DIR: &str = "libs";

/// Default output directory for the runtime image, relative to the build directory
pub const DEFAULT_OUTPUT_DIR: &str = "app";

/// Default launcher script location, relative to the image root
pub const DEFAULT_SCRIPT_LOCATION: &str = "bin/app";

/// Subdirectory of the JDK home holding platform module files
pub const JMODS_DIR: &str = "jmods";

/// Extra module path entry passed to jlink alongside the jmods directory
pub const MODULE_PATH_EXTRA: &str = "mlib";

/// Subdirectory of the runtime image that receives copied archives
pub const IMAGE_LIB_DIR: &str = "lib";

/// jlink compression level
pub const JLINK_COMPRESS_LEVEL: u8 = 2;

/// Scratch/log directory, relative to the build directory
pub const SCRATCH_DIR: &str = "tmp/jrelink";

/// Bound on external command runtime (seconds)
pub const COMMAND_TIMEOUT_SECS: u64 = 20 * 60;

/// Pattern matching platform module names in jdeps output
pub const PLATFORM_MODULE_PATTERN: &str = r"^\s*(java|jdk|javafx|oracle)\..*$";
