//! Fixed names and paths shared by every NEUIK build.

/// Name of the primary library produced by the build.
pub const LIB_NAME: &str = "neuik";

/// Output directory of the library, relative to the build directory.
pub const LIB_DIR: &str = "../lib";

/// Directory holding the library's C sources.
pub const SRC_DIR: &str = "src";

/// Include directory handed to programs linking against the library.
pub const PROGRAM_INCLUDE_DIR: &str = "../src";

pub const PROGRAM_SRC_DIR: &str = "examples/src";
pub const PROGRAM_BIN_DIR: &str = "../examples/bin";

/// Default build file name looked up in the working directory.
pub const BUILD_FILE_NAME: &str = "neuik-build.toml";

pub const BASE_CFLAGS: &[&str] = &["-Wall"];
pub const DEBUG_CFLAGS: &[&str] = &["-O0", "-ggdb"];
pub const OPTIMIZED_CFLAGS: &[&str] = &["-O2"];

pub const RUNTIME_TYPE_CHECKING_DEFINE: &str = "ENABLE_RUNTIME_TYPE_CHECKING";

/// Libraries linked dynamically ahead of the dependency sets when linking statically.
pub const STATIC_MODE_LIBS: &[&str] = &["freetype"];

/// Library search paths used when linking the library dynamically.
pub const DYNAMIC_LIB_PATHS: &[&str] = &[".", LIB_DIR];

/// Length of the truncated plan hash.
pub const PLAN_HASH_PREFIX_LEN: usize = 20;
