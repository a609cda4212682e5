//! Template content for `neuik-build init`.

/// Template for `neuik-build.toml`
pub const BUILD_FILE_TEMPLATE: &str = r#"# NEUIK build file
#
# Values given on the command line override the values below.

# Target platform: "linux", "osx" or "windows". Defaults to the host.
# platform = "linux"

# Unoptimized build with debug symbols.
debug = false

# Link programs against the static library.
static_link = false

# Also build the static library when linking dynamically.
static_library = false

# ENABLE_RUNTIME_TYPE_CHECKING: "on", "off" or "legacy".
runtime_type_checking = "off"

# Dependency libraries linked statically next to neuik (requires static_link).
# static_dependencies = ["SDL2", "SDL2_ttf", "SDL2_image"]

# Dependency sets default to the INCLUDES_/LIB_/LIBPATH_/STLIB_/STLIBPATH_
# environment variables. Any field set here replaces the environment value.
# [dependencies.sdl2]
# includes = ["/usr/local/include/SDL2"]
# lib_paths = ["/usr/local/lib"]

[[program]]
number = "00"
name = "helloWorld"

[[program]]
number = "01"
name = "blank"

# Standalone programs link SDL2 and SDL2_ttf directly, without neuik.
# [[program]]
# name = "standalone_label"
# standalone = true
"#;
