use std::path::Path;

use neuik_build_lib::buildfile::{BuildFile, Overrides};
use neuik_build_lib::targets::{TargetKind, library_targets, program_targets};
use neuik_build_lib::{Dependency, DependencyEnv, Platform, resolve};
use serial_test::serial;

const BUILD_FILE: &str = r#"
platform = "windows"
debug = true
static_link = true
runtime_type_checking = "legacy"
static_dependencies = ["SDL2", "SDL2_ttf", "SDL2_image"]

[dependencies.sdl2]
static_libs = ["SDL2", "SDL2main", "winmm", "imm32"]
static_lib_paths = ["C:/SDL2/lib"]

[dependencies.sdl2_ttf]
static_libs = ["SDL2_ttf", "freetype"]

[[program]]
number = "01"
name = "blank"

[[program]]
number = "10"
name = "timeSinceStarted"
extra_libraries = ["SDL2"]
sdl_includes = true
"#;

#[test]
fn windows_static_plan_from_build_file() {
  let file = BuildFile::parse(BUILD_FILE, Path::new("neuik-build.toml")).unwrap();
  let setup = file.into_setup(Overrides::default(), DependencyEnv::default()).unwrap();
  let resolved = resolve(&setup.configuration, &setup.deps).unwrap();

  assert_eq!(resolved.flags, vec!["-Wall", "-O0", "-ggdb"]);
  assert_eq!(resolved.defines, vec!["PLATFORM_WINDOWS", "ENABLE_RUNTIME_TYPE_CHECKING"]);
  assert!(resolved.sources.contains(&"src/NEUIK_platform_windows.c".to_string()));

  assert_eq!(
    resolved.link.static_libraries,
    vec!["neuik", "SDL2", "SDL2_ttf", "SDL2_image"]
  );
  assert_eq!(resolved.link.libraries, vec!["freetype", "SDL2main", "winmm", "imm32"]);
  assert_eq!(resolved.link.static_library_paths, vec!["../lib", "C:/SDL2/lib"]);

  let libs = library_targets(&resolved, &setup.deps);
  assert_eq!(libs[0].kind, TargetKind::StaticLibrary);

  let programs = program_targets(&resolved, &setup.deps, &setup.programs).unwrap();
  assert_eq!(programs.len(), 2);
  // SDL2 is linked statically, so the program's extra request is dropped
  assert!(!programs[1].link.libraries.contains(&"SDL2".to_string()));
}

#[test]
#[serial]
fn environment_feeds_dynamic_plan() {
  temp_env::with_vars(
    [
      ("LIB_SDL2", Some("SDL2 pthread")),
      ("LIB_SDL2_TTF", Some("SDL2_ttf SDL2")),
      ("LIB_SDL2_IMAGE", Some("SDL2_image pthread")),
      ("LIBPATH_SDL2", Some("/usr/local/lib")),
      ("INCLUDES_SDL2", Some("/usr/local/include/SDL2")),
      ("LIBPATH_SDL2_TTF", None),
      ("LIBPATH_SDL2_IMAGE", None),
      ("INCLUDES_SDL2_TTF", None),
      ("INCLUDES_SDL2_IMAGE", None),
    ],
    || {
      let deps = DependencyEnv::from_env();
      let overrides = Overrides {
        platform: Some(Platform::Linux),
        ..Overrides::default()
      };
      let setup = BuildFile::default().into_setup(overrides, deps).unwrap();
      let resolved = resolve(&setup.configuration, &setup.deps).unwrap();

      assert_eq!(
        resolved.link.libraries,
        vec!["neuik", "SDL2", "pthread", "SDL2_ttf", "SDL2_image"]
      );
      assert_eq!(resolved.link.library_paths, vec![".", "../lib", "/usr/local/lib"]);
      assert_eq!(resolved.includes, vec!["/usr/local/include/SDL2"]);
      assert_eq!(setup.deps.get(Dependency::Sdl2).libs, vec!["SDL2", "pthread"]);
    },
  );
}

#[test]
fn resolved_build_serializes_to_json() {
  let file = BuildFile::parse("platform = \"osx\"", Path::new("neuik-build.toml")).unwrap();
  let setup = file.into_setup(Overrides::default(), DependencyEnv::default()).unwrap();
  let resolved = resolve(&setup.configuration, &setup.deps).unwrap();

  let json = serde_json::to_value(&resolved).unwrap();
  assert_eq!(json["configuration"]["platform"], "osx");
  assert_eq!(json["profile"], "optimized");
  assert_eq!(json["link"]["libraries"][0], "neuik");
}
