//! Link recipes for programs built against NEUIK.

use serde::{Deserialize, Serialize};

use crate::config::BuildConfiguration;
use crate::consts::{DYNAMIC_LIB_PATHS, LIB_DIR, LIB_NAME, STATIC_MODE_LIBS};
use crate::deps::{DependencyEnv, merge_unique};
use crate::error::{ResolveError, Result};

/// Libraries and search paths handed to the linker.
///
/// `libraries` never contains duplicates and never repeats a name from
/// `static_libraries`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRecipe {
  pub libraries: Vec<String>,
  pub library_paths: Vec<String>,
  pub static_libraries: Vec<String>,
  pub static_library_paths: Vec<String>,
}

impl LinkRecipe {
  /// Append `extra` to the dynamic libraries, keeping the recipe's invariants.
  pub fn with_extra_libraries(mut self, extra: &[String]) -> Self {
    self.libraries = merge_unique(
      [self.libraries.as_slice(), extra],
      &self.static_libraries,
    );
    self
  }
}

/// Check the options that only make sense together with static linking.
fn validate(config: &BuildConfiguration) -> Result<()> {
  if config.static_dependencies.is_empty() {
    return Ok(());
  }

  if !config.static_link {
    return Err(ResolveError::configuration(format!(
      "static dependencies [{}] require static linking",
      config.static_dependencies.join(", ")
    )));
  }

  if config.static_dependencies.iter().any(|lib| lib == LIB_NAME) {
    return Err(ResolveError::configuration(format!(
      "'{}' is always linked statically and cannot be listed as a static dependency",
      LIB_NAME
    )));
  }

  Ok(())
}

/// Resolve the link recipe for `config` against the dependency sets in `deps`.
pub fn resolve_link(config: &BuildConfiguration, deps: &DependencyEnv) -> Result<LinkRecipe> {
  validate(config)?;

  let recipe = if config.static_link {
    static_recipe(config, deps)
  } else {
    dynamic_recipe(deps)
  };

  Ok(recipe)
}

fn dynamic_recipe(deps: &DependencyEnv) -> LinkRecipe {
  let primary = vec![LIB_NAME.to_string()];
  let libraries = merge_unique(
    std::iter::once(primary.as_slice()).chain(deps.iter().map(|s| s.libs.as_slice())),
    &[],
  );

  let search = to_strings(DYNAMIC_LIB_PATHS);
  let library_paths = merge_unique(
    std::iter::once(search.as_slice()).chain(deps.iter().map(|s| s.lib_paths.as_slice())),
    &[],
  );

  LinkRecipe {
    libraries,
    library_paths,
    static_libraries: Vec::new(),
    static_library_paths: Vec::new(),
  }
}

fn static_recipe(config: &BuildConfiguration, deps: &DependencyEnv) -> LinkRecipe {
  let primary = vec![LIB_NAME.to_string()];
  let static_libraries = merge_unique([primary.as_slice(), config.static_dependencies.as_slice()], &[]);

  let extra = to_strings(STATIC_MODE_LIBS);
  let libraries = merge_unique(
    std::iter::once(extra.as_slice()).chain(deps.iter().map(|s| s.static_libs.as_slice())),
    &static_libraries,
  );

  let library_paths = merge_unique(deps.iter().map(|s| s.static_lib_paths.as_slice()), &[]);

  let lib_dir = vec![LIB_DIR.to_string()];
  let static_library_paths = merge_unique(
    std::iter::once(lib_dir.as_slice()).chain(deps.iter().map(|s| s.static_lib_paths.as_slice())),
    &[],
  );

  LinkRecipe {
    libraries,
    library_paths,
    static_libraries,
    static_library_paths,
  }
}

fn to_strings(items: &[&str]) -> Vec<String> {
  items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::deps::Dependency;
  use crate::platform::Platform;

  fn sdl_env() -> DependencyEnv {
    let mut env = DependencyEnv::default();
    let sdl = env.get_mut(Dependency::Sdl2);
    sdl.libs = vec!["SDL2".into(), "m".into()];
    sdl.lib_paths = vec!["/usr/lib".into()];
    sdl.static_libs = vec!["SDL2".into(), "m".into(), "dl".into()];
    sdl.static_lib_paths = vec!["/usr/lib/static".into()];

    let ttf = env.get_mut(Dependency::Sdl2Ttf);
    ttf.libs = vec!["SDL2_ttf".into(), "SDL2".into()];
    ttf.lib_paths = vec!["/usr/lib".into(), "/opt/ttf/lib".into()];
    ttf.static_libs = vec!["SDL2_ttf".into(), "freetype".into(), "m".into()];

    env
  }

  #[test]
  fn dynamic_link_puts_primary_library_first() {
    let config = BuildConfiguration::new(Platform::Linux, false, false);
    let recipe = resolve_link(&config, &sdl_env()).unwrap();

    assert_eq!(recipe.libraries, vec!["neuik", "SDL2", "m", "SDL2_ttf", "SDL2_image"]);
    assert_eq!(recipe.library_paths, vec![".", "../lib", "/usr/lib", "/opt/ttf/lib"]);
    assert!(recipe.static_libraries.is_empty());
    assert!(recipe.static_library_paths.is_empty());
  }

  #[test]
  fn static_link_moves_primary_library() {
    let config = BuildConfiguration::new(Platform::Linux, false, true);
    let recipe = resolve_link(&config, &sdl_env()).unwrap();

    assert_eq!(recipe.static_libraries, vec!["neuik"]);
    assert!(!recipe.libraries.contains(&"neuik".to_string()));
    assert_eq!(
      recipe.libraries,
      vec!["freetype", "SDL2", "m", "dl", "SDL2_ttf", "SDL2_image"]
    );
    assert_eq!(recipe.library_paths, vec!["/usr/lib/static"]);
    assert_eq!(recipe.static_library_paths, vec!["../lib", "/usr/lib/static"]);
  }

  #[test]
  fn static_overrides_are_excluded_from_dynamic_libraries() {
    let config = BuildConfiguration::new(Platform::Windows, true, true)
      .with_static_dependencies(["SDL2", "SDL2_ttf", "SDL2_image"]);
    let recipe = resolve_link(&config, &sdl_env()).unwrap();

    assert_eq!(recipe.static_libraries, vec!["neuik", "SDL2", "SDL2_ttf", "SDL2_image"]);
    assert_eq!(recipe.libraries, vec!["freetype", "m", "dl"]);
  }

  #[test]
  fn shared_entries_appear_once() {
    let config = BuildConfiguration::new(Platform::Osx, false, false);
    let recipe = resolve_link(&config, &sdl_env()).unwrap();
    let count = recipe.libraries.iter().filter(|l| *l == "SDL2").count();
    assert_eq!(count, 1);
  }

  #[test]
  fn static_overrides_without_static_link_are_rejected() {
    let config =
      BuildConfiguration::new(Platform::Windows, false, false).with_static_dependencies(["SDL2"]);
    let err = resolve_link(&config, &sdl_env()).unwrap_err();
    assert!(matches!(err, ResolveError::UnsupportedConfiguration { .. }));
    assert!(err.to_string().contains("require static linking"));
  }

  #[test]
  fn primary_library_cannot_be_a_static_override() {
    let config =
      BuildConfiguration::new(Platform::Linux, false, true).with_static_dependencies(["neuik"]);
    assert!(matches!(
      resolve_link(&config, &sdl_env()),
      Err(ResolveError::UnsupportedConfiguration { .. })
    ));
  }

  #[test]
  fn extra_libraries_keep_recipe_invariants() {
    let config = BuildConfiguration::new(Platform::Linux, false, true);
    let recipe = resolve_link(&config, &sdl_env())
      .unwrap()
      .with_extra_libraries(&["SDL2".to_string(), "neuik".to_string(), "rt".to_string()]);

    assert_eq!(recipe.libraries.iter().filter(|l| *l == "SDL2").count(), 1);
    assert!(!recipe.libraries.contains(&"neuik".to_string()));
    assert_eq!(recipe.libraries.last().map(String::as_str), Some("rt"));
  }
}
