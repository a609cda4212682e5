use neuik_build_lib::consts::LIB_NAME;
use neuik_build_lib::sources::{base_sources, platform_sources};
use neuik_build_lib::{BuildConfiguration, DependencyEnv, Platform, ResolveError, resolve};

fn every_configuration() -> Vec<BuildConfiguration> {
  let mut configs = Vec::new();
  for platform in Platform::ALL {
    for debug in [true, false] {
      for static_link in [true, false] {
        configs.push(BuildConfiguration::new(platform, debug, static_link));
      }
    }
  }
  configs
}

#[test]
fn every_configuration_resolves() {
  let deps = DependencyEnv::default();
  for config in every_configuration() {
    let resolved = resolve(&config, &deps).unwrap();

    let mut expected = base_sources();
    expected.extend(platform_sources(config.platform));
    assert_eq!(resolved.sources, expected);

    let optimization: Vec<_> = resolved.flags.iter().filter(|f| f.starts_with("-O")).collect();
    assert_eq!(optimization, vec![if config.debug { "-O0" } else { "-O2" }]);

    let name = LIB_NAME.to_string();
    assert_eq!(resolved.link.static_libraries.contains(&name), config.static_link);
    assert_eq!(resolved.link.libraries.contains(&name), !config.static_link);

    let mut unique = resolved.link.libraries.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), resolved.link.libraries.len());
  }
}

#[test]
fn unsupported_platform_is_deterministic() {
  for _ in 0..3 {
    let err = "solaris".parse::<Platform>().unwrap_err();
    assert_eq!(err, ResolveError::UnsupportedPlatform("solaris".to_string()));
  }
}
