use anyhow::Result;

use neuik_build_lib::{DependencyEnv, Platform};

use crate::output::{print_list, print_stat, print_warning};

pub fn cmd_info() -> Result<()> {
  println!("System:");
  match Platform::current() {
    Some(platform) => {
      print_stat("Platform", platform.as_str());
      print_stat("Define", platform.define());
      print_stat("Sources", &format!("*_{}.c", platform.source_suffix()));
    }
    None => print_warning(&format!(
      "Host platform '{}' is not supported, pass --platform to resolve",
      std::env::consts::OS
    )),
  }

  println!();
  let deps = DependencyEnv::from_env();
  for set in deps.iter() {
    print_list(set.dependency.lib_name(), &set.libs);
    print_stat("Library paths", &set.lib_paths.join(", "));
    print_stat("Includes", &set.includes.join(", "));
  }

  Ok(())
}
