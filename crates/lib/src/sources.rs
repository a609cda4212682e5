//! Source manifest of the NEUIK library.
//!
//! The manifest is an invariant base list shared by every platform followed by
//! exactly one platform-specific suffix. Order is kept stable so that build
//! tools see the same input list for the same configuration.

use serde::{Deserialize, Serialize};

use crate::consts::SRC_DIR;
use crate::platform::Platform;

/// Translation units compiled on every platform.
const BASE_SOURCES: &[&str] = &[
  "NEUIK_neuik.c",
  "neuik_classes.c",
  "neuik_internal.c",
  "neuik_TextBlock.c",
  "NEUIK_error.c",
  "NEUIK_error_CrashReporter.c",
  "NEUIK_render.c",
  "NEUIK_Callback.c",
  "NEUIK_Event.c",
  "NEUIK_FontSet.c",
  "NEUIK_Window.c",
  "NEUIK_WindowConfig.c",
  "NEUIK_Container.c",
  "NEUIK_Element.c",
  "NEUIK_Frame.c",
  "NEUIK_FlowGroup.c",
  "NEUIK_Image.c",
  "NEUIK_ImageConfig.c",
  "NEUIK_Label.c",
  "NEUIK_LabelConfig.c",
  "NEUIK_Line.c",
  "NEUIK_ListGroup.c",
  "NEUIK_ListRow.c",
  "NEUIK_Button.c",
  "NEUIK_ButtonConfig.c",
  "NEUIK_ComboBox.c",
  "NEUIK_ComboBoxConfig.c",
  // NEUIK_PopupMenu.c and NEUIK_PopupMenuConfig.c are not built yet
  "NEUIK_ProgressBar.c",
  "NEUIK_ProgressBarConfig.c",
  "NEUIK_Stack.c",
  "NEUIK_TextEdit.c",
  "NEUIK_TextEditConfig.c",
  "NEUIK_TextEntry.c",
  "NEUIK_TextEntryConfig.c",
  "NEUIK_ToggleButton.c",
  "NEUIK_ToggleButtonConfig.c",
  "NEUIK_HGroup.c",
  "NEUIK_VGroup.c",
  "neuik_StockImage_app_crashed.c",
  "MainMenu.c",
  "Menu.c",
  "MenuConfig.c",
  "MenuItem.c",
];

/// Stems of the per-platform translation units, completed with the platform suffix.
const PLATFORM_SOURCE_STEMS: &[&str] = &["NEUIK_platform", "NEUIK_FontSet"];

/// Ordered list of source paths making up one library build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceManifest {
  pub platform: Platform,
  pub files: Vec<String>,
}

impl SourceManifest {
  /// Build the manifest for `platform`: the base list plus that platform's suffix.
  pub fn for_platform(platform: Platform) -> Self {
    let mut files = base_sources();
    files.extend(platform_sources(platform));
    Self { platform, files }
  }

  pub fn len(&self) -> usize {
    self.files.len()
  }

  pub fn is_empty(&self) -> bool {
    self.files.is_empty()
  }
}

fn source_path(file: &str) -> String {
  format!("{}/{}", SRC_DIR, file)
}

/// Sources shared by every platform, in build order.
pub fn base_sources() -> Vec<String> {
  BASE_SOURCES.iter().map(|f| source_path(f)).collect()
}

/// Sources specific to `platform`, in build order.
pub fn platform_sources(platform: Platform) -> Vec<String> {
  PLATFORM_SOURCE_STEMS
    .iter()
    .map(|stem| source_path(&format!("{}_{}.c", stem, platform.source_suffix())))
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn manifest_is_base_followed_by_platform_suffix() {
    for platform in Platform::ALL {
      let manifest = SourceManifest::for_platform(platform);
      let base = base_sources();
      let suffix = platform_sources(platform);

      assert_eq!(manifest.len(), base.len() + suffix.len());
      assert_eq!(&manifest.files[..base.len()], base.as_slice());
      assert_eq!(&manifest.files[base.len()..], suffix.as_slice());
    }
  }

  #[test]
  fn no_other_platform_suffix_leaks_in() {
    for platform in Platform::ALL {
      let manifest = SourceManifest::for_platform(platform);
      for other in Platform::ALL.into_iter().filter(|p| *p != platform) {
        for file in platform_sources(other) {
          assert!(
            !manifest.files.contains(&file),
            "{} manifest contains {}",
            platform,
            file
          );
        }
      }
    }
  }

  #[test]
  fn darwin_sources_for_osx() {
    assert_eq!(
      platform_sources(Platform::Osx),
      vec!["src/NEUIK_platform_darwin.c", "src/NEUIK_FontSet_darwin.c"]
    );
  }

  #[test]
  fn base_manifest_has_no_duplicates() {
    let base = base_sources();
    let mut sorted = base.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted.len(), base.len());
    assert_eq!(base.len(), 43);
  }

  #[test]
  fn repeated_construction_does_not_accumulate() {
    let first = SourceManifest::for_platform(Platform::Linux);
    let _ = SourceManifest::for_platform(Platform::Windows);
    let second = SourceManifest::for_platform(Platform::Linux);
    assert_eq!(first, second);
  }
}
