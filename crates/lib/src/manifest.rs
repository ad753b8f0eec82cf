//! Package manifest assembly and artifact path derivation.
//!
//! Everything here is pure: no filesystem access, no processes.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::BuildConfig;
use crate::identity::ThemeIdentity;
use crate::theme::ThemeType;

/// File name of the package manifest at the root.
pub const MANIFEST_FILE: &str = "package.json";

/// Directory holding theme files in [`ThemeLayout::Subdirectory`].
pub const THEMES_DIR: &str = "themes";

/// Engine key the constraint is recorded under.
pub const ENGINE_KEY: &str = "vscode";

/// Where the theme file is placed relative to the root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemeLayout {
  /// `<root>/<identity>.json`
  #[default]
  Flat,
  /// `<root>/themes/<identity>.json`
  Subdirectory,
}

/// UI theme token the packager expects for each [`ThemeType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UiTheme {
  #[serde(rename = "vs")]
  Vs,
  #[serde(rename = "vs-dark")]
  VsDark,
  #[serde(rename = "hc-black")]
  HcBlack,
}

impl From<ThemeType> for UiTheme {
  fn from(kind: ThemeType) -> Self {
    match kind {
      ThemeType::Light => UiTheme::Vs,
      ThemeType::Dark => UiTheme::VsDark,
      ThemeType::Hc => UiTheme::HcBlack,
    }
  }
}

/// On-disk locations of the two ephemeral artifacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactPaths {
  pub manifest: PathBuf,
  pub theme: PathBuf,
  /// Theme path as referenced from the manifest, e.g. `./themes/hello-world.json`.
  pub theme_relative: String,
}

impl ArtifactPaths {
  pub fn derive(root: &Path, identity: &ThemeIdentity, layout: ThemeLayout) -> Self {
    let file_name = identity.theme_file_name();
    let (theme, theme_relative) = match layout {
      ThemeLayout::Flat => (root.join(&file_name), format!("./{}", file_name)),
      ThemeLayout::Subdirectory => (
        root.join(THEMES_DIR).join(&file_name),
        format!("./{}/{}", THEMES_DIR, file_name),
      ),
    };

    Self {
      manifest: manifest_path(root),
      theme,
      theme_relative,
    }
  }
}

pub fn manifest_path(root: &Path) -> PathBuf {
  root.join(MANIFEST_FILE)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeContribution {
  pub label: String,
  pub path: String,
  pub ui_theme: UiTheme,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributes {
  pub themes: Vec<ThemeContribution>,
}

/// The package manifest consumed by the packager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestDocument {
  pub name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  pub display_name: String,
  pub publisher: String,
  pub license: String,
  pub version: String,
  pub contributes: Contributes,
  pub engines: BTreeMap<String, String>,
}

impl ManifestDocument {
  pub fn assemble(config: &BuildConfig, identity: &ThemeIdentity, version: &str, paths: &ArtifactPaths) -> Self {
    Self {
      name: identity.to_string(),
      description: config.description.clone(),
      display_name: config.display_name().to_string(),
      publisher: config.publisher.clone(),
      license: config.license().to_string(),
      version: version.to_string(),
      contributes: Contributes {
        themes: vec![ThemeContribution {
          label: identity.to_string(),
          path: paths.theme_relative.clone(),
          ui_theme: config.theme.kind.into(),
        }],
      },
      engines: BTreeMap::from([(ENGINE_KEY.to_string(), config.engine().to_string())]),
    }
  }
}
