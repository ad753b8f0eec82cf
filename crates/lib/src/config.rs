//! User-supplied build configuration.
//!
//! A [`BuildConfig`] describes one theme plus the package metadata around it.
//! It is read-only to the pipeline: derived documents are computed from it,
//! but the value the caller passes in is never modified.

use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, anyhow};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result, capture};
use crate::theme::ThemeDocument;

/// Engine constraint used when the config does not name one.
pub const DEFAULT_ENGINE: &str = "^1.0.0";

/// License written to the manifest when the config does not name one.
pub const DEFAULT_LICENSE: &str = "Unlicense";

/// Package metadata and the theme to package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfig {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub display_name: Option<String>,
  pub publisher: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub license: Option<String>,
  /// Semantic version of the package. Stamped at build time when absent.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub version: Option<String>,
  /// Editor engine constraint, e.g. `^1.80.0`.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub engine: Option<String>,
  pub theme: ThemeDocument,
}

impl BuildConfig {
  pub fn new(publisher: impl Into<String>, theme: ThemeDocument) -> Self {
    Self {
      description: None,
      display_name: None,
      publisher: publisher.into(),
      license: None,
      version: None,
      engine: None,
      theme,
    }
  }

  /// Load a config file, choosing the parser from the file extension.
  ///
  /// `.json` is parsed as JSON, `.yaml` and `.yml` as YAML.
  pub fn load(path: &Path) -> Result<Self> {
    let content = capture(|| {
      fs::read_to_string(path).with_context(|| format!("failed to read config: {}", path.display()))
    })?;

    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
    let parsed = match extension {
      "json" => Self::from_json_str(&content),
      "yaml" | "yml" => Self::from_yaml_str(&content),
      other => Err(Error::unknown(anyhow!(
        "unsupported config format `{}` for {} (expected .json, .yaml or .yml)",
        other,
        path.display()
      ))),
    };

    parsed.map_err(|e| match e {
      Error::Unknown(cause) => Error::Unknown(cause.context(format!("invalid config: {}", path.display()))),
      named => named,
    })
  }

  pub fn from_json_str(content: &str) -> Result<Self> {
    capture(|| serde_json::from_str(content))
  }

  pub fn from_yaml_str(content: &str) -> Result<Self> {
    capture(|| serde_yaml::from_str(content))
  }

  /// Display name shown in the marketplace, falling back to the theme name.
  pub fn display_name(&self) -> &str {
    self.display_name.as_deref().unwrap_or(&self.theme.name)
  }

  pub fn engine(&self) -> &str {
    self.engine.as_deref().unwrap_or(DEFAULT_ENGINE)
  }

  pub fn license(&self) -> &str {
    self.license.as_deref().unwrap_or(DEFAULT_LICENSE)
  }

  /// The configured version, or a fresh timestamp version when none is set.
  pub fn resolve_version(&self) -> String {
    match &self.version {
      Some(version) => version.clone(),
      None => timestamp_version(SystemTime::now()),
    }
  }
}

/// `0.1.<unix-millis>`: unique per build, monotonically increasing.
pub fn timestamp_version(now: SystemTime) -> String {
  let millis = now.duration_since(UNIX_EPOCH).map(|d| d.as_millis()).unwrap_or_default();
  format!("0.1.{}", millis)
}
