//! Theme identity derivation.

use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};

/// Kebab-cased, lower-cased identifier derived from a theme's display name.
///
/// Names the theme file, the manifest `name` and the packaged artifact.
/// Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ThemeIdentity(String);

impl ThemeIdentity {
  /// Trim, replace spaces with hyphens, lower-case.
  ///
  /// Blank names yield [`Error::MissingName`]. The result must be a valid
  /// package name (ASCII letters, digits and `-`, not starting with `-`),
  /// otherwise [`Error::InvalidName`]. This also keeps path separators and
  /// `..` out of the artifact paths joined onto the root.
  pub fn derive(name: &str) -> Result<Self> {
    let id = name.trim().replace(' ', "-").to_lowercase();
    if id.is_empty() {
      return Err(Error::MissingName);
    }
    if !is_package_name(&id) {
      return Err(Error::InvalidName {
        name: name.to_string(),
        identity: id,
      });
    }
    Ok(Self(id))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  /// `<identity>.json`
  pub fn theme_file_name(&self) -> String {
    format!("{}.json", self.0)
  }

  /// `<identity>-<version>.vsix`, the file the packager produces.
  pub fn package_file_name(&self, version: &str) -> String {
    format!("{}-{}.vsix", self.0, version)
  }

  /// `<publisher>.<identity>`, the id the editor installs the extension under.
  pub fn extension_id(&self, publisher: &str) -> String {
    format!("{}.{}", publisher, self.0)
  }
}

fn is_package_name(id: &str) -> bool {
  id.starts_with(|c: char| c.is_ascii_alphanumeric()) && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

impl fmt::Display for ThemeIdentity {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}
