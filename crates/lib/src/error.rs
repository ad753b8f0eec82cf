//! Error and outcome types for the packaging pipeline.
//!
//! Every pipeline step returns [`Result`], the two-variant std outcome. Steps
//! are chained with `and_then` (or `?`), so the first failure short-circuits the
//! remainder of the chain and is handed back to the caller unchanged.
//!
//! Failures are either a named precondition error or [`Error::Unknown`], an
//! opaque wrapper around whatever the filesystem or a spawned process reported.
//! [`capture`] is the boundary helper that performs that wrapping.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Stable, closed classification of pipeline failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
  MissingPackager,
  MissingEditor,
  RootMissing,
  ManifestConflict,
  ThemeConflict,
  MissingName,
  InvalidName,
  Unknown,
}

impl ErrorKind {
  /// Machine-readable code for the kind.
  pub fn as_str(self) -> &'static str {
    match self {
      ErrorKind::MissingPackager => "ERR_MISSING_DEPENDENCY_PACKAGER",
      ErrorKind::MissingEditor => "ERR_MISSING_DEPENDENCY_EDITOR",
      ErrorKind::RootMissing => "ERR_ROOT_DOES_NOT_EXIST",
      ErrorKind::ManifestConflict => "ERR_PACKAGE_CONF_OVERRIDE",
      ErrorKind::ThemeConflict => "ERR_THEME_CONF_OVERRIDE",
      ErrorKind::MissingName => "ERR_MISSING_CONF_NAME",
      ErrorKind::InvalidName => "ERR_INVALID_CONF_NAME",
      ErrorKind::Unknown => "ERR_UNKNOWN",
    }
  }
}

impl fmt::Display for ErrorKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Errors produced while building, installing or uninstalling an extension.
#[derive(Debug, Error)]
pub enum Error {
  /// The packaging tool did not answer its version probe.
  #[error("packaging tool `{program}` is not available")]
  MissingPackager { program: String },

  /// The editor CLI did not answer its version probe.
  #[error("editor CLI `{program}` is not available")]
  MissingEditor { program: String },

  #[error("root directory does not exist: {}", path.display())]
  RootMissing { path: PathBuf },

  /// A manifest is already present; it is never overwritten.
  #[error("refusing to overwrite existing manifest: {}", path.display())]
  ManifestConflict { path: PathBuf },

  /// A file already sits where the theme file would be written.
  #[error("refusing to overwrite existing file at theme path: {}", path.display())]
  ThemeConflict { path: PathBuf },

  #[error("theme name is empty")]
  MissingName,

  /// The derived identity is not a valid package name.
  #[error("theme name {name:?} gives invalid identity {identity:?}: only ASCII letters, digits and '-' are allowed, starting with a letter or digit")]
  InvalidName { name: String, identity: String },

  /// Any unanticipated filesystem or process failure. The original cause is kept intact.
  #[error(transparent)]
  Unknown(anyhow::Error),
}

impl Error {
  /// Wrap an arbitrary failure as an opaque error.
  pub fn unknown<E>(cause: E) -> Self
  where
    E: Into<anyhow::Error>,
  {
    Error::Unknown(cause.into())
  }

  pub fn kind(&self) -> ErrorKind {
    match self {
      Error::MissingPackager { .. } => ErrorKind::MissingPackager,
      Error::MissingEditor { .. } => ErrorKind::MissingEditor,
      Error::RootMissing { .. } => ErrorKind::RootMissing,
      Error::ManifestConflict { .. } => ErrorKind::ManifestConflict,
      Error::ThemeConflict { .. } => ErrorKind::ThemeConflict,
      Error::MissingName => ErrorKind::MissingName,
      Error::InvalidName { .. } => ErrorKind::InvalidName,
      Error::Unknown(_) => ErrorKind::Unknown,
    }
  }

  /// The wrapped cause of an opaque error, if this is one.
  pub fn peek(&self) -> Option<&anyhow::Error> {
    match self {
      Error::Unknown(cause) => Some(cause),
      _ => None,
    }
  }

  /// Convert into a report for top-level callers.
  ///
  /// Opaque errors surface their original cause untouched. Named errors are
  /// tagged with their [`ErrorKind`] code.
  pub fn into_report(self) -> anyhow::Error {
    match self {
      Error::Unknown(cause) => cause,
      named => {
        let kind = named.kind();
        anyhow::Error::new(named).context(kind)
      }
    }
  }
}

/// Run a fallible platform operation, capturing its failure as [`Error::Unknown`].
///
/// Every filesystem access and process spawn in the pipeline goes through here.
pub fn capture<T, E, F>(operation: F) -> Result<T>
where
  F: FnOnce() -> std::result::Result<T, E>,
  E: Into<anyhow::Error>,
{
  operation().map_err(Error::unknown)
}

/// Escape hatch for top-level callers and tests.
///
/// Not used inside the pipeline itself.
pub trait Raise<T> {
  /// Return the success value, or panic with the failure.
  ///
  /// Opaque failures panic with the original cause (including its chain);
  /// named failures panic with their kind code.
  fn raise(self) -> T;

  /// Convert into an `anyhow` result via [`Error::into_report`].
  fn into_report(self) -> anyhow::Result<T>;
}

impl<T> Raise<T> for Result<T> {
  fn raise(self) -> T {
    match self {
      Ok(value) => value,
      Err(Error::Unknown(cause)) => panic!("{cause:?}"),
      Err(named) => panic!("{}: {}", named.kind(), named),
    }
  }

  fn into_report(self) -> anyhow::Result<T> {
    self.map_err(Error::into_report)
  }
}
