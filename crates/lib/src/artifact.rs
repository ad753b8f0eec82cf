//! Scoped artifacts: write a JSON file, run an action, delete the file.
//!
//! The file is removed on every exit path. On success a failed delete is
//! reported as an error; when the action already failed, the delete is best
//! effort and its own failure is only logged, so the action's error wins.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{Result, capture};

/// A JSON file that exists on disk for as long as this value is alive.
///
/// Call [`ArtifactScope::release`] to delete it and observe failures. If the
/// scope is dropped without being released (an error path or a panic), the
/// file is deleted on drop.
#[derive(Debug)]
pub struct ArtifactScope {
  path: PathBuf,
  /// Parent directory created for this artifact, removed again on release if empty.
  created_dir: Option<PathBuf>,
  released: bool,
}

impl ArtifactScope {
  /// Serialize `document` as pretty-printed JSON and write it to `path`.
  ///
  /// Missing parent directories are created.
  pub fn write<D>(path: &Path, document: &D) -> Result<Self>
  where
    D: Serialize + ?Sized,
  {
    let json = capture(|| serde_json::to_string_pretty(document))?;

    let mut created_dir = None;
    if let Some(parent) = path.parent() {
      if !parent.as_os_str().is_empty() && !parent.exists() {
        capture(|| fs::create_dir_all(parent))?;
        created_dir = Some(parent.to_path_buf());
      }
    }

    // From here on a failed write is cleaned up by drop.
    let scope = Self {
      path: path.to_path_buf(),
      created_dir,
      released: false,
    };
    capture(|| fs::write(&scope.path, json))?;
    debug!(path = %scope.path.display(), "wrote artifact");

    Ok(scope)
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  /// Delete the artifact (and any directory created for it).
  ///
  /// If a step fails, drop still makes a best-effort pass over both.
  pub fn release(mut self) -> Result<()> {
    capture(|| fs::remove_file(&self.path))?;
    debug!(path = %self.path.display(), "removed artifact");

    if let Some(dir) = &self.created_dir {
      if is_empty_dir(dir) {
        capture(|| fs::remove_dir(dir))?;
      }
    }
    self.released = true;
    Ok(())
  }
}

impl Drop for ArtifactScope {
  fn drop(&mut self) {
    if self.released {
      return;
    }

    match fs::remove_file(&self.path) {
      Ok(()) => debug!(path = %self.path.display(), "removed artifact after failure"),
      Err(e) if e.kind() == io::ErrorKind::NotFound => {}
      Err(e) => warn!(path = %self.path.display(), error = %e, "failed to remove artifact"),
    }

    if let Some(dir) = &self.created_dir {
      if is_empty_dir(dir) {
        if let Err(e) = fs::remove_dir(dir) {
          warn!(path = %dir.display(), error = %e, "failed to remove artifact directory");
        }
      }
    }
  }
}

fn is_empty_dir(dir: &Path) -> bool {
  fs::read_dir(dir).map(|mut entries| entries.next().is_none()).unwrap_or(false)
}

/// Write `document` to `path`, run `action`, then delete the file.
///
/// Returns the action's outcome. Scopes nest: both files of two nested calls
/// exist only while the innermost action runs.
pub fn with_artifact<D, T, F>(path: &Path, document: &D, action: F) -> Result<T>
where
  D: Serialize + ?Sized,
  F: FnOnce() -> Result<T>,
{
  let scope = ArtifactScope::write(path, document)?;

  match action() {
    Ok(value) => {
      scope.release()?;
      Ok(value)
    }
    Err(err) => {
      drop(scope);
      Err(err)
    }
  }
}
