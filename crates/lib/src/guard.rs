//! Precondition guards.
//!
//! Each guard inspects external state and either passes or fails with a named
//! error. Guards never write anything.

use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::manifest::manifest_path;
use crate::process::{CommandRunner, Toolchain};

const VERSION_FLAG: &[&str] = &["--version"];

/// Probe both external tools. The packager is checked first, so it is the one
/// reported when both are missing.
pub fn ensure_dependencies<R>(runner: &R, tools: &Toolchain) -> Result<()>
where
  R: CommandRunner + ?Sized,
{
  runner
    .run(&tools.packager, VERSION_FLAG, None)
    .map_err(|e| {
      debug!(program = %tools.packager, error = %e, "packager probe failed");
      Error::MissingPackager {
        program: tools.packager.clone(),
      }
    })
    .and_then(|()| {
      runner.run(&tools.editor, VERSION_FLAG, None).map_err(|e| {
        debug!(program = %tools.editor, error = %e, "editor probe failed");
        Error::MissingEditor {
          program: tools.editor.clone(),
        }
      })
    })
}

pub fn ensure_root(root: &Path) -> Result<()> {
  if !root.exists() {
    return Err(Error::RootMissing {
      path: root.to_path_buf(),
    });
  }
  Ok(())
}

/// Refuse to run when a manifest already exists at `root`.
pub fn ensure_no_manifest(root: &Path) -> Result<()> {
  let path = manifest_path(root);
  if path.exists() {
    return Err(Error::ManifestConflict { path });
  }
  Ok(())
}

/// Refuse to run when something already exists where the theme file goes.
pub fn ensure_no_theme_file(path: &Path) -> Result<()> {
  if path.exists() {
    return Err(Error::ThemeConflict {
      path: path.to_path_buf(),
    });
  }
  Ok(())
}
