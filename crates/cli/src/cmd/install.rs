//! Implementation of the `brush install` command.

use anyhow::{Context, Result, bail};

use brush_lib::Raise;
use brush_lib::pipeline::{Extension, build};

use super::TargetArgs;
use crate::output::{print_stat, print_success};

/// Build (unless `no_build`) and install the extension.
///
/// Any installed copy is removed first; that removal never fails the command.
///
/// # Errors
///
/// With `no_build`, the config must pin a `version`: otherwise there is no way
/// to know which `.vsix` to install.
pub fn cmd_install(target: &TargetArgs, no_build: bool) -> Result<()> {
  let (config, options) = target.load()?;

  let extension = if no_build {
    if config.version.is_none() {
      bail!(
        "--no-build needs an explicit `version` in {}",
        target.config.display()
      );
    }
    Extension::new(&config, &options.root, options.toolchain.clone()).into_report()?
  } else {
    build(&config, &options).into_report().context("Build failed")?
  };

  extension.install().into_report().context("Install failed")?;

  print_success(&format!("Installed {}", extension.extension_id()));
  print_stat("Package", &extension.package_path().display().to_string());

  Ok(())
}
