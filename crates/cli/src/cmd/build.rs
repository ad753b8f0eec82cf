//! Implementation of the `brush build` command.

use std::time::Instant;

use anyhow::{Context, Result};

use brush_lib::Raise;
use brush_lib::pipeline::build;

use super::TargetArgs;
use crate::output::{format_duration, print_stat, print_success};

/// Package the theme into `<root>/<identity>-<version>.vsix`.
///
/// The manifest and theme files exist only while the packager runs.
pub fn cmd_build(target: &TargetArgs) -> Result<()> {
  let (config, options) = target.load()?;
  let started = Instant::now();

  let extension = build(&config, &options).into_report().context("Build failed")?;

  print_success(&format!("Packaged {}", extension.package_file_name()));
  print_stat("Extension", &extension.extension_id());
  print_stat("Version", extension.version());
  print_stat("Package", &extension.package_path().display().to_string());
  print_stat("Took", &format_duration(started.elapsed()));

  Ok(())
}
