//! Implementation of the `brush uninstall` command.

use anyhow::Result;

use brush_lib::Raise;
use brush_lib::pipeline::Extension;

use super::TargetArgs;
use crate::output::print_success;

/// Make sure the extension is not installed. Not being installed is not an error.
pub fn cmd_uninstall(target: &TargetArgs) -> Result<()> {
  let (config, options) = target.load()?;

  let extension = Extension::new(&config, &options.root, options.toolchain).into_report()?;
  extension.uninstall().into_report()?;

  print_success(&format!("{} is not installed", extension.extension_id()));
  Ok(())
}
