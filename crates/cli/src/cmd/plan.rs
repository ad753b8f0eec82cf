//! Implementation of the `brush plan` command.
//!
//! Prints the identity, artifact paths and documents a build would produce.
//! Nothing is written and no external tool is run.

use anyhow::Result;

use brush_lib::Raise;
use brush_lib::pipeline::{PACKAGE_ARGS, plan};

use super::TargetArgs;
use crate::output::{OutputFormat, print_info, print_json, print_stat, print_step};

pub fn cmd_plan(target: &TargetArgs, format: OutputFormat) -> Result<()> {
  let (config, options) = target.load()?;
  let plan = plan(&config, &options.root, options.layout).into_report()?;

  if format.is_json() {
    return print_json(&plan);
  }

  print_info(&format!("Plan for {}", plan.identity));
  print_stat("Type", plan.theme.kind.as_str());
  print_stat("Version", &plan.version);
  print_stat("Manifest", &plan.paths.manifest.display().to_string());
  print_stat("Theme", &plan.paths.theme.display().to_string());
  print_stat("Package", &options.root.join(plan.identity.package_file_name(&plan.version)).display().to_string());
  println!();
  print_step(&format!("{} {}", options.toolchain.packager, PACKAGE_ARGS.join(" ")));

  Ok(())
}
