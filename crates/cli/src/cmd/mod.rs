mod build;
mod install;
mod plan;
mod uninstall;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, ValueEnum};
use tracing::debug;

use brush_lib::Raise;
use brush_lib::config::BuildConfig;
use brush_lib::manifest::ThemeLayout;
use brush_lib::pipeline::BuildOptions;
use brush_lib::process::Toolchain;

pub use build::cmd_build;
pub use install::cmd_install;
pub use plan::cmd_plan;
pub use uninstall::cmd_uninstall;

/// Theme file placement inside the root.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum Layout {
  /// `<root>/<theme>.json`
  #[default]
  Flat,
  /// `<root>/themes/<theme>.json`
  Themes,
}

impl From<Layout> for ThemeLayout {
  fn from(layout: Layout) -> Self {
    match layout {
      Layout::Flat => ThemeLayout::Flat,
      Layout::Themes => ThemeLayout::Subdirectory,
    }
  }
}

/// Arguments shared by every command: which theme, where, with which tools.
#[derive(Debug, Args)]
pub struct TargetArgs {
  /// Path to the theme config (.json, .yaml or .yml)
  pub config: PathBuf,

  /// Directory the extension is packaged in
  #[arg(short, long, default_value = ".")]
  pub root: PathBuf,

  /// Where the theme file is placed inside the root
  #[arg(long, value_enum, default_value_t)]
  pub layout: Layout,

  /// Packaging tool to run (default: $BRUSH_PACKAGER or vsce)
  #[arg(long, value_name = "PROGRAM")]
  pub packager: Option<String>,

  /// Editor CLI to run (default: $BRUSH_EDITOR or code)
  #[arg(long, value_name = "PROGRAM")]
  pub editor: Option<String>,
}

impl TargetArgs {
  /// Load the config and resolve root, layout and toolchain.
  ///
  /// A root that cannot be canonicalized is passed through as given, so the
  /// pipeline's own root guard reports it.
  pub fn load(&self) -> Result<(BuildConfig, BuildOptions)> {
    let config = BuildConfig::load(&self.config).into_report()?;
    let root = dunce::canonicalize(&self.root).unwrap_or_else(|_| self.root.clone());

    let mut toolchain = Toolchain::from_env();
    if let Some(packager) = &self.packager {
      toolchain.packager = packager.clone();
    }
    if let Some(editor) = &self.editor {
      toolchain.editor = editor.clone();
    }

    debug!(config = %self.config.display(), root = %root.display(), ?toolchain, "resolved target");

    Ok((
      config,
      BuildOptions {
        root,
        layout: self.layout.into(),
        toolchain,
      },
    ))
  }
}
