//! Build, install and uninstall.
//!
//! Each operation is a strictly linear chain of steps: guards first, then the
//! side effects. The first failing step ends the chain and its error is
//! returned unchanged. Nothing is retried and no state is kept between calls.
//!
//! Build:
//! 1. derive the identity (blank or invalid names fail before any I/O)
//! 2. probe packager and editor, check the root exists, check neither the
//!    manifest nor the theme file exists
//! 3. write the manifest, write the theme, run the packager in the root
//! 4. delete the theme, delete the manifest
//!
//! Calls targeting the same root must not overlap: the manifest guard and the
//! artifact paths are not locked.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, warn};

use crate::artifact::with_artifact;
use crate::config::BuildConfig;
use crate::error::Result;
use crate::guard::{ensure_dependencies, ensure_no_manifest, ensure_no_theme_file, ensure_root};
use crate::identity::ThemeIdentity;
use crate::manifest::{ArtifactPaths, ManifestDocument, ThemeLayout};
use crate::process::{CommandRunner, SystemRunner, Toolchain};
use crate::theme::ThemeDocument;

/// Arguments passed to the packager.
pub const PACKAGE_ARGS: &[&str] = &["package"];

/// Where and with which tools to build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
  /// Directory the artifacts are written to and the packager runs in.
  pub root: PathBuf,
  pub layout: ThemeLayout,
  pub toolchain: Toolchain,
}

impl BuildOptions {
  pub fn new(root: impl Into<PathBuf>) -> Self {
    Self {
      root: root.into(),
      layout: ThemeLayout::default(),
      toolchain: Toolchain::default(),
    }
  }
}

/// Everything a build would write, computed without touching the disk.
#[derive(Debug, Clone, Serialize)]
pub struct Plan {
  pub identity: ThemeIdentity,
  pub version: String,
  pub paths: ArtifactPaths,
  pub manifest: ManifestDocument,
  pub theme: ThemeDocument,
}

/// Derive identity, version, paths and both documents for `config`.
pub fn plan(config: &BuildConfig, root: &Path, layout: ThemeLayout) -> Result<Plan> {
  let identity = ThemeIdentity::derive(&config.theme.name)?;
  let version = config.resolve_version();
  let paths = ArtifactPaths::derive(root, &identity, layout);
  let manifest = ManifestDocument::assemble(config, &identity, &version, &paths);

  Ok(Plan {
    identity,
    version,
    paths,
    manifest,
    theme: config.theme.clone(),
  })
}

/// Package `config` into `<identity>-<version>.vsix` inside `options.root`.
pub fn build(config: &BuildConfig, options: &BuildOptions) -> Result<Extension> {
  build_with(config, options, &SystemRunner)
}

/// [`build`] with an explicit [`CommandRunner`].
pub fn build_with<R>(config: &BuildConfig, options: &BuildOptions, runner: &R) -> Result<Extension>
where
  R: CommandRunner + ?Sized,
{
  let plan = plan(config, &options.root, options.layout)?;
  let root = options.root.as_path();
  let tools = &options.toolchain;

  info!(identity = %plan.identity, version = %plan.version, root = %root.display(), "building extension");

  ensure_dependencies(runner, tools)
    .and_then(|()| ensure_root(root))
    .and_then(|()| ensure_no_manifest(root))
    .and_then(|()| ensure_no_theme_file(&plan.paths.theme))
    .and_then(|()| {
      with_artifact(&plan.paths.manifest, &plan.manifest, || {
        with_artifact(&plan.paths.theme, &plan.theme, || {
          runner.run(&tools.packager, PACKAGE_ARGS, Some(root))
        })
      })
    })?;

  let extension = Extension::from_plan(config, plan, options);
  let package = extension.package_path();
  info!(package = %package.display(), "packaged extension");
  Ok(extension)
}

/// A packaged theme extension that can be installed into or removed from the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extension {
  config: BuildConfig,
  identity: ThemeIdentity,
  version: String,
  root: PathBuf,
  toolchain: Toolchain,
}

impl Extension {
  /// Handle for an extension packaged earlier.
  ///
  /// Uses the config's version, or a fresh timestamp version if it has none.
  pub fn new(config: &BuildConfig, root: impl Into<PathBuf>, toolchain: Toolchain) -> Result<Self> {
    let identity = ThemeIdentity::derive(&config.theme.name)?;
    let version = config.resolve_version();
    Ok(Self {
      config: stamp(config, &version),
      identity,
      version,
      root: root.into(),
      toolchain,
    })
  }

  fn from_plan(config: &BuildConfig, plan: Plan, options: &BuildOptions) -> Self {
    Self {
      config: stamp(config, &plan.version),
      identity: plan.identity,
      version: plan.version,
      root: options.root.clone(),
      toolchain: options.toolchain.clone(),
    }
  }

  /// The config this extension was built from, with its version filled in.
  pub fn config(&self) -> &BuildConfig {
    &self.config
  }

  pub fn identity(&self) -> &ThemeIdentity {
    &self.identity
  }

  pub fn version(&self) -> &str {
    &self.version
  }

  pub fn root(&self) -> &Path {
    &self.root
  }

  /// `<publisher>.<identity>`
  pub fn extension_id(&self) -> String {
    self.identity.extension_id(&self.config.publisher)
  }

  pub fn package_file_name(&self) -> String {
    self.identity.package_file_name(&self.version)
  }

  pub fn package_path(&self) -> PathBuf {
    self.root.join(self.package_file_name())
  }

  /// Install the packaged artifact, replacing any installed copy.
  ///
  /// Returns the handle again so calls can be chained with `and_then`.
  pub fn install(&self) -> Result<&Self> {
    self.install_with(&SystemRunner)
  }

  /// [`Extension::install`] with an explicit [`CommandRunner`].
  pub fn install_with<R>(&self, runner: &R) -> Result<&Self>
  where
    R: CommandRunner + ?Sized,
  {
    let editor = &self.toolchain.editor;
    let package = self.package_file_name();

    ensure_dependencies(runner, &self.toolchain)
      .and_then(|()| ensure_root(&self.root))
      .and_then(|()| self.uninstall_with(runner))
      .and_then(|_| {
        info!(package = %package, "installing extension");
        runner.run(editor, &["--install-extension", &package], Some(&self.root))
      })
      .map(|()| self)
  }

  /// Ensure the extension is not installed.
  ///
  /// Always succeeds: a failing uninstall (including "not installed") is logged and ignored.
  pub fn uninstall(&self) -> Result<&Self> {
    self.uninstall_with(&SystemRunner)
  }

  /// [`Extension::uninstall`] with an explicit [`CommandRunner`].
  pub fn uninstall_with<R>(&self, runner: &R) -> Result<&Self>
  where
    R: CommandRunner + ?Sized,
  {
    let id = self.extension_id();
    info!(extension = %id, "uninstalling extension");

    if let Err(e) = runner.run(&self.toolchain.editor, &["--uninstall-extension", &id], Some(&self.root)) {
      warn!(extension = %id, error = %e, "uninstall failed, treating extension as not installed");
    }
    Ok(self)
  }
}

fn stamp(config: &BuildConfig, version: &str) -> BuildConfig {
  let mut stamped = config.clone();
  stamped.version = Some(version.to_string());
  stamped
}
