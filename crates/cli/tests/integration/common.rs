//! Shared test helpers for CLI integration tests.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

/// Fake packager: logs its arguments and, on `package`, checks both artifacts
/// are present, copies the manifest aside and drops `<name>-<version>.vsix`.
/// `FAKE_VSCE_FAIL=1` makes `package` exit non-zero.
const FAKE_VSCE: &str = r#"#!/bin/sh
echo "vsce $*" >> "@DIR@/calls.log"
case "$1" in
  --version) exit 0 ;;
  package)
    [ "$FAKE_VSCE_FAIL" = "1" ] && exit 1
    [ -f package.json ] || exit 2
    cp package.json "@DIR@/manifest.seen.json"
    name=$(sed -n 's/^  "name": "\(.*\)",$/\1/p' package.json)
    version=$(sed -n 's/^  "version": "\(.*\)",$/\1/p' package.json)
    theme=$(sed -n 's/^ *"path": "\.\/\(.*\)",$/\1/p' package.json)
    [ -f "$theme" ] || exit 3
    cp "$theme" "@DIR@/theme.seen.json"
    touch "$name-$version.vsix"
    ;;
esac
"#;

/// Fake editor CLI: logs its arguments and tracks one installed extension.
/// Uninstalling when nothing is installed exits non-zero, like the real CLI.
const FAKE_CODE: &str = r#"#!/bin/sh
echo "code $*" >> "@DIR@/calls.log"
case "$1" in
  --version) exit 0 ;;
  --install-extension)
    [ -f "$2" ] || exit 4
    echo "$2" > "@DIR@/installed"
    ;;
  --uninstall-extension)
    [ -f "@DIR@/installed" ] || exit 1
    rm "@DIR@/installed"
    ;;
esac
"#;

/// Get path to a fixture file.
pub fn fixture_path(name: &str) -> PathBuf {
  PathBuf::from(env!("CARGO_MANIFEST_DIR"))
    .join("tests")
    .join("fixtures")
    .join(name)
}

/// Isolated test environment.
///
/// Each test gets its own temporary directory holding the package root, the
/// fake tools and their call log.
pub struct TestEnv {
  pub temp: TempDir,
  pub root: PathBuf,
  pub config_path: PathBuf,
}

impl TestEnv {
  /// Create from a fixture config file.
  pub fn from_fixture(name: &str) -> Self {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("root");
    fs::create_dir(&root).unwrap();

    let config_path = temp.path().join(name);
    fs::copy(fixture_path(name), &config_path).unwrap();

    let env = Self {
      temp,
      root,
      config_path,
    };
    env.install_tool("vsce", FAKE_VSCE);
    env.install_tool("code", FAKE_CODE);
    env
  }

  fn install_tool(&self, name: &str, template: &str) {
    let bin = self.temp.path().join("bin");
    fs::create_dir_all(&bin).unwrap();

    let path = bin.join(name);
    let script = template.replace("@DIR@", &self.temp.path().to_string_lossy());
    fs::write(&path, script).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
  }

  pub fn tool(&self, name: &str) -> PathBuf {
    self.temp.path().join("bin").join(name)
  }

  /// A brush command wired to the fake tools, targeting this env's config and root.
  pub fn brush_cmd(&self, subcommand: &str) -> Command {
    self.brush_cmd_for(subcommand, &self.config_path)
  }

  /// Like [`TestEnv::brush_cmd`], with a different config file.
  pub fn brush_cmd_for(&self, subcommand: &str, config: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("brush");
    cmd
      .env_remove("RUST_LOG")
      .env_remove("FAKE_VSCE_FAIL")
      .env("BRUSH_PACKAGER", self.tool("vsce"))
      .env("BRUSH_EDITOR", self.tool("code"))
      .arg(subcommand)
      .arg(config)
      .arg("--root")
      .arg(&self.root);
    cmd
  }

  /// Calls made to the fake tools, in order.
  pub fn calls(&self) -> Vec<String> {
    fs::read_to_string(self.temp.path().join("calls.log"))
      .map(|log| log.lines().map(str::to_string).collect())
      .unwrap_or_default()
  }

  /// Read a file the fake packager copied aside.
  pub fn seen(&self, name: &str) -> serde_json::Value {
    let content = fs::read_to_string(self.temp.path().join(name)).unwrap();
    serde_json::from_str(&content).unwrap()
  }

  pub fn installed(&self) -> Option<String> {
    fs::read_to_string(self.temp.path().join("installed"))
      .ok()
      .map(|s| s.trim().to_string())
  }

  /// Sorted entries of the package root.
  pub fn root_entries(&self) -> Vec<String> {
    entries(&self.root)
  }
}

pub fn entries(dir: &Path) -> Vec<String> {
  let mut names: Vec<String> = fs::read_dir(dir)
    .unwrap()
    .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
    .collect();
  names.sort();
  names
}
