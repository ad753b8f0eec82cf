//! Install and uninstall command integration tests.

use std::fs;

use predicates::prelude::*;

use super::common::TestEnv;

#[test]
fn install_builds_then_replaces_installed_copy() {
  let env = TestEnv::from_fixture("hello_world.yaml");

  env
    .brush_cmd("install")
    .assert()
    .success()
    .stdout(predicate::str::contains("Installed acme.hello-world"));

  assert_eq!(
    env.calls(),
    vec![
      "vsce --version",
      "code --version",
      "vsce package",
      "vsce --version",
      "code --version",
      "code --uninstall-extension acme.hello-world",
      "code --install-extension hello-world-1.2.3.vsix",
    ]
  );
  assert_eq!(env.installed().as_deref(), Some("hello-world-1.2.3.vsix"));
}

#[test]
fn reinstall_uninstalls_previous_copy() {
  let env = TestEnv::from_fixture("hello_world.yaml");
  fs::write(env.root.join("hello-world-1.2.3.vsix"), "vsix").unwrap();

  env.brush_cmd("install").arg("--no-build").assert().success();
  env.brush_cmd("install").arg("--no-build").assert().success();

  let uninstalls = env
    .calls()
    .into_iter()
    .filter(|c| c.starts_with("code --uninstall-extension"))
    .count();
  assert_eq!(uninstalls, 2);
  assert!(env.installed().is_some());
}

#[test]
fn install_no_build_skips_packaging() {
  let env = TestEnv::from_fixture("hello_world.yaml");
  fs::write(env.root.join("hello-world-1.2.3.vsix"), "vsix").unwrap();

  env.brush_cmd("install").arg("--no-build").assert().success();

  assert!(!env.calls().contains(&"vsce package".to_string()));
  assert_eq!(env.installed().as_deref(), Some("hello-world-1.2.3.vsix"));
}

#[test]
fn install_no_build_requires_version() {
  let env = TestEnv::from_fixture("unversioned.yaml");

  env
    .brush_cmd("install")
    .arg("--no-build")
    .assert()
    .failure()
    .stderr(predicate::str::contains("--no-build needs an explicit `version`"));

  assert!(env.calls().is_empty());
}

#[test]
fn install_fails_when_package_missing() {
  let env = TestEnv::from_fixture("hello_world.yaml");

  env
    .brush_cmd("install")
    .arg("--no-build")
    .assert()
    .failure()
    .stderr(predicate::str::contains("Install failed"));

  assert!(env.installed().is_none());
}

#[test]
fn uninstall_never_installed_succeeds() {
  let env = TestEnv::from_fixture("hello_world.yaml");

  env
    .brush_cmd("uninstall")
    .assert()
    .success()
    .stdout(predicate::str::contains("acme.hello-world is not installed"));

  assert_eq!(env.calls(), vec!["code --uninstall-extension acme.hello-world"]);
}

#[test]
fn uninstall_removes_installed_extension() {
  let env = TestEnv::from_fixture("hello_world.yaml");
  env.brush_cmd("install").assert().success();
  assert!(env.installed().is_some());

  env.brush_cmd("uninstall").assert().success();

  assert!(env.installed().is_none());
}

#[test]
fn uninstall_succeeds_without_editor() {
  let env = TestEnv::from_fixture("hello_world.yaml");

  env
    .brush_cmd("uninstall")
    .env("BRUSH_EDITOR", env.temp.path().join("bin").join("no-code"))
    .assert()
    .success();
}
