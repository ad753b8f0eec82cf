//! Test doubles for brush-lib.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::process::{CommandFailed, CommandRunner};

type Hook = Box<dyn Fn(&str, &[&str], Option<&Path>) -> Result<()>>;

/// Records every invocation instead of spawning processes.
///
/// Programs registered with [`FakeRunner::fail_on`] exit with code 1. A hook
/// installed with [`FakeRunner::on_run`] runs for every invocation that does
/// not fail, letting tests inspect the filesystem mid-pipeline.
#[derive(Default)]
pub struct FakeRunner {
  calls: RefCell<Vec<(String, Option<PathBuf>)>>,
  failing: Vec<String>,
  hook: Option<Hook>,
}

impl FakeRunner {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn fail_on(mut self, program: &str) -> Self {
    self.failing.push(program.to_string());
    self
  }

  pub fn on_run<F>(mut self, hook: F) -> Self
  where
    F: Fn(&str, &[&str], Option<&Path>) -> Result<()> + 'static,
  {
    self.hook = Some(Box::new(hook));
    self
  }

  /// Invocations so far, rendered as `program arg1 arg2`.
  pub fn calls(&self) -> Vec<String> {
    self.calls.borrow().iter().map(|(c, _)| c.clone()).collect()
  }

  /// Working directory of each invocation.
  pub fn cwds(&self) -> Vec<Option<PathBuf>> {
    self.calls.borrow().iter().map(|(_, cwd)| cwd.clone()).collect()
  }
}

impl CommandRunner for FakeRunner {
  fn run(&self, program: &str, args: &[&str], cwd: Option<&Path>) -> Result<()> {
    let line = std::iter::once(program)
      .chain(args.iter().copied())
      .collect::<Vec<_>>()
      .join(" ");
    self.calls.borrow_mut().push((line.clone(), cwd.map(Path::to_path_buf)));

    if self.failing.iter().any(|p| p == program) {
      return Err(Error::unknown(CommandFailed {
        command: line,
        code: Some(1),
      }));
    }

    match &self.hook {
      Some(hook) => hook(program, args, cwd),
      None => Ok(()),
    }
  }
}
