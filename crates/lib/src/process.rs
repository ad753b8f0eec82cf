//! External tool invocation.
//!
//! The pipeline talks to two external programs: the packager (`vsce`) and the
//! editor CLI (`code`). All invocations go through a [`CommandRunner`] so the
//! orchestration can be exercised without either tool installed.

use std::path::Path;
use std::process::{Command, Stdio};

use thiserror::Error;
use tracing::debug;

use crate::error::{Error, Result, capture};

/// Packaging tool used when nothing else is configured.
pub const DEFAULT_PACKAGER: &str = "vsce";

/// Editor CLI used when nothing else is configured.
pub const DEFAULT_EDITOR: &str = "code";

/// Environment variable overriding the packaging tool.
pub const PACKAGER_ENV: &str = "BRUSH_PACKAGER";

/// Environment variable overriding the editor CLI.
pub const EDITOR_ENV: &str = "BRUSH_EDITOR";

/// A process exited unsuccessfully. Always carried inside [`Error::Unknown`].
#[derive(Debug, Error)]
#[error("command failed with exit code {code:?}: {command}")]
pub struct CommandFailed {
  pub command: String,
  pub code: Option<i32>,
}

/// Runs an external program to completion.
pub trait CommandRunner {
  /// Run `program` with `args`, optionally inside `cwd`.
  ///
  /// Output is discarded. A spawn failure or non-zero exit is an error.
  fn run(&self, program: &str, args: &[&str], cwd: Option<&Path>) -> Result<()>;
}

/// Runs programs as real child processes, blocking until they exit.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
  fn run(&self, program: &str, args: &[&str], cwd: Option<&Path>) -> Result<()> {
    let (shell_cmd, shell_args) = command_line(program, args);
    debug!(program = %program, args = ?args, cwd = ?cwd, "spawning process");

    let mut command = Command::new(&shell_cmd);
    command
      .args(&shell_args)
      .stdin(Stdio::null())
      .stdout(Stdio::null())
      .stderr(Stdio::null());
    if let Some(dir) = cwd {
      command.current_dir(dir);
    }

    let status = capture(|| command.status())?;
    if !status.success() {
      return Err(Error::unknown(CommandFailed {
        command: render(program, args),
        code: status.code(),
      }));
    }

    Ok(())
  }
}

/// Program and arguments to spawn for the current platform.
///
/// Windows editor and packager entry points are `.cmd` shims, which only
/// resolve through `cmd.exe`.
fn command_line(program: &str, args: &[&str]) -> (String, Vec<String>) {
  #[cfg(windows)]
  {
    let mut shell_args = vec!["/C".to_string(), program.to_string()];
    shell_args.extend(args.iter().map(|a| a.to_string()));
    ("cmd.exe".to_string(), shell_args)
  }

  #[cfg(not(windows))]
  {
    (program.to_string(), args.iter().map(|a| a.to_string()).collect())
  }
}

fn render(program: &str, args: &[&str]) -> String {
  std::iter::once(program).chain(args.iter().copied()).collect::<Vec<_>>().join(" ")
}

/// Names of the external programs to invoke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
  pub packager: String,
  pub editor: String,
}

impl Default for Toolchain {
  fn default() -> Self {
    Self {
      packager: DEFAULT_PACKAGER.to_string(),
      editor: DEFAULT_EDITOR.to_string(),
    }
  }
}

impl Toolchain {
  /// Defaults, overridden by `BRUSH_PACKAGER` / `BRUSH_EDITOR` when set and non-empty.
  pub fn from_env() -> Self {
    let defaults = Self::default();
    Self {
      packager: env_or(PACKAGER_ENV, defaults.packager),
      editor: env_or(EDITOR_ENV, defaults.editor),
    }
  }
}

fn env_or(key: &str, default: String) -> String {
  std::env::var(key).ok().filter(|v| !v.is_empty()).unwrap_or(default)
}
