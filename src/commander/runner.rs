// src/commander/runner.rs
use std::ffi::{OsStr, OsString};
use std::process::Command;

use crate::error::{BrowseError, Result};

/// Executes one host command, inheriting the terminal, and reports how it exited.
pub trait CommandRunner: Send + Sync {
    fn run(&self, program: &str, args: &[OsString]) -> Result<()>;

    /// Passes `command_line` to `program` untouched; the caller owns all quoting.
    fn run_raw(&self, program: &str, command_line: &OsStr) -> Result<()>;
}

pub struct SystemRunner;

impl SystemRunner {
    fn command(program: &str) -> Result<Command> {
        let resolved = which::which(program).map_err(|_| BrowseError::CommandNotFound(program.to_string()))?;
        Ok(Command::new(resolved))
    }

    fn wait(mut command: Command, described: String) -> Result<()> {
        tracing::debug!(command = %described, "running command");
        let status = command.status()?;

        if status.success() {
            Ok(())
        } else {
            tracing::warn!(command = %described, code = ?status.code(), "command failed");
            Err(BrowseError::CommandFailed { command: described, code: status.code() })
        }
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[OsString]) -> Result<()> {
        let mut command = Self::command(program)?;
        command.args(args);
        Self::wait(command, describe(program, args))
    }

    fn run_raw(&self, program: &str, command_line: &OsStr) -> Result<()> {
        let mut command = Self::command(program)?;
        #[cfg(windows)]
        {
            use std::os::windows::process::CommandExt;
            command.raw_arg(command_line);
        }
        #[cfg(not(windows))]
        command.arg(command_line);
        Self::wait(command, format!("{} {}", program, command_line.to_string_lossy()))
    }
}

pub fn describe(program: &str, args: &[OsString]) -> String {
    let mut line = program.to_string();
    for arg in args {
        line.push(' ');
        line.push_str(&arg.to_string_lossy());
    }
    line
}
