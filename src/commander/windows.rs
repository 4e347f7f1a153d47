// src/commander/windows.rs
// cls, dir, copy, move and del are cmd.exe builtins, so everything goes through `cmd /C`.
use std::ffi::OsString;
use std::path::Path;

use super::{Commander, CommandRunner, CopyPolicy, Platform};
use crate::error::Result;

pub struct WindowsCommander {
    runner: Box<dyn CommandRunner>,
}

impl WindowsCommander {
    pub fn new(runner: Box<dyn CommandRunner>) -> Self {
        WindowsCommander { runner }
    }

    fn builtin(&self, name: &str, switches: &[&str], paths: &[&Path]) -> Result<()> {
        self.runner.run_raw("cmd", &command_line(name, switches, paths))
    }
}

/// Builds `/C <builtin> <switches> "<path>"...`. cmd treats `& | < > ^` inside
/// double quotes literally, and Windows paths cannot contain `"` themselves.
fn command_line(name: &str, switches: &[&str], paths: &[&Path]) -> OsString {
    let mut line = OsString::from("/C ");
    line.push(name);
    for switch in switches {
        line.push(" ");
        line.push(switch);
    }
    for path in paths {
        line.push(" \"");
        line.push(path.as_os_str());
        line.push("\"");
    }
    line
}

impl Commander for WindowsCommander {
    fn platform(&self) -> Platform {
        Platform::Windows
    }

    fn copy_policy(&self) -> CopyPolicy {
        CopyPolicy::Overwrite
    }

    fn clear_screen(&self) {
        if let Err(e) = self.builtin("cls", &[], &[]) {
            tracing::debug!(error = %e, "cls failed");
        }
    }

    fn list_directory(&self, path: &Path) -> Result<()> {
        self.builtin("dir", &["/A"], &[path])
    }

    fn copy_file(&self, source: &Path, destination: &Path) -> Result<()> {
        self.builtin("copy", &["/Y"], &[source, destination])
    }

    fn move_file(&self, source: &Path, destination: &Path) -> Result<()> {
        self.builtin("move", &[], &[source, destination])
    }

    fn delete_file(&self, path: &Path) -> Result<()> {
        self.builtin("del", &[], &[path])
    }
}
