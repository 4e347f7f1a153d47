// src/commander/posix.rs
// Linux and macOS share the coreutils-style command set.
use std::ffi::OsString;
use std::path::Path;

use super::{Commander, CommandRunner, CopyPolicy, Platform};
use crate::error::Result;

pub struct PosixCommander {
    runner: Box<dyn CommandRunner>,
    copy_policy: CopyPolicy,
}

impl PosixCommander {
    pub fn new(runner: Box<dyn CommandRunner>, copy_policy: CopyPolicy) -> Self {
        PosixCommander { runner, copy_policy }
    }

    fn run(&self, program: &str, args: Vec<OsString>) -> Result<()> {
        self.runner.run(program, &args)
    }
}

// BSD cp has no -u, so update-only is decided here for GNU and BSD alike.
fn destination_is_newer(source: &Path, destination: &Path) -> bool {
    let target = match (destination.is_dir(), source.file_name()) {
        (true, Some(name)) => destination.join(name),
        _ => destination.to_path_buf(),
    };
    let modified = |p: &Path| std::fs::metadata(p).and_then(|m| m.modified()).ok();
    match (modified(source), modified(&target)) {
        (Some(src), Some(dst)) => dst > src,
        _ => false,
    }
}

impl Commander for PosixCommander {
    fn platform(&self) -> Platform {
        Platform::Posix
    }

    fn copy_policy(&self) -> CopyPolicy {
        self.copy_policy
    }

    fn clear_screen(&self) {
        if let Err(e) = self.run("clear", Vec::new()) {
            tracing::debug!(error = %e, "clear failed");
        }
    }

    fn list_directory(&self, path: &Path) -> Result<()> {
        self.run("ls", vec!["-la".into(), path.into()])
    }

    fn copy_file(&self, source: &Path, destination: &Path) -> Result<()> {
        if self.copy_policy == CopyPolicy::UpdateOnly && destination_is_newer(source, destination) {
            tracing::info!(source = %source.display(), destination = %destination.display(), "destination is newer, copy skipped");
            return Ok(());
        }
        self.run("cp", vec![source.into(), destination.into()])
    }

    fn move_file(&self, source: &Path, destination: &Path) -> Result<()> {
        self.run("mv", vec![source.into(), destination.into()])
    }

    fn delete_file(&self, path: &Path) -> Result<()> {
        self.run("rm", vec![path.into()])
    }
}
