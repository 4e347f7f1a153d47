// src/testutil.rs
use std::collections::VecDeque;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::commander::runner::{describe, CommandRunner};
use crate::commander::{Commander, CopyPolicy, Platform};
use crate::error::{BrowseError, Result};

static COUNTER: AtomicUsize = AtomicUsize::new(0);

pub struct TempDir {
    path: PathBuf,
}

impl TempDir {
    pub fn new(label: &str) -> Self {
        let uniq = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let dir = std::env::temp_dir().join(format!(
            "fbrowse-{label}-{uniq}-{}-{}",
            std::process::id(),
            COUNTER.fetch_add(1, Ordering::Relaxed)
        ));
        std::fs::create_dir_all(&dir).unwrap();
        TempDir { path: std::fs::canonicalize(&dir).unwrap() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.path.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn mkdir(&self, rel: &str) -> PathBuf {
        let path = self.path.join(rel);
        std::fs::create_dir_all(&path).unwrap();
        path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

#[derive(Clone, Default)]
pub struct RecordingRunner {
    calls: Arc<Mutex<Vec<String>>>,
    fail_code: Option<i32>,
}

impl RecordingRunner {
    pub fn failing(code: i32) -> Self {
        RecordingRunner { fail_code: Some(code), ..Default::default() }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, command: String) -> Result<()> {
        self.calls.lock().unwrap().push(command.clone());
        match self.fail_code {
            Some(code) => Err(BrowseError::CommandFailed { command, code: Some(code) }),
            None => Ok(()),
        }
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, program: &str, args: &[OsString]) -> Result<()> {
        self.record(describe(program, args))
    }

    fn run_raw(&self, program: &str, command_line: &OsStr) -> Result<()> {
        self.record(format!("{} {}", program, command_line.to_string_lossy()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Clear,
    List(PathBuf),
    Copy(PathBuf, PathBuf),
    Move(PathBuf, PathBuf),
    Delete(PathBuf),
}

/// Replays queued keystrokes and records every call. Running out of keys
/// yields ESC so a test can never spin forever.
#[derive(Default)]
pub struct MockCommander {
    keys: Mutex<VecDeque<char>>,
    calls: Mutex<Vec<Call>>,
    fail_mutations: bool,
}

impl MockCommander {
    pub fn with_keys(keys: &str) -> Self {
        MockCommander { keys: Mutex::new(keys.chars().collect()), ..Default::default() }
    }

    pub fn failing_mutations(mut self) -> Self {
        self.fail_mutations = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Calls other than clearing and listing.
    pub fn mutations(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| !matches!(c, Call::Clear | Call::List(_)))
            .collect()
    }

    pub fn remaining_keys(&self) -> usize {
        self.keys.lock().unwrap().len()
    }

    fn record(&self, call: Call) -> Result<()> {
        let mutating = !matches!(call, Call::Clear | Call::List(_));
        self.calls.lock().unwrap().push(call);
        if mutating && self.fail_mutations {
            return Err(BrowseError::CommandFailed { command: "mock".into(), code: Some(1) });
        }
        Ok(())
    }
}

impl Commander for MockCommander {
    fn platform(&self) -> Platform {
        Platform::Posix
    }

    fn copy_policy(&self) -> CopyPolicy {
        CopyPolicy::UpdateOnly
    }

    fn clear_screen(&self) {
        let _ = self.record(Call::Clear);
    }

    fn list_directory(&self, path: &Path) -> Result<()> {
        self.record(Call::List(path.to_path_buf()))
    }

    fn copy_file(&self, source: &Path, destination: &Path) -> Result<()> {
        self.record(Call::Copy(source.to_path_buf(), destination.to_path_buf()))
    }

    fn move_file(&self, source: &Path, destination: &Path) -> Result<()> {
        self.record(Call::Move(source.to_path_buf(), destination.to_path_buf()))
    }

    fn delete_file(&self, path: &Path) -> Result<()> {
        self.record(Call::Delete(path.to_path_buf()))
    }

    fn next_key_press(&self) -> Result<char> {
        Ok(self.keys.lock().unwrap().pop_front().unwrap_or(crate::commander::keys::ESC))
    }
}
