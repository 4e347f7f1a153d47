// src/commander/mod.rs
pub mod keys;
pub mod posix;
pub mod runner;
pub mod windows;

pub use posix::PosixCommander;
pub use runner::{CommandRunner, SystemRunner};
pub use windows::WindowsCommander;

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::BrowserConfig;
use crate::error::{BrowseError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Posix,
}

impl Platform {
    pub fn detect() -> Result<Self> {
        Self::from_os_name(std::env::consts::OS)
    }

    pub fn from_os_name(os: &str) -> Result<Self> {
        match os {
            "windows" => Ok(Platform::Windows),
            "linux" | "macos" => Ok(Platform::Posix),
            other => Err(BrowseError::UnsupportedPlatform(other.to_string())),
        }
    }
}

/// What `copy_file` does when the destination already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CopyPolicy {
    /// Never replace a destination that is newer than the source.
    UpdateOnly,
    Overwrite,
}

/// Host-specific file and terminal actions.
///
/// Paths are expected to be absolute; the session resolves them before calling in.
pub trait Commander: Send + Sync {
    fn platform(&self) -> Platform;

    fn copy_policy(&self) -> CopyPolicy;

    /// Best-effort; failures are logged, never returned.
    fn clear_screen(&self);

    /// Prints a detailed listing, hidden entries included, straight to the terminal.
    fn list_directory(&self, path: &Path) -> Result<()>;

    fn copy_file(&self, source: &Path, destination: &Path) -> Result<()>;

    fn move_file(&self, source: &Path, destination: &Path) -> Result<()>;

    fn delete_file(&self, path: &Path) -> Result<()>;

    fn next_key_press(&self) -> Result<char> {
        keys::next_key_press()
    }
}

pub fn for_host(config: &BrowserConfig) -> Result<Arc<dyn Commander>> {
    for_platform(Platform::detect()?, config, Box::new(SystemRunner))
}

pub fn for_platform(platform: Platform, config: &BrowserConfig, runner: Box<dyn CommandRunner>) -> Result<Arc<dyn Commander>> {
    let commander: Arc<dyn Commander> = match platform {
        Platform::Posix => {
            let policy = config.copy_policy.unwrap_or(CopyPolicy::UpdateOnly);
            Arc::new(PosixCommander::new(runner, policy))
        }
        Platform::Windows => {
            if config.copy_policy == Some(CopyPolicy::UpdateOnly) {
                tracing::warn!("update_only copy policy is not available on Windows, using overwrite");
            }
            Arc::new(WindowsCommander::new(runner))
        }
    };

    tracing::info!(?platform, copy_policy = ?commander.copy_policy(), "commander selected");
    Ok(commander)
}
