// src/config.rs
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::commander::CopyPolicy;
use crate::error::{BrowseError, Result};

pub const CONFIG_ENV: &str = "FBROWSE_CONFIG";
const APP_DIR: &str = "fbrowse";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    pub start_dir: Option<PathBuf>,
    pub copy_policy: Option<CopyPolicy>,
    pub clear_screen: bool,
    pub log_file: Option<PathBuf>,
    pub log_level: String,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        BrowserConfig {
            start_dir: None,
            copy_policy: None,
            clear_screen: false,
            log_file: None,
            log_level: "info".to_string(),
        }
    }
}

impl BrowserConfig {
    /// Loads `$FBROWSE_CONFIG`, or the per-user config file. A missing file means defaults.
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(BrowseError::Config { path: path.to_path_buf(), message: e.to_string() });
            }
        };

        serde_json::from_str(&content)
            .map_err(|e| BrowseError::Config { path: path.to_path_buf(), message: e.to_string() })
    }

    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file
            .clone()
            .or_else(|| dirs::cache_dir().map(|d| d.join(APP_DIR).join("fbrowse.log")))
    }

    /// The session's first directory: the configured one, else the directory
    /// holding the executable, else the working directory.
    pub fn resolve_start_dir(&self) -> Result<PathBuf> {
        if let Some(ref dir) = self.start_dir {
            if dir.is_dir() {
                return Ok(std::fs::canonicalize(dir)?);
            }
            tracing::warn!(start_dir = %dir.display(), "configured start_dir is not a directory, ignoring");
        }

        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .filter(|dir| dir.is_dir());

        match exe_dir {
            Some(dir) => Ok(std::fs::canonicalize(dir)?),
            None => Ok(std::fs::canonicalize(std::env::current_dir()?)?),
        }
    }
}

fn config_path() -> Option<PathBuf> {
    if let Ok(v) = std::env::var(CONFIG_ENV) {
        let v = v.trim();
        if !v.is_empty() {
            return Some(PathBuf::from(v));
        }
    }
    dirs::config_dir().map(|d| d.join(APP_DIR).join("config.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let tmp = TempDir::new("config-missing");
        let config = BrowserConfig::load_from(&tmp.path().join("nope.json")).unwrap();
        assert_eq!(config, BrowserConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let tmp = TempDir::new("config-partial");
        let path = tmp.write("config.json", r#"{"copy_policy":"overwrite","clear_screen":true}"#);
        let config = BrowserConfig::load_from(&path).unwrap();
        assert_eq!(config.copy_policy, Some(CopyPolicy::Overwrite));
        assert!(config.clear_screen);
        assert_eq!(config.log_level, "info");
        assert!(config.start_dir.is_none());
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let tmp = TempDir::new("config-bad");
        let path = tmp.write("config.json", "{ not json");
        match BrowserConfig::load_from(&path) {
            Err(BrowseError::Config { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_start_dir_from_config() {
        let tmp = TempDir::new("config-start");
        let config = BrowserConfig { start_dir: Some(tmp.path().to_path_buf()), ..Default::default() };
        assert_eq!(config.resolve_start_dir().unwrap(), tmp.path());
    }

    #[test]
    fn test_start_dir_falls_back_when_missing() {
        let tmp = TempDir::new("config-fallback");
        let config = BrowserConfig { start_dir: Some(tmp.path().join("gone")), ..Default::default() };
        let dir = config.resolve_start_dir().unwrap();
        assert!(dir.is_dir());
        assert!(dir.is_absolute());
    }
}
