// src/session/resolve.rs
// Every user-typed path is tried twice: joined onto the current directory,
// then as given.
use std::path::{Path, PathBuf};

use crate::error::{BrowseError, Result};

fn candidates(base: &Path, raw: &str) -> (PathBuf, PathBuf) {
    (base.join(raw), PathBuf::from(raw))
}

fn looks_like_path(raw: &str) -> bool {
    raw.contains('/') || raw.contains('\\')
}

/// Symlinks are followed: the returned path is the link's target.
pub fn resolve_existing_file(base: &Path, raw: &str) -> Result<PathBuf> {
    if raw.is_empty() {
        return Err(BrowseError::InvalidFile(raw.to_string()));
    }

    let (relative, standalone) = candidates(base, raw);
    let found = if relative.is_file() {
        relative
    } else if standalone.is_file() {
        standalone
    } else {
        return Err(BrowseError::InvalidFile(raw.to_string()));
    };

    Ok(std::fs::canonicalize(found)?)
}

/// Resolves a destination that must not exist yet. Bare names land in `base`,
/// anything containing a separator is taken literally.
pub fn resolve_free_path(base: &Path, raw: &str) -> Result<PathBuf> {
    if raw.is_empty() {
        return Err(BrowseError::InvalidFile(raw.to_string()));
    }

    let (relative, standalone) = candidates(base, raw);
    if relative.is_file() || standalone.is_file() {
        return Err(BrowseError::PathTaken(raw.to_string()));
    }

    let chosen = if looks_like_path(raw) { standalone } else { relative };
    Ok(std::path::absolute(chosen)?)
}

pub fn resolve_directory(base: &Path, raw: &str) -> Option<PathBuf> {
    if raw.is_empty() {
        return None;
    }

    let (relative, standalone) = candidates(base, raw);
    [relative, standalone]
        .into_iter()
        .find(|p| p.is_dir())
        .and_then(|p| std::fs::canonicalize(p).ok())
}

pub fn parent_of(dir: &Path) -> PathBuf {
    match dir.parent() {
        Some(parent) => std::fs::canonicalize(parent).unwrap_or_else(|_| parent.to_path_buf()),
        None => dir.to_path_buf(),
    }
}
