// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Config file discovery.
//!
//! Searches from a starting directory up to the git root for stepdefs.toml.

use std::path::{Path, PathBuf};

use crate::config::CONFIG_FILE;
use crate::error::{Error, Result};

/// Find stepdefs.toml in `start_dir` or one of its ancestors.
///
/// The directory containing `.git` is the last one searched.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        let candidate = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }
        if dir.join(".git").exists() {
            break;
        }
    }
    None
}

/// Resolve config path from CLI arg, env var, or discovery.
///
/// Priority:
/// 1. CLI flag `-C`/`--config` (handled by clap with env = "STEPDEFS_CONFIG")
/// 2. Discovery from the current directory up to the git root
/// 3. None (caller falls back to defaults)
pub fn resolve_config(explicit: Option<&Path>, cwd: &Path) -> Result<Option<PathBuf>> {
    let Some(path) = explicit else {
        return Ok(find_config(cwd));
    };

    let path = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };

    if path.is_file() {
        Ok(Some(path))
    } else {
        Err(Error::Config {
            message: format!("config file not found: {}", path.display()),
            path: Some(path),
        })
    }
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
