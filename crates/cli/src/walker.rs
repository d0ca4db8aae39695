// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! On-disk expansion of step definition patterns.
//!
//! Each pattern is walked from its literal prefix with the `ignore` crate
//! and filtered through a compiled `globset` matcher. The walk descends no
//! deeper than the pattern reaches unless it contains `**`, and hidden
//! entries are only visited when the pattern names a dot-segment. Symlink
//! loops are skipped with a warning. Patterns are expanded in parallel, but
//! results keep the order of the input patterns.

use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobMatcher};
use ignore::WalkBuilder;
use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::pattern::escape;

/// Helper to check if an ignore::Error is a symlink loop error.
fn is_loop_error(err: &ignore::Error) -> bool {
    match err {
        ignore::Error::Loop { .. } => true,
        ignore::Error::WithPath { err, .. } => is_loop_error(err),
        ignore::Error::WithDepth { err, .. } => is_loop_error(err),
        ignore::Error::WithLineNumber { err, .. } => is_loop_error(err),
        _ => false,
    }
}

/// Enumerates the files matching a single glob pattern.
pub trait FileMatcher: Sync {
    /// Files (never directories) matching `pattern`, in a stable order.
    fn matches(&self, pattern: &str) -> Result<Vec<PathBuf>>;
}

/// Walker configuration.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Whether to skip hidden files and directories that the pattern does
    /// not name with a dot-segment of its own.
    pub hidden: bool,

    /// Whether to follow symlinks.
    pub follow_links: bool,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            hidden: true, // `*` and `**` never match dotfiles
            follow_links: true,
        }
    }
}

/// Matches patterns against the local filesystem.
#[derive(Debug, Clone, Default)]
pub struct DiskMatcher {
    config: WalkerConfig,
}

impl DiskMatcher {
    /// Create a new matcher with the given configuration.
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    fn walk(&self, base: &Path, matcher: &GlobMatcher, pattern: &str) -> Result<Vec<PathBuf>> {
        let below = below_base(pattern, base);

        let mut builder = WalkBuilder::new(base);
        builder
            .standard_filters(false)
            .hidden(false)
            .follow_links(self.config.follow_links)
            .max_depth(max_depth(&below))
            .sort_by_file_name(|a, b| a.cmp(b));

        if self.config.hidden {
            let dot_segments = dot_segments(&below);
            builder.filter_entry(move |entry| {
                entry.depth() == 0
                    || admits_entry(&dot_segments, &entry.file_name().to_string_lossy())
            });
        }

        let mut files = Vec::new();
        for entry in builder.build() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if is_loop_error(&err) => {
                    tracing::warn!("Symlink loop detected: {}", err);
                    continue;
                }
                Err(err) => {
                    return Err(Error::Walk {
                        message: format!("{pattern}: {err}"),
                    });
                }
            };

            let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
            if is_file && matcher.is_match(entry.path()) {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }
}

/// Segments of `pattern` below the walk root `base`.
fn below_base(pattern: &str, base: &Path) -> Vec<String> {
    let base = base.to_string_lossy();
    let rest = match pattern.strip_prefix(base.as_ref()) {
        Some(rest) if base != "." => rest,
        _ => pattern,
    };
    rest.split('/')
        .filter(|segment| !segment.is_empty())
        .map(String::from)
        .collect()
}

/// Deepest entry a pattern can match, or unbounded when it contains `**`.
fn max_depth(below: &[String]) -> Option<usize> {
    if below.iter().any(|segment| segment.contains("**")) {
        None
    } else {
        Some(below.len())
    }
}

/// Pattern segments that may match a hidden entry: those starting with a dot.
fn dot_segments(below: &[String]) -> Vec<String> {
    below
        .iter()
        .filter(|segment| segment.starts_with('.') && !matches!(segment.as_str(), "." | ".."))
        .cloned()
        .collect()
}

/// Wildcards never match a leading dot; only a dot-segment of the pattern can.
fn admits_entry(dot_segments: &[String], name: &str) -> bool {
    !name.starts_with('.')
        || dot_segments
            .iter()
            .any(|segment| segment == name || escape::has_magic(segment))
}

impl FileMatcher for DiskMatcher {
    fn matches(&self, pattern: &str) -> Result<Vec<PathBuf>> {
        if !escape::has_magic(pattern) {
            let path = PathBuf::from(pattern);
            return Ok(if path.is_file() { vec![path] } else { Vec::new() });
        }

        let matcher = compile(pattern)?;
        let base = match escape::literal_prefix(pattern) {
            "" => ".",
            prefix => prefix,
        };

        if !Path::new(base).is_dir() {
            tracing::debug!("{pattern}: base {base} is not a directory");
            return Ok(Vec::new());
        }

        self.walk(Path::new(base), &matcher, pattern)
    }
}

/// Compile a pattern with `/`-aware wildcards and literal backslashes.
pub fn compile(pattern: &str) -> Result<GlobMatcher> {
    GlobBuilder::new(pattern)
        .literal_separator(true)
        .backslash_escape(false)
        .build()
        .map(|glob| glob.compile_matcher())
        .map_err(|err| Error::Glob {
            pattern: pattern.to_string(),
            message: err.kind().to_string(),
        })
}

/// Expand every pattern and concatenate the matches in pattern order.
///
/// Duplicates across overlapping patterns are kept. The first failing
/// expansion aborts the call.
pub fn step_definition_paths<M: FileMatcher>(
    matcher: &M,
    patterns: &[String],
) -> Result<Vec<PathBuf>> {
    let expanded = patterns
        .par_iter()
        .map(|pattern| {
            let files = matcher.matches(pattern)?;
            tracing::debug!("{pattern}: {} match(es)", files.len());
            Ok(files)
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(expanded.into_iter().flatten().collect())
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
