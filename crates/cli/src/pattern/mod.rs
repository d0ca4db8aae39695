// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Step definition pattern templates.
//!
//! A template is a glob pattern that may carry one placeholder:
//! - `[filepath]`: the feature file's path relative to the base folder,
//!   without its `.feature` extension
//! - `[filepart]`: each leaf-first ancestor of that path, then `.`, with
//!   the `.` pattern normalized
//!
//! Expansion preserves template order. Earlier templates take priority
//! downstream, so their patterns are never reordered behind later ones.

pub mod escape;

use std::path::{Component, Path};

use crate::error::{Error, Result};
use crate::paths;

/// Placeholder replaced by the escaped relative feature path.
pub const FILEPATH_TOKEN: &str = "[filepath]";

/// Placeholder replaced by every ancestor of the relative feature path.
pub const FILEPART_TOKEN: &str = "[filepart]";

/// Replacement used for `[filepart]` once all real path parts are exhausted.
pub const CURRENT_DIR: &str = ".";

/// Which placeholder a template carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Substitution {
    /// Fixed search location, independent of the feature file.
    None,
    /// One pattern with `[filepath]` substituted.
    ByFilepath,
    /// One pattern per path part, plus one for the current directory.
    ByFilepart,
}

/// A parsed step definition template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template<'a> {
    raw: &'a str,
    substitution: Substitution,
}

impl<'a> Template<'a> {
    /// Classify a raw template string.
    ///
    /// Fails with [`Error::Pattern`] when both placeholders are present.
    pub fn parse(raw: &'a str) -> Result<Self> {
        let substitution = match (raw.contains(FILEPATH_TOKEN), raw.contains(FILEPART_TOKEN)) {
            (true, true) => {
                return Err(Error::Pattern {
                    pattern: raw.to_string(),
                });
            }
            (true, false) => Substitution::ByFilepath,
            (false, true) => Substitution::ByFilepart,
            (false, false) => Substitution::None,
        };
        Ok(Self { raw, substitution })
    }

    pub fn substitution(&self) -> Substitution {
        self.substitution
    }

    /// Append this template's concrete patterns to `out`.
    pub fn expand_into(&self, replacements: &Replacements, out: &mut Vec<String>) {
        match self.substitution {
            Substitution::None => out.push(self.raw.to_string()),
            Substitution::ByFilepath => {
                out.push(self.raw.replacen(FILEPATH_TOKEN, &replacements.filepath, 1));
            }
            Substitution::ByFilepart => {
                out.extend(
                    replacements
                        .parts
                        .iter()
                        .map(|part| self.raw.replacen(FILEPART_TOKEN, part, 1)),
                );
                out.push(paths::normalize_pattern(&self.raw.replacen(
                    FILEPART_TOKEN,
                    CURRENT_DIR,
                    1,
                )));
            }
        }
    }
}

/// Values substituted for the placeholders of one feature file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacements {
    /// Escaped, extension-less, `/`-separated relative feature path.
    pub filepath: String,
    /// Leaf-first ancestors of `filepath`.
    pub parts: Vec<String>,
}

impl Replacements {
    /// Build replacements from the feature path relative to the base folder.
    pub fn from_relative(relative: &Path) -> Self {
        let filepath = filepath_replacement(relative);
        let parts = paths::path_parts(&filepath);
        Self { filepath, parts }
    }
}

/// Escape, trim, and `/`-join a relative feature path.
///
/// Each segment is escaped on its own so separators survive, and `..`
/// segments are kept as-is.
pub fn filepath_replacement(relative: &Path) -> String {
    let trimmed = paths::trim_feature_extension(relative);
    trimmed
        .components()
        .filter_map(|component| match component {
            Component::Normal(segment) => Some(escape::escape(&segment.to_string_lossy())),
            Component::ParentDir => Some("..".to_string()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Expand every template, in order, into concrete glob patterns.
///
/// Fails on the first template that carries both placeholders; no
/// patterns are returned in that case.
pub fn expand<S: AsRef<str>>(templates: &[S], replacements: &Replacements) -> Result<Vec<String>> {
    let mut patterns = Vec::new();
    for raw in templates {
        Template::parse(raw.as_ref())?.expand_into(replacements, &mut patterns);
    }
    Ok(patterns)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
