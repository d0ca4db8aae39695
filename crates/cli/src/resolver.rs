// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Step definition pattern resolution.
//!
//! Pipeline: schema projection, relative path decomposition, template
//! expansion, then every pattern is made absolute against the project root.

use std::path::Path;

use crate::error::Result;
use crate::paths;
use crate::pattern::{self, Replacements};
use crate::schema::Configuration;

/// Resolve the absolute glob patterns that may match step definitions for
/// `feature`.
///
/// Every error is detected before any pattern is returned, so callers never
/// expand a partial list.
pub fn step_definition_patterns(config: &Configuration, feature: &Path) -> Result<Vec<String>> {
    let projection = config.project(feature)?;

    let relative = paths::relative_to(&projection.base_folder, feature);
    let replacements = Replacements::from_relative(&relative);

    tracing::debug!("replacing [filepath] with {:?}", replacements.filepath);
    tracing::debug!("replacing [filepart] with {:?}", replacements.parts);

    let patterns = pattern::expand(projection.templates, &replacements)?;

    Ok(patterns
        .iter()
        .map(|pattern| paths::ensure_is_absolute(&projection.project_root, pattern))
        .collect())
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
