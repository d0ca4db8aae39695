// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Preprocessor configuration.
//!
//! Holds the user's step definition templates and the implicit integration
//! folder that feature paths are related against. Both have defaults
//! derived from the host configuration.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::paths;
use crate::pattern::escape;
use crate::schema::HostConfig;

/// Extensions searched by the default step definition templates.
pub const DEFAULT_EXTENSIONS: &str = "{js,mjs,ts,tsx}";

/// Shared step definitions directory searched for every feature.
pub const SUPPORT_STEP_DEFINITIONS: &str = "cypress/support/step_definitions";

/// Resolved preprocessor settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreprocessorConfig {
    /// Step definition templates in declaration order.
    pub step_definitions: Vec<String>,
    /// Folder feature paths are made relative to (current schema).
    pub implicit_integration_folder: PathBuf,
}

impl PreprocessorConfig {
    /// Fill in defaults for anything the user left unset.
    pub fn resolve(
        host: &HostConfig,
        step_definitions: Option<Vec<String>>,
        implicit_integration_folder: Option<PathBuf>,
    ) -> Result<Self> {
        let project_root = host.project_root();
        let implicit_integration_folder = match implicit_integration_folder {
            Some(folder) => paths::absolutize(project_root, &folder),
            None => implicit_integration_folder_for(host)?,
        };

        let step_definitions = step_definitions.unwrap_or_else(|| {
            default_step_definitions(project_root, &implicit_integration_folder)
        });

        Ok(Self {
            step_definitions,
            implicit_integration_folder,
        })
    }
}

/// Folder feature paths are related against when none is configured.
///
/// For the current schema this is the deepest directory containing every
/// spec pattern's glob base. For the legacy schema it is the integration
/// folder.
pub fn implicit_integration_folder_for(host: &HostConfig) -> Result<PathBuf> {
    match host {
        HostConfig::Current(current) => {
            if current.spec_pattern.is_empty() {
                return Err(Error::Config {
                    message: "spec_pattern must contain at least one pattern".to_string(),
                    path: None,
                });
            }

            let bases = current.spec_pattern.iter().map(|pattern| {
                paths::absolutize(&current.project_root, Path::new(escape::glob_base(pattern)))
            });

            common_ancestor(bases).ok_or_else(|| {
                Error::Internal(format!(
                    "expected to find a common ancestor of {:?}",
                    current.spec_pattern
                ))
            })
        }
        HostConfig::Legacy(legacy) => Ok(legacy.full_integration_folder()),
    }
}

/// Deepest path that is an ancestor of (or equal to) every input.
fn common_ancestor(mut paths: impl Iterator<Item = PathBuf>) -> Option<PathBuf> {
    let mut ancestor = paths.next()?;
    for path in paths {
        ancestor = ancestor
            .components()
            .zip(path.components())
            .take_while(|(a, b)| a == b)
            .map(|(a, _)| a)
            .collect();
    }
    if ancestor.as_os_str().is_empty() {
        None
    } else {
        Some(ancestor)
    }
}

/// Templates used when the user configures none.
pub fn default_step_definitions(project_root: &Path, integration_folder: &Path) -> Vec<String> {
    let relative = paths::to_slash(&paths::relative_to(project_root, integration_folder));
    let prefix = if relative.is_empty() {
        String::new()
    } else {
        format!("{}/", escape::escape(&relative))
    };

    vec![
        format!("{prefix}[filepath]/**/*.{DEFAULT_EXTENSIONS}"),
        format!("{prefix}[filepath].{DEFAULT_EXTENSIONS}"),
        format!("{SUPPORT_STEP_DEFINITIONS}/**/*.{DEFAULT_EXTENSIONS}"),
    ]
}

#[cfg(test)]
#[path = "preprocessor_tests.rs"]
mod tests;
