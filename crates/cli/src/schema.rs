// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Host configuration schemas.
//!
//! The host test runner has two configuration generations. The current one
//! is recognized by its spec patterns; the legacy one by an integration
//! folder. Both are normalized into a [`Projection`] up front so nothing
//! downstream branches on the schema.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::paths;
use crate::preprocessor::PreprocessorConfig;

/// Host configuration, one variant per schema generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostConfig {
    Current(CurrentHost),
    Legacy(LegacyHost),
}

/// Current schema: features are located by spec patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentHost {
    /// Absolute project root.
    pub project_root: PathBuf,
    /// Glob patterns locating feature files, relative to the project root.
    pub spec_pattern: Vec<String>,
}

/// Legacy schema: features live in a single integration folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyHost {
    /// Absolute project root.
    pub project_root: PathBuf,
    /// Integration folder, possibly relative to the project root.
    pub integration_folder: PathBuf,
}

impl HostConfig {
    pub fn project_root(&self) -> &Path {
        match self {
            HostConfig::Current(host) => &host.project_root,
            HostConfig::Legacy(host) => &host.project_root,
        }
    }
}

impl LegacyHost {
    /// Integration folder made absolute against the project root.
    pub fn full_integration_folder(&self) -> PathBuf {
        paths::absolutize(&self.project_root, &self.integration_folder)
    }
}

/// Host and preprocessor configuration together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub host: HostConfig,
    pub preprocessor: PreprocessorConfig,
}

/// Schema-independent view of a configuration for one feature file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection<'a> {
    /// Root that relative patterns are resolved against.
    pub project_root: PathBuf,
    /// Folder the feature file's relative path is computed from.
    pub base_folder: PathBuf,
    /// Step definition templates in declaration order.
    pub templates: &'a [String],
}

impl Configuration {
    /// Normalize the configuration for `feature`.
    ///
    /// The feature must lie inside the project root (current schema) or the
    /// full integration folder (legacy schema).
    pub fn project(&self, feature: &Path) -> Result<Projection<'_>> {
        let project_root = paths::normalize(self.host.project_root());

        let (base_folder, boundary) = match &self.host {
            HostConfig::Current(_) => (
                paths::absolutize(
                    &project_root,
                    &self.preprocessor.implicit_integration_folder,
                ),
                project_root.clone(),
            ),
            HostConfig::Legacy(host) => {
                let integration_folder = host.full_integration_folder();
                (integration_folder.clone(), integration_folder)
            }
        };

        if !paths::is_path_inside(feature, &boundary) {
            return Err(Error::Containment {
                path: feature.to_path_buf(),
                boundary,
            });
        }

        Ok(Projection {
            project_root,
            base_folder,
            templates: &self.preprocessor.step_definitions,
        })
    }
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
