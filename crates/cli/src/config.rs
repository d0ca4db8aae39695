// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles stepdefs.toml parsing with version validation and unknown key
//! warnings. The `[host]` table selects the schema generation: a
//! `spec_pattern` key means the current schema, otherwise the legacy one.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::paths;
use crate::preprocessor::PreprocessorConfig;
use crate::schema::{Configuration, CurrentHost, HostConfig, LegacyHost};

/// Name of the configuration file.
pub const CONFIG_FILE: &str = "stepdefs.toml";

/// Supported config file version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Integration folder assumed by the legacy schema when none is given.
pub const DEFAULT_INTEGRATION_FOLDER: &str = "cypress/integration";

/// Spec pattern assumed when no config file exists.
pub const DEFAULT_SPEC_PATTERN: &str = "cypress/e2e/**/*.feature";

/// Known top-level keys.
const KNOWN_KEYS: &[&str] = &["version", "host", "preprocessor"];

/// Known keys in `[host]`.
const KNOWN_HOST_KEYS: &[&str] = &["project_root", "spec_pattern", "integration_folder"];

/// Known keys in `[preprocessor]`.
const KNOWN_PREPROCESSOR_KEYS: &[&str] = &["step_definitions", "implicit_integration_folder"];

/// Config with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    version: Option<i64>,

    #[serde(default)]
    host: Option<toml::Value>,

    #[serde(default)]
    preprocessor: Option<toml::Value>,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

/// Load config from a file path.
pub fn load(path: &Path) -> Result<Configuration> {
    let path = std::path::absolute(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let content = std::fs::read_to_string(&path).map_err(|e| Error::Io {
        path: path.clone(),
        source: e,
    })?;

    parse(&content, &path)
}

/// Parse config from string content.
///
/// `path` is the config file's absolute location; relative paths inside the
/// file resolve against its directory.
pub fn parse(content: &str, path: &Path) -> Result<Configuration> {
    let flexible: FlexibleConfig = toml::from_str(content).map_err(|e| config_error(path, e))?;

    let version = flexible
        .version
        .ok_or_else(|| config_error(path, "missing required field: version"))?;

    if version != SUPPORTED_VERSION {
        return Err(config_error(
            path,
            format!(
                "unsupported config version {} (supported: {})",
                version, SUPPORTED_VERSION
            ),
        ));
    }

    for key in flexible.unknown.keys() {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            warn_unknown_key(path, key);
        }
    }

    let config_dir = path.parent().unwrap_or(Path::new("/"));
    let host = parse_host(flexible.host.as_ref(), config_dir, path)?;
    let preprocessor = parse_preprocessor(flexible.preprocessor.as_ref(), &host, path)?;

    Ok(Configuration { host, preprocessor })
}

/// Configuration used when no config file is found.
pub fn default_config(project_root: &Path) -> Result<Configuration> {
    let host = HostConfig::Current(CurrentHost {
        project_root: paths::normalize(project_root),
        spec_pattern: vec![DEFAULT_SPEC_PATTERN.to_string()],
    });
    let preprocessor = PreprocessorConfig::resolve(&host, None, None)?;
    Ok(Configuration { host, preprocessor })
}

/// Parse the `[host]` table, choosing the schema generation.
fn parse_host(value: Option<&toml::Value>, config_dir: &Path, path: &Path) -> Result<HostConfig> {
    let empty = toml::Table::new();
    let table = table_or_empty(value, "host", path, &empty)?;
    warn_unknown_keys(table, "host", KNOWN_HOST_KEYS, path);

    let project_root = match parse_string(table.get("project_root"), "host.project_root", path)? {
        Some(root) => paths::absolutize(config_dir, Path::new(&root)),
        None => paths::normalize(config_dir),
    };

    match parse_string_or_array(table.get("spec_pattern"), "host.spec_pattern", path)? {
        Some(spec_pattern) => Ok(HostConfig::Current(CurrentHost {
            project_root,
            spec_pattern,
        })),
        None => {
            let integration_folder =
                parse_string(table.get("integration_folder"), "host.integration_folder", path)?
                    .unwrap_or_else(|| DEFAULT_INTEGRATION_FOLDER.to_string());
            Ok(HostConfig::Legacy(LegacyHost {
                project_root,
                integration_folder: PathBuf::from(integration_folder),
            }))
        }
    }
}

/// Parse the `[preprocessor]` table, filling defaults from the host.
fn parse_preprocessor(
    value: Option<&toml::Value>,
    host: &HostConfig,
    path: &Path,
) -> Result<PreprocessorConfig> {
    let empty = toml::Table::new();
    let table = table_or_empty(value, "preprocessor", path, &empty)?;
    warn_unknown_keys(table, "preprocessor", KNOWN_PREPROCESSOR_KEYS, path);

    let step_definitions = parse_string_or_array(
        table.get("step_definitions"),
        "preprocessor.step_definitions",
        path,
    )?;
    let implicit_integration_folder = parse_string(
        table.get("implicit_integration_folder"),
        "preprocessor.implicit_integration_folder",
        path,
    )?
    .map(PathBuf::from);

    PreprocessorConfig::resolve(host, step_definitions, implicit_integration_folder).map_err(
        |err| match err {
            Error::Config { message, path: None } => Error::Config {
                message,
                path: Some(path.to_path_buf()),
            },
            other => other,
        },
    )
}

/// Borrow a section as a table, treating a missing section as empty.
fn table_or_empty<'a>(
    value: Option<&'a toml::Value>,
    section: &str,
    path: &Path,
    empty: &'a toml::Table,
) -> Result<&'a toml::Table> {
    match value {
        None => Ok(empty),
        Some(toml::Value::Table(t)) => Ok(t),
        Some(_) => Err(config_error(path, format!("`{section}` must be a table"))),
    }
}

/// Parse an optional string value.
fn parse_string(value: Option<&toml::Value>, key: &str, path: &Path) -> Result<Option<String>> {
    match value {
        None => Ok(None),
        Some(toml::Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(config_error(path, format!("`{key}` must be a string"))),
    }
}

/// Parse a value given either as one string or as an array of strings.
fn parse_string_or_array(
    value: Option<&toml::Value>,
    key: &str,
    path: &Path,
) -> Result<Option<Vec<String>>> {
    let invalid = || config_error(path, format!("`{key}` must be a string or an array of strings"));

    match value {
        None => Ok(None),
        Some(toml::Value::String(s)) => Ok(Some(vec![s.clone()])),
        Some(toml::Value::Array(items)) => items
            .iter()
            .map(|item| item.as_str().map(String::from).ok_or_else(invalid))
            .collect::<Result<Vec<_>>>()
            .map(Some),
        Some(_) => Err(invalid()),
    }
}

fn warn_unknown_keys(table: &toml::Table, section: &str, known: &[&str], path: &Path) {
    for key in table.keys() {
        if !known.contains(&key.as_str()) {
            warn_unknown_key(path, &format!("{section}.{key}"));
        }
    }
}

/// Warn about unknown configuration key.
fn warn_unknown_key(path: &Path, key: &str) {
    tracing::warn!(
        "{}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

fn config_error(path: &Path, message: impl ToString) -> Error {
    Error::Config {
        message: message.to_string(),
        path: Some(path.to_path_buf()),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
