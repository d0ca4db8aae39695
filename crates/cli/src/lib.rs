//! Step definition resolution for Gherkin feature files.
//!
//! Given a feature file and the host/preprocessor configuration, compute the
//! ordered glob patterns that may contain its step definitions, then expand
//! them on disk.

pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod output;
pub mod paths;
pub mod pattern;
pub mod preprocessor;
pub mod resolver;
pub mod schema;
pub mod walker;

pub use error::{Error, ExitCode, Result};
pub use preprocessor::PreprocessorConfig;
pub use resolver::step_definition_patterns;
pub use schema::{Configuration, CurrentHost, HostConfig, LegacyHost, Projection};
pub use walker::{DiskMatcher, FileMatcher, WalkerConfig, step_definition_paths};

#[cfg(test)]
pub mod test_utils;
