// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Resolve the step definition files that implement a Gherkin feature file
#[derive(Parser)]
#[command(name = "stepdefs")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "STEPDEFS_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the glob patterns searched for a feature's step definitions
    Patterns(ResolveArgs),
    /// Print the step definition files found for a feature
    Paths(ResolveArgs),
}

#[derive(clap::Args)]
pub struct ResolveArgs {
    /// Feature file to resolve
    #[arg(value_name = "FEATURE")]
    pub feature: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Step definition template, replacing the configured ones (repeatable)
    #[arg(long = "step-definitions", value_name = "TEMPLATE")]
    pub step_definitions: Vec<String>,
}

#[derive(Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
