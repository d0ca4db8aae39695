// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `stepdefs patterns` and `stepdefs paths` command implementation.

use stepdefs::cli::{Cli, OutputFormat, ResolveArgs};
use stepdefs::config;
use stepdefs::discovery;
use stepdefs::error::ExitCode;
use stepdefs::output::json::JsonFormatter;
use stepdefs::output::text::TextFormatter;
use stepdefs::output::{Listing, ListingKind};
use stepdefs::paths;
use stepdefs::resolver;
use stepdefs::walker::{self, DiskMatcher};

/// Resolve one feature file and print its patterns or matched paths.
pub fn run(cli: &Cli, args: &ResolveArgs, kind: ListingKind) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;

    let mut configuration = match discovery::resolve_config(cli.config.as_deref(), &cwd)? {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            config::load(&path)?
        }
        None => {
            tracing::debug!("no config found, using defaults rooted at {}", cwd.display());
            config::default_config(&cwd)?
        }
    };

    if !args.step_definitions.is_empty() {
        configuration.preprocessor.step_definitions = args.step_definitions.clone();
    }

    let feature = paths::absolutize(&cwd, &args.feature);
    let patterns = resolver::step_definition_patterns(&configuration, &feature)?;

    let listing = match kind {
        ListingKind::Patterns => Listing::patterns(&feature, patterns),
        ListingKind::Paths => {
            let files = walker::step_definition_paths(&DiskMatcher::default(), &patterns)?;
            Listing::paths(&feature, &files)
        }
    };

    let stdout = std::io::stdout().lock();
    match args.output {
        OutputFormat::Text => TextFormatter::new(stdout).write(&listing)?,
        OutputFormat::Json => JsonFormatter::new(stdout).write(&listing)?,
    }

    Ok(ExitCode::Success)
}
