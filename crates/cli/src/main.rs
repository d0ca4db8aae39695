// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Stepdefs CLI entry point.

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use stepdefs::cli::{Cli, Command};
use stepdefs::error::ExitCode;
use stepdefs::output::ListingKind;

mod cmd_resolve;

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("STEPDEFS_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("stepdefs: {}", e);
            match e.downcast_ref::<stepdefs::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match &cli.command {
        None => {
            // Show help for bare invocation
            Cli::command().print_help()?;
            println!();
            Ok(ExitCode::Success)
        }
        Some(Command::Patterns(args)) => cmd_resolve::run(&cli, args, ListingKind::Patterns),
        Some(Command::Paths(args)) => cmd_resolve::run(&cli, args, ListingKind::Paths),
    }
}
