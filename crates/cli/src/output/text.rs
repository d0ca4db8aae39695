// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text output formatter.
//!
//! One entry per line, in resolution order:
//! ```text
//! /proj/cypress/e2e/a/b/**/*.ts
//! /proj/cypress/e2e/a/**/*.ts
//! ```

use std::io::Write;

use super::Listing;

/// Line-oriented output formatter.
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write every entry on its own line.
    pub fn write(&mut self, listing: &Listing) -> std::io::Result<()> {
        for entry in &listing.entries {
            writeln!(self.writer, "{}", entry)?;
        }
        self.writer.flush()
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
