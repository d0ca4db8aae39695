// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output formatter.
//!
//! JSON is buffered and written at the end (not streamed).

use std::io::Write;

use serde_json::{Map, Value};

use super::Listing;

/// JSON output formatter.
pub struct JsonFormatter<W: Write> {
    writer: W,
}

impl<W: Write> JsonFormatter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write the listing as a single pretty-printed JSON object.
    pub fn write(&mut self, listing: &Listing) -> anyhow::Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &to_json(listing))?;
        writeln!(self.writer)?;
        Ok(())
    }
}

/// Build `{"feature": ..., "<kind>": [...]}`.
pub fn to_json(listing: &Listing) -> Value {
    let mut object = Map::new();
    object.insert(
        "feature".to_string(),
        Value::String(listing.feature.display().to_string()),
    );
    object.insert(
        listing.kind.key().to_string(),
        Value::Array(listing.entries.iter().cloned().map(Value::String).collect()),
    );
    Value::Object(object)
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
