// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::path::Path;

use super::TextFormatter;
use crate::output::Listing;

#[test]
fn writes_one_entry_per_line_in_order() {
    let listing = Listing::patterns(
        Path::new("/proj/a.feature"),
        vec!["/proj/a/**/*.ts".to_string(), "/proj/**/*.ts".to_string()],
    );

    let mut buffer = Vec::new();
    TextFormatter::new(&mut buffer).write(&listing).unwrap();

    assert_eq!(
        String::from_utf8(buffer).unwrap(),
        "/proj/a/**/*.ts\n/proj/**/*.ts\n"
    );
}

#[test]
fn empty_listing_writes_nothing() {
    let listing = Listing::paths(Path::new("/proj/a.feature"), &[]);

    let mut buffer = Vec::new();
    TextFormatter::new(&mut buffer).write(&listing).unwrap();

    assert!(buffer.is_empty());
}
