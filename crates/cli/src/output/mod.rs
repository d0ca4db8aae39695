//! Output formatting for resolution results.

pub mod json;
pub mod text;

use std::path::{Path, PathBuf};

/// What a listing contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingKind {
    /// Absolute glob patterns.
    Patterns,
    /// Matched step definition files.
    Paths,
}

impl ListingKind {
    /// Key used for the entries in structured output.
    pub fn key(self) -> &'static str {
        match self {
            ListingKind::Patterns => "patterns",
            ListingKind::Paths => "paths",
        }
    }
}

/// Ordered resolution result for one feature file.
#[derive(Debug, Clone)]
pub struct Listing {
    pub feature: PathBuf,
    pub kind: ListingKind,
    pub entries: Vec<String>,
}

impl Listing {
    pub fn patterns(feature: &Path, patterns: Vec<String>) -> Self {
        Self {
            feature: feature.to_path_buf(),
            kind: ListingKind::Patterns,
            entries: patterns,
        }
    }

    pub fn paths(feature: &Path, paths: &[PathBuf]) -> Self {
        Self {
            feature: feature.to_path_buf(),
            kind: ListingKind::Paths,
            entries: paths.iter().map(|p| p.display().to_string()).collect(),
        }
    }
}
