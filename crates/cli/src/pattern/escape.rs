// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Glob metacharacter handling.
//!
//! Patterns are matched with backslash escapes disabled, so a literal
//! metacharacter is written as a one-character class: `*` becomes `[*]`.

/// Characters with special meaning in glob patterns.
pub const GLOB_META: &[char] = &['*', '?', '[', ']', '{', '}'];

/// Escape every glob metacharacter in `s` so it matches literally.
pub fn escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        if GLOB_META.contains(&c) {
            escaped.push('[');
            escaped.push(c);
            escaped.push(']');
        } else {
            escaped.push(c);
        }
    }
    escaped
}

/// Check if a string contains glob pattern characters.
pub fn has_magic(s: &str) -> bool {
    s.contains(GLOB_META)
}

/// Leading run of `/`-separated segments free of glob metacharacters.
///
/// Returns the whole pattern when it has no metacharacters at all.
/// `"/proj/cypress/**/*.ts"` yields `"/proj/cypress"`; a pattern whose
/// first segment is magic yields `""`.
pub fn literal_prefix(pattern: &str) -> &str {
    let mut end = 0;
    for (idx, segment) in segment_bounds(pattern) {
        if has_magic(segment) {
            let prefix = pattern[..end].trim_end_matches('/');
            if prefix.is_empty() && pattern.starts_with('/') {
                return "/";
            }
            return prefix;
        }
        end = idx + segment.len();
    }
    pattern
}

/// Directory that every match of `pattern` lives under.
///
/// Like [`literal_prefix`], except that a pattern with no metacharacters
/// names a single file, so its parent directory is returned.
pub fn glob_base(pattern: &str) -> &str {
    if has_magic(pattern) {
        return literal_prefix(pattern);
    }
    match pattern.trim_end_matches('/').rfind('/') {
        Some(0) => "/",
        Some(idx) => &pattern[..idx],
        None => "",
    }
}

/// Byte offsets and contents of each `/`-separated segment.
fn segment_bounds(pattern: &str) -> impl Iterator<Item = (usize, &str)> {
    let mut offset = 0;
    pattern.split('/').map(move |segment| {
        let start = offset;
        offset += segment.len() + 1;
        (start, segment)
    })
}

#[cfg(test)]
#[path = "escape_tests.rs"]
mod tests;
