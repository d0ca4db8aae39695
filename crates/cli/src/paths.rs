// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Lexical path helpers.
//!
//! Nothing in this module touches the filesystem. Paths are compared and
//! joined component-wise, and glob patterns are handled as `/`-separated
//! strings so results are identical on every platform.

use std::path::{Component, Path, PathBuf};

/// Extension of Gherkin feature files.
pub const FEATURE_EXTENSION: &str = "feature";

/// Collapse `.` and `..` components without touching the filesystem.
/// Preserves leading `..` when there is nothing left to pop.
pub fn normalize(path: &Path) -> PathBuf {
    let mut components: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match components.last() {
                Some(Component::Normal(_)) => {
                    components.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => components.push(component),
            },
            other => components.push(other),
        }
    }
    components.iter().collect()
}

/// Make `path` absolute by joining it onto `root` when it is relative.
pub fn absolutize(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize(path)
    } else {
        normalize(&root.join(path))
    }
}

/// Whether `child` lies strictly inside `parent`.
///
/// A path is not inside itself.
pub fn is_path_inside(child: &Path, parent: &Path) -> bool {
    let child = normalize(child);
    let parent = normalize(parent);
    child != parent && child.starts_with(&parent)
}

/// Relative path from `base` to `target`, both absolute.
///
/// Climbs out of `base` with `..` segments when `target` is not below it.
pub fn relative_to(base: &Path, target: &Path) -> PathBuf {
    let base = normalize(base);
    let target = normalize(target);

    let common = base
        .components()
        .zip(target.components())
        .take_while(|(a, b)| a == b)
        .count();

    let mut relative = PathBuf::new();
    for _ in base.components().skip(common) {
        relative.push(Component::ParentDir);
    }
    for component in target.components().skip(common) {
        relative.push(component);
    }
    relative
}

/// Render a path with `/` separators.
pub fn to_slash(path: &Path) -> String {
    let rendered = path.to_string_lossy();
    if cfg!(windows) {
        rendered.replace('\\', "/")
    } else {
        rendered.into_owned()
    }
}

/// Strip the `.feature` extension from the final component, if present.
pub fn trim_feature_extension(path: &Path) -> PathBuf {
    match path.extension() {
        Some(ext) if ext == FEATURE_EXTENSION => path.with_extension(""),
        _ => path.to_path_buf(),
    }
}

/// Leaf-first ancestors of a relative `/`-separated path, itself included.
///
/// `"a/b/c"` yields `["a/b/c", "a/b", "a"]`. The current directory is never
/// part of the result.
///
/// # Panics
///
/// Panics if `relative_path` is absolute; callers must pass a path that was
/// already made relative to a base folder.
pub fn path_parts(relative_path: &str) -> Vec<String> {
    assert!(
        !relative_path.starts_with('/') && !Path::new(relative_path).is_absolute(),
        "expected a relative path but got {relative_path}"
    );

    let mut parts = Vec::new();
    let mut current = relative_path.trim_end_matches('/');

    while !current.is_empty() && current != "." {
        parts.push(current.to_string());
        current = match current.rfind('/') {
            Some(idx) => current[..idx].trim_end_matches('/'),
            None => "",
        };
    }

    parts
}

/// Make a `/`-separated glob pattern absolute against `root`.
///
/// Absolute patterns are returned untouched. Relative patterns are joined
/// onto the root and `.`/`..` segments are collapsed lexically.
pub fn ensure_is_absolute(root: &Path, pattern: &str) -> String {
    if pattern.starts_with('/') || Path::new(pattern).is_absolute() {
        return pattern.to_string();
    }

    normalize_pattern(&format!("{}/{}", to_slash(root), pattern))
}

/// Lexically normalize a `/`-separated glob pattern.
///
/// Empty and `.` segments are dropped and `..` pops its predecessor; `..`
/// above the root of an absolute pattern is discarded. A trailing slash is
/// kept, and a pattern that collapses to nothing becomes `.`.
pub fn normalize_pattern(pattern: &str) -> String {
    let absolute = pattern.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();
    for segment in pattern.split('/') {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(last) if *last != ".." => {
                    segments.pop();
                }
                _ if absolute => {}
                _ => segments.push(".."),
            },
            other => segments.push(other),
        }
    }

    let mut normalized = if absolute { String::from("/") } else { String::new() };
    normalized.push_str(&segments.join("/"));
    if normalized.is_empty() {
        normalized.push('.');
    }
    if pattern.ends_with('/') && !normalized.ends_with('/') {
        normalized.push('/');
    }
    normalized
}

#[cfg(test)]
#[path = "paths_tests.rs"]
mod tests;
