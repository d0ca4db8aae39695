//! Behavioral specs for step definition resolution.
//!
//! Covers both host schema generations, placeholder expansion order,
//! on-disk expansion, and the fatal error paths.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

// =============================================================================
// Current Schema
// =============================================================================

/// > `[filepart]` walks from the feature's own directory up to the base
/// > folder, then searches the base folder itself
#[test]
fn filepart_patterns_walk_up_to_base_folder() {
    let lines = resolve_lines("current", "patterns", "cypress/e2e/auth/login.feature");

    assert_eq!(
        lines,
        vec![
            "cypress/e2e/auth/login/steps.ts",
            "cypress/e2e/auth/steps.ts",
            "cypress/e2e/steps.ts",
            "cypress/support/step_definitions/*.ts",
        ]
    );
}

/// > Matched files keep pattern order
#[test]
fn paths_follow_pattern_order() {
    let lines = resolve_lines("current", "paths", "cypress/e2e/auth/login.feature");

    assert_eq!(
        lines,
        vec![
            "cypress/e2e/auth/login/steps.ts",
            "cypress/e2e/auth/steps.ts",
            "cypress/e2e/steps.ts",
            "cypress/support/step_definitions/common.ts",
        ]
    );
}

/// > JSON output names the feature and lists the patterns
#[test]
fn patterns_as_json() {
    let root = fixture("current");
    let output = stepdefs_cmd()
        .args(["patterns", "cypress/e2e/auth/login.feature", "-o", "json"])
        .current_dir(&root)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(
        json["feature"]
            .as_str()
            .unwrap()
            .ends_with("cypress/e2e/auth/login.feature")
    );
    assert_eq!(json["patterns"].as_array().unwrap().len(), 4);
}

/// > --step-definitions replaces the configured templates
#[test]
fn step_definitions_flag_overrides_config() {
    let root = fixture("current");
    let output = stepdefs_cmd()
        .args([
            "patterns",
            "cypress/e2e/auth/login.feature",
            "--step-definitions",
            "cypress/e2e/[filepath].ts",
        ])
        .current_dir(&root)
        .output()
        .unwrap();
    assert!(output.status.success());

    let lines = relative_lines(&root, &String::from_utf8(output.stdout).unwrap());
    assert_eq!(lines, vec!["cypress/e2e/auth/login.ts"]);
}

// =============================================================================
// Legacy Schema
// =============================================================================

/// > Without spec patterns, features are related to the integration folder
/// > and the default templates apply
#[test]
fn legacy_schema_uses_default_templates() {
    let lines = resolve_lines("legacy", "patterns", "cypress/integration/search.feature");

    assert_eq!(
        lines,
        vec![
            "cypress/integration/search/**/*.{js,mjs,ts,tsx}",
            "cypress/integration/search.{js,mjs,ts,tsx}",
            "cypress/support/step_definitions/**/*.{js,mjs,ts,tsx}",
        ]
    );
}

#[test]
fn legacy_schema_finds_files() {
    let lines = resolve_lines("legacy", "paths", "cypress/integration/search.feature");

    assert_eq!(
        lines,
        vec![
            "cypress/integration/search/extra.js",
            "cypress/integration/search.ts",
            "cypress/support/step_definitions/shared.ts",
        ]
    );
}

/// > A legacy feature outside the integration folder is rejected even when
/// > it is inside the project root
#[test]
fn legacy_feature_outside_integration_folder_fails() {
    stepdefs_cmd()
        .args(["patterns", "cypress/support/step_definitions/shared.ts"])
        .current_dir(fixture("legacy"))
        .assert()
        .code(1)
        .stderr(predicates::str::contains("is not inside"))
        .stderr(predicates::str::contains("cypress/integration"));
}

// =============================================================================
// Errors
// =============================================================================

/// > A feature outside the project root fails with both paths named
#[test]
fn feature_outside_project_root_fails() {
    let project = temp_project(&[(
        "stepdefs.toml",
        "version = 1\n[host]\nspec_pattern = \"**/*.feature\"\n",
    )]);
    let outside = tempfile::tempdir().unwrap();
    let feature = outside.path().join("a.feature");

    stepdefs_cmd()
        .arg("patterns")
        .arg(&feature)
        .current_dir(project.path())
        .assert()
        .code(1)
        .stderr(predicates::str::contains("is not inside"))
        .stderr(predicates::str::contains(feature.display().to_string()));
}

/// > A template containing both placeholders is a configuration error and
/// > nothing is printed
#[test]
fn conflicting_placeholders_fail_before_output() {
    let project = temp_project(&[
        (
            "stepdefs.toml",
            "version = 1\n[host]\nspec_pattern = \"**/*.feature\"\n[preprocessor]\nstep_definitions = [\"ok/*.ts\", \"[filepath]/[filepart].ts\"]\n",
        ),
        ("a.feature", ""),
    ]);

    stepdefs_cmd()
        .args(["paths", "a.feature"])
        .current_dir(project.path())
        .assert()
        .code(2)
        .stdout(predicates::str::is_empty())
        .stderr(predicates::str::contains(
            "pattern cannot contain both [filepath] and [filepart]",
        ));
}

/// > An unsupported config version is rejected
#[test]
fn unsupported_config_version_fails() {
    let project = temp_project(&[("stepdefs.toml", "version = 9\n"), ("a.feature", "")]);

    stepdefs_cmd()
        .args(["patterns", "a.feature"])
        .current_dir(project.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unsupported config version 9"));
}

/// > An explicit config path that does not exist is rejected
#[test]
fn missing_explicit_config_fails() {
    let project = temp_project(&[("a.feature", "")]);

    stepdefs_cmd()
        .args(["patterns", "a.feature", "-C", "nope.toml"])
        .current_dir(project.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("config file not found"));
}

// =============================================================================
// Defaults
// =============================================================================

/// > Without a config file the current schema rooted at the working
/// > directory is assumed
#[test]
fn defaults_apply_without_config() {
    let project = temp_project(&[
        ("cypress/e2e/cart.feature", ""),
        ("cypress/e2e/cart.ts", ""),
        ("cypress/e2e/cart/more.mjs", ""),
        ("cypress/e2e/other.ts", ""),
    ]);

    let output = stepdefs_cmd()
        .args(["paths", "cypress/e2e/cart.feature"])
        .current_dir(project.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let root = std::fs::canonicalize(project.path()).unwrap();
    let lines = relative_lines(&root, &String::from_utf8(output.stdout).unwrap());
    assert_eq!(lines, vec!["cypress/e2e/cart/more.mjs", "cypress/e2e/cart.ts"]);
}
