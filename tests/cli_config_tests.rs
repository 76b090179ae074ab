//! End-to-end tests for `platform-tokens config` commands.

mod fixtures;
use fixtures::*;

use std::fs;

// ============================================================================
// Show Command Tests
// ============================================================================

#[test]
fn test_config_show_default() {
    let config_dir = temp_config_dir();
    let output = run(&["config", "show"], config_dir.path());

    assert_eq!(
        output.status.code(),
        Some(0),
        "Show config should succeed. stderr: {}",
        stderr(&output)
    );

    let text = stdout(&output);
    assert!(text.contains("Token Table: (built-in)"));
    assert!(text.contains("Initial Mode: light"));
    assert!(text.contains("Brand: platform"));
}

#[test]
fn test_config_show_json_schema() {
    let config_dir = temp_config_dir();
    let output = run(&["config", "show", "--json"], config_dir.path());

    assert_eq!(output.status.code(), Some(0));
    let result = stdout_json(&output);

    assert!(result["paths"].is_object(), "Should have paths object");
    assert!(result["build"].is_object(), "Should have build object");
    assert!(result["ui"].is_object(), "Should have ui object");
    assert!(result["paths"]["token_table"].is_null());
    assert_eq!(
        result["paths"]["state_dir"],
        config_dir.path().to_string_lossy().as_ref()
    );
    assert_eq!(result["build"]["output_dir"], "build");
    assert_eq!(result["ui"]["initial_mode"], "light");
    assert_eq!(result["ui"]["brand"], "platform");
}

// ============================================================================
// Set Command Tests
// ============================================================================

#[test]
fn test_config_set_requires_an_option() {
    let config_dir = temp_config_dir();
    let output = run(&["config", "set"], config_dir.path());

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("At least one configuration option"));
}

#[test]
fn test_config_set_persists_values() {
    let config_dir = temp_config_dir();
    let output = run(
        &[
            "config",
            "set",
            "--initial-mode",
            "dark",
            "--brand",
            "education",
            "--output-dir",
            "dist/tokens",
        ],
        config_dir.path(),
    );

    assert_eq!(
        output.status.code(),
        Some(0),
        "Set should succeed. stderr: {}",
        stderr(&output)
    );
    assert!(config_dir.path().join("config.toml").exists());

    let output = run(&["config", "show", "--json"], config_dir.path());
    let result = stdout_json(&output);
    assert_eq!(result["ui"]["initial_mode"], "dark");
    assert_eq!(result["ui"]["brand"], "education");
    assert_eq!(result["build"]["output_dir"], "dist/tokens");

    // Theme mode starts from the configured initial mode
    let output = run(&["theme", "show"], config_dir.path());
    assert_eq!(stdout(&output).trim(), "dark");
}

#[test]
fn test_config_set_token_table() {
    let config_dir = temp_config_dir();
    let table = write_token_table(
        config_dir.path(),
        "custom.json",
        &[("SpacingScale4", "1rem")],
        &[],
    );

    let output = run(
        &["config", "set", "--token-table", table.to_str().unwrap()],
        config_dir.path(),
    );
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let saved = fs::read_to_string(config_dir.path().join("config.toml")).unwrap();
    assert!(saved.contains("custom.json"));

    let output = run(&["tokens", "get", "spacing.scale.4"], config_dir.path());
    assert_eq!(stdout(&output).trim(), "1rem");
}

#[test]
fn test_config_set_missing_token_table() {
    let config_dir = temp_config_dir();
    let missing = config_dir.path().join("missing.json");

    let output = run(
        &["config", "set", "--token-table", missing.to_str().unwrap()],
        config_dir.path(),
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("does not exist"));
    assert!(!config_dir.path().join("config.toml").exists());
}

#[test]
fn test_config_set_unsupported_token_table() {
    let config_dir = temp_config_dir();
    let table = write_file(config_dir.path(), "tokens.yaml", "a: b");

    let output = run(
        &["config", "set", "--token-table", table.to_str().unwrap()],
        config_dir.path(),
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Unsupported token table format"));
}

#[test]
fn test_config_set_invalid_brand_key() {
    let config_dir = temp_config_dir();
    let output = run(&["config", "set", "--brand", "Not A Key"], config_dir.path());

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("kebab-case"));
}

#[test]
fn test_config_set_invalid_initial_mode() {
    let config_dir = temp_config_dir();
    let output = run(
        &["config", "set", "--initial-mode", "sepia"],
        config_dir.path(),
    );

    assert_ne!(output.status.code(), Some(0));
}

#[test]
fn test_config_set_system_mode_alias() {
    let config_dir = temp_config_dir();
    let output = run(&["config", "set", "--initial-mode", "auto"], config_dir.path());
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let output = run(&["config", "show", "--json"], config_dir.path());
    assert_eq!(stdout_json(&output)["ui"]["initial_mode"], "system");
}

#[test]
fn test_config_invalid_file_is_reported() {
    let config_dir = temp_config_dir();
    write_file(config_dir.path(), "config.toml", "[ui\nbroken");

    let output = run(&["config", "show"], config_dir.path());
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Failed to load configuration"));
}

#[test]
fn test_config_set_keeps_values_when_table_moved() {
    let config_dir = temp_config_dir();
    let table = write_token_table(config_dir.path(), "t.json", &[], &[]);

    let output = run(
        &[
            "config",
            "set",
            "--token-table",
            table.to_str().unwrap(),
            "--brand",
            "healthcare",
            "--initial-mode",
            "dark",
        ],
        config_dir.path(),
    );
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let before = fs::read_to_string(config_dir.path().join("config.toml")).unwrap();

    fs::remove_file(&table).unwrap();

    // Unrelated edit is refused while the saved table is missing
    let output = run(&["config", "set", "--output-dir", "dist"], config_dir.path());
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("does not exist"));

    let after = fs::read_to_string(config_dir.path().join("config.toml")).unwrap();
    assert_eq!(after, before);
    assert!(after.contains("healthcare"));

    // Repointing the table repairs the file and keeps the other values
    let moved = write_token_table(config_dir.path(), "moved.json", &[], &[]);
    let output = run(
        &["config", "set", "--token-table", moved.to_str().unwrap()],
        config_dir.path(),
    );
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let result = stdout_json(&run(&["config", "show", "--json"], config_dir.path()));
    assert_eq!(result["ui"]["brand"], "healthcare");
    assert_eq!(result["ui"]["initial_mode"], "dark");
}

#[test]
fn test_config_set_does_not_overwrite_broken_file() {
    let config_dir = temp_config_dir();
    let path = write_file(config_dir.path(), "config.toml", "[ui\nbroken");

    let output = run(&["config", "set", "--brand", "education"], config_dir.path());
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Failed to load configuration"));
    assert_eq!(fs::read_to_string(path).unwrap(), "[ui\nbroken");
}

#[test]
fn test_config_auto_mode_in_file() {
    let config_dir = temp_config_dir();
    write_file(
        config_dir.path(),
        "config.toml",
        "[ui]\ninitial_mode = \"auto\"\n",
    );

    let output = run(&["config", "show", "--json"], config_dir.path());
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(stdout_json(&output)["ui"]["initial_mode"], "system");
}

#[test]
fn test_config_unreadable_file_is_io_error() {
    let config_dir = temp_config_dir();
    fs::create_dir(config_dir.path().join("config.toml")).unwrap();

    let output = run(&["config", "show"], config_dir.path());
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to read config file"));

    let output = run(&["tokens", "resolve"], config_dir.path());
    assert_eq!(output.status.code(), Some(2));
}
