//! End-to-end tests for `platform-tokens style`.

mod fixtures;
use fixtures::*;

#[test]
fn test_style_button_defaults_css() {
    let config_dir = temp_config_dir();
    let output = run(&["style", "button"], config_dir.path());

    assert_eq!(
        output.status.code(),
        Some(0),
        "Style should succeed. stderr: {}",
        stderr(&output)
    );

    let css = stdout(&output);
    assert!(css.contains("background-color: #1976d2;"));
    assert!(css.contains("min-height: 40px;"));
    assert!(css.contains("cursor: pointer;"));
    assert!(css.contains("&:hover {"));
}

#[test]
fn test_style_button_disabled_large_json() {
    let config_dir = temp_config_dir();
    let output = run(
        &[
            "style",
            "button",
            "--variant",
            "secondary",
            "--size",
            "lg",
            "--disabled",
            "--full-width",
            "--json",
        ],
        config_dir.path(),
    );

    assert_eq!(output.status.code(), Some(0));
    let style = stdout_json(&output);
    assert_eq!(style["base"]["minHeight"], "48px");
    assert_eq!(style["base"]["cursor"], "not-allowed");
    assert_eq!(style["base"]["opacity"], "0.6");
    assert_eq!(style["base"]["width"], "100%");
}

#[test]
fn test_style_badge_variants() {
    let config_dir = temp_config_dir();
    let output = run(
        &["style", "badge", "--variant", "success", "--outline", "--json"],
        config_dir.path(),
    );

    assert_eq!(output.status.code(), Some(0));
    let style = stdout_json(&output);
    assert_eq!(style["base"]["color"], "#4caf50");
}

#[test]
fn test_style_unknown_variant() {
    let config_dir = temp_config_dir();
    let output = run(&["style", "button", "--variant", "rainbow"], config_dir.path());

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("rainbow"));
}

#[test]
fn test_style_rejects_flags_of_other_component() {
    let config_dir = temp_config_dir();
    let output = run(&["style", "button", "--dot"], config_dir.path());
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("--dot"));

    let output = run(&["style", "badge", "--loading"], config_dir.path());
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("--loading"));
}

#[test]
fn test_style_badge_size_xs_not_valid_for_button() {
    let config_dir = temp_config_dir();
    let output = run(&["style", "badge", "--size", "xs"], config_dir.path());
    assert_eq!(output.status.code(), Some(0));

    let output = run(&["style", "button", "--size", "xs"], config_dir.path());
    assert_eq!(output.status.code(), Some(1));
}
