//! End-to-end tests for the `brandkit` CLI.

use std::process::Command;

/// Path to the brandkit binary
fn brandkit_bin() -> String {
    std::env::var("CARGO_BIN_EXE_brandkit").unwrap_or_else(|_| "target/release/brandkit".to_string())
}

fn run(args: &[&str]) -> std::process::Output {
    Command::new(brandkit_bin())
        .args(args)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_scheme_outputs_all_stops() {
    let output = run(&["scheme", "#0066CC"]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("base:"));
    assert!(stdout.contains("#0066CC"));
    assert!(stdout.contains("contrast:"));
    assert!(stdout.contains("#FFFFFF"), "dark seed gets white text");
}

#[test]
fn test_scheme_json_output() {
    let output = run(&["scheme", "#0066CC", "--json"]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("Should parse JSON output");
    assert_eq!(json["base"], "#0066CC");
    assert_eq!(json["contrast"], "#FFFFFF");
}

#[test]
fn test_scheme_rejects_invalid_seed() {
    let output = run(&["scheme", "bluish"]);
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid seed color"));
}

#[test]
fn test_scale_eleven_stops() {
    let output = run(&["scale", "#0066CC"]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("50:"));
    assert!(stdout.contains("950:"));
    assert!(stdout.contains("DEFAULT: #0066CC"));
}

#[test]
fn test_scale_five_stops() {
    let output = run(&["scale", "#0066CC", "--stops", "5"]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("lighter:"));
    assert!(stdout.contains("base:    #0066CC"));
    assert!(stdout.contains("darker:"));
}

#[test]
fn test_scale_rejects_unsupported_stop_count() {
    let output = run(&["scale", "#0066CC", "--stops", "7"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_contrast_pass_exits_zero() {
    let output = run(&["contrast", "#000000", "#FFFFFF"]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("21.00"));
    assert!(stdout.contains("AA normal:  pass"));
}

#[test]
fn test_contrast_fail_exits_one() {
    // Light gray on white: far below AA for normal text
    let output = run(&["contrast", "#CCCCCC", "#FFFFFF"]);
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("AA normal:  fail"));
}

#[test]
fn test_contrast_json_report() {
    let output = run(&["contrast", "#000000", "#FFFFFF", "--json"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("Should parse JSON output");

    assert_eq!(json["meetsAa"], true);
    assert_eq!(json["meetsAaa"], true);
    assert!(json["ratio"].is_number());
}

#[test]
fn test_vars_prints_projected_variables() {
    let output = run(&["vars"]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--brand-50:"));
    assert!(stdout.contains("--brand: #0066CC;"));
    assert!(stdout.contains("--neutral-500:"));
    assert!(stdout.contains("--semantic:"));
}

#[test]
fn test_vars_custom_seed() {
    let output = run(&["vars", "--brand", "#FF0000"]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--brand: #FF0000;"));
}

#[test]
fn test_help_lists_subcommands() {
    let output = run(&["--help"]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    for subcommand in ["scheme", "scale", "contrast", "vars"] {
        assert!(stdout.contains(subcommand), "help missing {subcommand}");
    }
}
