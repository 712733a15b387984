//! End-to-end tests for `dtcgen inspect`.

use std::process::Command;

mod fixtures;

use fixtures::*;

/// Path to the dtcgen binary
fn dtcgen_bin() -> &'static str {
    env!("CARGO_BIN_EXE_dtcgen")
}

#[test]
fn test_inspect_prints_derived_configs() {
    let temp = tempfile::tempdir().expect("temp dir");
    let out_root = write_design_export(&temp);

    let output = Command::new(dtcgen_bin())
        .args(["inspect", "--output-root", out_root.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let configs: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("inspect output should be JSON");
    let config = &configs[0];

    assert_eq!(config["container"]["name"], "travelCities");
    assert_eq!(config["dynamicClasses"][0], "CityCell");
    assert_eq!(config["dataVariables"][0]["name"], "cities");
    assert_eq!(config["dataVariables"][0]["type"], "Cities");

    let section = &config["listSections"][0];
    assert_eq!(section["classPrefix"], "City");
    assert_eq!(section["sectionName"], "CitySection");
    assert_eq!(section["variableName"], "cities");
    assert_eq!(section["size"]["width"], 100.0);
    assert_eq!(section["size"]["height"], 80.0);
    assert_eq!(section["insets"]["top"], 0.0);
    assert_eq!(section["insets"]["right"], 0.0);
}

#[test]
fn test_inspect_does_not_generate() {
    let temp = tempfile::tempdir().expect("temp dir");
    let out_root = write_design_export(&temp);

    let output = Command::new(dtcgen_bin())
        .args(["inspect", "--output-root", out_root.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(0));

    assert!(!generated_dir(&out_root).exists());
}

#[test]
fn test_inspect_missing_metadata_fails() {
    let temp = tempfile::tempdir().expect("temp dir");

    let output = Command::new(dtcgen_bin())
        .args(["inspect", "--output-root", temp.path().to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_ne!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stderr).contains("metadata"));
}
