//! End-to-end tests for `dtcgen generate`.

use std::fs;
use std::process::Command;

mod fixtures;

use fixtures::*;

/// Path to the dtcgen binary
fn dtcgen_bin() -> &'static str {
    env!("CARGO_BIN_EXE_dtcgen")
}

#[test]
fn test_generate_end_to_end() {
    let temp = tempfile::tempdir().expect("temp dir");
    let template_root = write_template_root(&temp);
    let out_root = write_design_export(&temp);

    let output = Command::new(dtcgen_bin())
        .args([
            "generate",
            "--name",
            "TravelApp",
            "--output-root",
            out_root.to_str().unwrap(),
            "--template-dir",
            template_root.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "Generation should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let project = generated_dir(&out_root);

    // Placeholders renamed, one-shot templates resolved
    assert_eq!(
        fs::read_to_string(project.join("project.yml")).unwrap(),
        "name: TravelApp\n"
    );
    assert_eq!(
        fs::read_to_string(
            project.join("TravelApp/TravelAppTests/TravelAppTests.swift")
        )
        .unwrap(),
        "final class TravelAppTests {}\n"
    );
    assert!(!project.join("projectName").exists());

    // Per-container config artifact derived from the cell view
    let config =
        fs::read_to_string(project.join("TravelApp/Sources/travelCitiesConfig.swift")).unwrap();
    assert!(config.contains("struct travelCitiesConfig"));
    assert!(config.contains("static let cities = \"CitySection\""));
    assert!(config.contains("var cities: [Cities] = []"));

    // Per-container controller artifact under a container-named dir
    let controller = fs::read_to_string(
        project.join("TravelApp/Sources/travelCities/travelCitiesViewController.swift"),
    )
    .unwrap();
    assert!(controller.contains("final class travelCitiesViewController"));
    assert!(controller.contains("// view city cell"));

    // Aggregates
    let registry =
        fs::read_to_string(project.join("TravelApp/Sources/viewController.swift")).unwrap();
    assert!(registry.contains("register(travelCitiesViewController)"));
    let consumer =
        fs::read_to_string(project.join("TravelApp/Sources/DesignToCode.generated.swift"))
            .unwrap();
    assert!(consumer.contains("\"travelCities\""));
    assert!(consumer.contains("\"cityCell\""));
    assert!(consumer.contains("\"HotelCell\""));

    // Template originals removed after emission
    assert!(!project
        .join("TravelApp/Sources/containerNameConfig.swift.hbs")
        .exists());
    assert!(!project.join("TravelApp/Sources/containerName").exists());
    assert!(!project
        .join("TravelApp/Sources/viewController.swift.hbs")
        .exists());
    assert!(!project
        .join("TravelApp/Sources/DesignToCode.generated.swift.hbs")
        .exists());
}

#[test]
fn test_generate_tree_json_round_trip() {
    let temp = tempfile::tempdir().expect("temp dir");
    let template_root = write_template_root(&temp);
    let out_root = write_design_export(&temp);

    let output = Command::new(dtcgen_bin())
        .args([
            "generate",
            "--name",
            "TravelApp",
            "--output-root",
            out_root.to_str().unwrap(),
            "--template-dir",
            template_root.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(0));

    let written: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(
            generated_dir(&out_root).join("TravelApp/Sources/tree.json"),
        )
        .unwrap(),
    )
    .unwrap();
    let original: serde_json::Value = serde_json::from_str(sample_tree_json()).unwrap();
    assert_eq!(written, original, "pipeline must not mutate the tree");
}

#[test]
fn test_generate_assets_empty_slices_single_image() {
    // Empty slice directory plus one image at the image root: no slice
    // output, one imageset container with manifest and file copy.
    let temp = tempfile::tempdir().expect("temp dir");
    let template_root = write_template_root(&temp);
    let out_root = write_design_export(&temp);

    let output = Command::new(dtcgen_bin())
        .args([
            "generate",
            "--name",
            "TravelApp",
            "--output-root",
            out_root.to_str().unwrap(),
            "--template-dir",
            template_root.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(0));

    let catalog = generated_dir(&out_root).join("TravelApp/Assets.xcassets");
    let generated_assets = catalog.join("DtcGenerated");

    assert!(generated_assets.join("Contents.json").exists());
    assert!(generated_assets.join("images/Contents.json").exists());

    let item = generated_assets.join("images/hero.imageset");
    assert!(item.join("hero.png").exists());
    let manifest = fs::read_to_string(item.join("Contents.json")).unwrap();
    assert!(manifest.contains("hero.png"));

    // Empty slices produced nothing besides the images subtree and the
    // namespace manifest.
    let entries: Vec<_> = fs::read_dir(&generated_assets)
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(entries.len(), 2, "unexpected entries: {entries:?}");

    // Manifest-template staging is not part of the output
    assert!(!catalog.join("intermediateDirectory").exists());
}

#[test]
fn test_generate_blank_name_fails_without_writes() {
    let temp = tempfile::tempdir().expect("temp dir");
    let template_root = write_template_root(&temp);
    let out_root = write_design_export(&temp);

    let output = Command::new(dtcgen_bin())
        .args([
            "generate",
            "--name",
            "   ",
            "--output-root",
            out_root.to_str().unwrap(),
            "--template-dir",
            template_root.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_ne!(output.status.code(), Some(0));
    assert!(
        String::from_utf8_lossy(&output.stderr).contains("project name is empty"),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(
        !generated_dir(&out_root).exists(),
        "a precondition failure must not touch the filesystem"
    );
}

#[test]
fn test_generate_replaces_prior_run() {
    let temp = tempfile::tempdir().expect("temp dir");
    let template_root = write_template_root(&temp);
    let out_root = write_design_export(&temp);

    for _ in 0..2 {
        let output = Command::new(dtcgen_bin())
            .args([
                "generate",
                "--name",
                "TravelApp",
                "--output-root",
                out_root.to_str().unwrap(),
                "--template-dir",
                template_root.to_str().unwrap(),
            ])
            .output()
            .expect("Failed to execute command");
        assert_eq!(
            output.status.code(),
            Some(0),
            "stderr: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }

    // Second run regenerated from a fresh skeleton copy
    assert!(generated_dir(&out_root)
        .join("TravelApp/Sources/travelCitiesConfig.swift")
        .exists());
}

#[test]
fn test_generate_missing_required_template_fails() {
    let temp = tempfile::tempdir().expect("temp dir");
    let template_root = write_template_root(&temp);
    let out_root = write_design_export(&temp);

    fs::remove_file(
        template_root.join("project/projectName/Sources/containerNameConfig.swift.hbs"),
    )
    .unwrap();

    let output = Command::new(dtcgen_bin())
        .args([
            "generate",
            "--name",
            "TravelApp",
            "--output-root",
            out_root.to_str().unwrap(),
            "--template-dir",
            template_root.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_ne!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stderr).contains("not found"));
}
