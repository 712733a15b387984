//! Shared fixtures for end-to-end CLI tests.
#![allow(dead_code)] // Not every test file uses every helper

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Creates a complete template root (project skeleton plus manifest
/// staging) inside a temp dir and returns its path.
pub fn write_template_root(temp: &TempDir) -> PathBuf {
    let template_root = temp.path().join("template");
    let project = template_root.join("project");

    fs::create_dir_all(project.join("projectName/projectNameTests")).expect("create skeleton");
    fs::write(project.join("project.yml.hbs"), "name: {{projectName}}\n")
        .expect("write project manifest template");
    fs::write(
        project.join("projectName/projectNameTests/projectNameTests.swift.hbs"),
        "final class {{projectName}}Tests {}\n",
    )
    .expect("write test target template");

    // Asset catalog with the manifest-template staging directory
    let staging = project.join("projectName/Assets.xcassets/intermediateDirectory");
    fs::create_dir_all(staging.join("iconName.imageset")).expect("create staging");
    fs::write(
        staging.join("midDirContents.json"),
        r#"{"info":{"version":1}}"#,
    )
    .expect("write intermediate manifest");
    fs::write(
        staging.join("iconName.imageset/lastDirContents.json.hbs"),
        r#"{"images":[{"filename":"{{filename}}"}],"info":{"version":1}}"#,
    )
    .expect("write leaf manifest template");

    // Per-run source templates
    let sources = project.join("projectName/Sources");
    fs::create_dir_all(sources.join("containerName")).expect("create sources");
    fs::write(
        sources.join("containerNameConfig.swift.hbs"),
        concat!(
            "struct {{container.name}}Config {\n",
            "{{#if listName}}    static let listName = \"{{listName}}\"\n{{/if}}",
            "{{#each listSections}}    static let {{variableName}} = \"{{sectionName}}\"\n{{/each}}",
            "{{#each dataVariables}}    var {{name}}: [{{type}}] = []\n{{/each}}",
            "}\n",
        ),
    )
    .expect("write config template");
    fs::write(
        sources.join("containerName/containerNameViewController.swift.hbs"),
        concat!(
            "final class {{container.name}}ViewController {\n",
            "{{#each views}}    // view {{name}}\n{{/each}}",
            "}\n",
        ),
    )
    .expect("write controller template");
    fs::write(
        sources.join("viewController.swift.hbs"),
        "{{#each names}}register({{name}})\n{{/each}}",
    )
    .expect("write registry template");
    fs::write(
        sources.join("DesignToCode.generated.swift.hbs"),
        concat!(
            "let containers = [{{#each names}}\"{{name}}\", {{/each}}]\n",
            "let dynamicClasses = [{{#each dynamicClasses}}\"{{this}}\", {{/each}}]\n",
        ),
    )
    .expect("write tree consumer template");

    template_root
}

/// The tree JSON used by the standard export fixture.
pub fn sample_tree_json() -> &'static str {
    r#"[
  {
    "uid": "c1",
    "name": "travelCities",
    "elements": [
      { "uid": "v1", "name": "city cell" }
    ]
  }
]"#
}

/// The metadata JSON used by the standard export fixture: one container
/// plus one cell view.
pub fn sample_metadata_json() -> &'static str {
    r#"[
  {
    "id": "c1",
    "name": "travelCities",
    "type": "Container",
    "rect": { "x": 0, "y": 0, "width": 375, "height": 667 }
  },
  {
    "id": "v1",
    "name": "city cell",
    "type": "Cell",
    "rect": { "x": 0, "y": 0, "width": 100, "height": 80 }
  }
]"#
}

/// Creates a design-export workspace: metadata, tree, an empty slices
/// directory, and one image file at the image root.
pub fn write_design_export(temp: &TempDir) -> PathBuf {
    let out_root = temp.path().join("out");
    fs::create_dir_all(out_root.join("slices")).expect("create slices dir");
    fs::create_dir_all(out_root.join("images")).expect("create images dir");
    fs::write(out_root.join("metadata.json"), sample_metadata_json())
        .expect("write metadata.json");
    fs::write(out_root.join("tree.json"), sample_tree_json()).expect("write tree.json");
    fs::write(out_root.join("images/hero.png"), b"not really a png")
        .expect("write image fixture");
    out_root
}

/// Returns the generated project directory for an output root.
pub fn generated_dir(out_root: &Path) -> PathBuf {
    out_root.join("generated")
}
