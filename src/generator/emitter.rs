//! Per-container source emission.
//!
//! For every container element, renders a config artifact (from its
//! derived [`ContainerConfig`]) and a controller artifact (from the raw
//! container/views pair), batch-commits the results, renders the
//! aggregate registry and tree-consumer templates, and removes the
//! consumed templates.

use crate::constants::{
    CONFIG_TEMPLATE_PATTERN, CONTAINER_NAME_TOKEN, CONTROLLER_TEMPLATE_PATTERN,
    DYNAMIC_CELL_CLASSES, REGISTRY_NAME_SUFFIX, REGISTRY_TEMPLATE_PATTERN, TEMPLATE_SUFFIX,
    TREE_CONSUMER_TEMPLATE_PATTERN, TREE_JSON_FILE,
};
use crate::generator::engine::{self, TemplateEngine};
use crate::models::{Element, TreeNode};
use crate::services::{container_config, paths, tree_index};
use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// A rendered artifact awaiting the batch commit.
struct GeneratedOutput {
    file_path: PathBuf,
    content: String,
}

/// The four source templates the emitter consumes. All are required;
/// a missing one aborts the run before anything is rendered.
struct SourceTemplates {
    config: PathBuf,
    controller: PathBuf,
    registry: PathBuf,
    tree_consumer: PathBuf,
}

impl SourceTemplates {
    fn locate(project_dir: &Path) -> Result<Self> {
        Ok(Self {
            config: paths::find_required(project_dir, CONFIG_TEMPLATE_PATTERN)?,
            controller: paths::find_required(project_dir, CONTROLLER_TEMPLATE_PATTERN)?,
            registry: paths::find_required(project_dir, REGISTRY_TEMPLATE_PATTERN)?,
            tree_consumer: paths::find_required(project_dir, TREE_CONSUMER_TEMPLATE_PATTERN)?,
        })
    }
}

/// Emits per-container sources and the aggregate files into an
/// assembled project.
pub struct SourceCodeEmitter<'a> {
    engine: &'a TemplateEngine,
}

impl<'a> SourceCodeEmitter<'a> {
    pub fn new(engine: &'a TemplateEngine) -> Self {
        Self { engine }
    }

    /// Runs the emission phase. Containers are processed in element
    /// order; per-container artifacts are written only after all
    /// containers rendered successfully.
    pub fn emit(
        &self,
        project_dir: &Path,
        elements: &[Element],
        forest: &[TreeNode],
        tree_value: &Value,
    ) -> Result<()> {
        let templates = SourceTemplates::locate(project_dir)?;
        let config_dir = parent_of(&templates.config)?;
        let controller_template_dir = parent_of(&templates.controller)?;
        let controller_parent = parent_of(controller_template_dir)?;

        let mut outputs: Vec<GeneratedOutput> = Vec::new();
        let mut container_names: Vec<String> = Vec::new();

        for container in elements.iter().filter(|element| element.is_container()) {
            let views = tree_index::resolve_member_views(forest, elements, container);
            let config = container_config::derive(container, &views);

            let config_content = self.engine.render_file(&templates.config, &config)?;
            outputs.push(GeneratedOutput {
                file_path: config_dir.join(artifact_name(&templates.config, &container.name)?),
                content: config_content,
            });

            // Independent template context; the derived config is not
            // passed into the controller template.
            let controller_context = json!({ "container": container, "views": views });
            let controller_content = self
                .engine
                .render_file(&templates.controller, &controller_context)?;
            outputs.push(GeneratedOutput {
                file_path: controller_parent
                    .join(&container.name)
                    .join(artifact_name(&templates.controller, &container.name)?),
                content: controller_content,
            });

            container_names.push(container.name.clone());
        }

        // Batch commit: nothing is written until every container
        // rendered.
        for output in &outputs {
            if let Some(parent) = output.file_path.parent() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create directory: {}", parent.display())
                })?;
            }
            fs::write(&output.file_path, &output.content).with_context(|| {
                format!("Failed to write artifact: {}", output.file_path.display())
            })?;
        }

        // Aggregate registry: container names with the derived suffix.
        let registry_names: Vec<Value> = container_names
            .iter()
            .map(|name| json!({ "name": format!("{name}{REGISTRY_NAME_SUFFIX}") }))
            .collect();
        engine::search_and_adopt(
            self.engine,
            parent_of(&templates.registry)?,
            REGISTRY_TEMPLATE_PATTERN,
            &json!({ "names": registry_names }),
        )?;

        // Aggregate tree consumer: raw names, the unmodified tree, and
        // the fixed dynamic-class list.
        let names: Vec<Value> = container_names
            .iter()
            .map(|name| json!({ "name": name }))
            .collect();
        let tree_consumer_dir = parent_of(&templates.tree_consumer)?.to_path_buf();
        engine::search_and_adopt(
            self.engine,
            &tree_consumer_dir,
            TREE_CONSUMER_TEMPLATE_PATTERN,
            &json!({
                "names": names,
                "tree": tree_value,
                "dynamicClasses": DYNAMIC_CELL_CLASSES,
            }),
        )?;

        // Raw tree JSON, verbatim, for runtime consumption.
        let tree_json = serde_json::to_string(tree_value).context("Failed to serialize tree")?;
        fs::write(tree_consumer_dir.join(TREE_JSON_FILE), tree_json)
            .context("Failed to write tree.json")?;

        // Remove the consumed per-container templates; the controller
        // template's directory only ever held templates.
        fs::remove_file(&templates.config).with_context(|| {
            format!("Failed to remove template: {}", templates.config.display())
        })?;
        fs::remove_dir_all(controller_template_dir).with_context(|| {
            format!(
                "Failed to remove template directory: {}",
                controller_template_dir.display()
            )
        })?;

        Ok(())
    }
}

/// `containerNameConfig.swift.hbs` + `travelCities` →
/// `travelCitiesConfig.swift`.
fn artifact_name(template_path: &Path, container_name: &str) -> Result<String> {
    let file_name = template_path
        .file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("Template has no file name: {}", template_path.display()))?;
    let stripped = file_name
        .strip_suffix(TEMPLATE_SUFFIX)
        .unwrap_or(file_name);
    Ok(stripped.replace(CONTAINER_NAME_TOKEN, container_name))
}

fn parent_of(path: &Path) -> Result<&Path> {
    path.parent()
        .with_context(|| format!("Path has no parent: {}", path.display()))
}
