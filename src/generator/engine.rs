//! Template engine wrapper.
//!
//! Thin facade over Handlebars so the pipeline treats templates as
//! opaque parameterized string producers. Escaping is disabled: outputs
//! are source code, not HTML.

use crate::constants::TEMPLATE_SUFFIX;
use crate::services::paths;
use anyhow::{Context, Result};
use handlebars::Handlebars;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Compiles and renders brace-delimited text templates.
#[derive(Debug)]
pub struct TemplateEngine {
    registry: Handlebars<'static>,
}

impl TemplateEngine {
    /// Creates an engine, registering every `.hbs` file under
    /// `partials_dir` (when present) as a shared partial named after
    /// its leading file-name component.
    pub fn new(partials_dir: Option<&Path>) -> Result<Self> {
        let mut registry = Handlebars::new();
        registry.register_escape_fn(handlebars::no_escape);

        if let Some(dir) = partials_dir {
            if dir.is_dir() {
                for path in paths::search_paths(dir, r"\.hbs$")? {
                    let Some(name) = partial_name(&path) else {
                        continue;
                    };
                    registry
                        .register_template_file(&name, &path)
                        .with_context(|| {
                            format!("Failed to register partial: {}", path.display())
                        })?;
                }
            }
        }

        Ok(Self { registry })
    }

    /// Renders a template string against `data`.
    pub fn render_str<T: Serialize>(&self, template: &str, data: &T) -> Result<String> {
        self.registry
            .render_template(template, data)
            .context("Template rendering failed")
    }

    /// Reads and renders a template file against `data`.
    pub fn render_file<T: Serialize>(&self, path: &Path, data: &T) -> Result<String> {
        let template = fs::read_to_string(path)
            .with_context(|| format!("Couldn't get template: {}", path.display()))?;
        self.render_str(&template, data)
            .with_context(|| format!("Failed to render template: {}", path.display()))
    }
}

fn partial_name(path: &Path) -> Option<String> {
    let file_name = path.file_name()?.to_str()?;
    file_name.split('.').next().map(str::to_string)
}

/// Searches `search_dir` for template files matching `pattern`, renders
/// each against `data`, writes the result next to the template with the
/// reserved suffix stripped, and removes the template source.
///
/// No matches is not an error; callers with required templates locate
/// them up front instead.
pub fn search_and_adopt<T: Serialize>(
    engine: &TemplateEngine,
    search_dir: &Path,
    pattern: &str,
    data: &T,
) -> Result<Vec<PathBuf>> {
    let mut adopted = Vec::new();
    for template_path in paths::search_paths(search_dir, pattern)? {
        if !template_path.is_file() {
            continue;
        }
        let output = engine.render_file(&template_path, data)?;
        let rendered_path = strip_template_suffix(&template_path)?;

        fs::remove_file(&template_path).with_context(|| {
            format!("Failed to remove template: {}", template_path.display())
        })?;
        fs::write(&rendered_path, output).with_context(|| {
            format!("Failed to write rendered file: {}", rendered_path.display())
        })?;
        adopted.push(rendered_path);
    }
    Ok(adopted)
}

/// `dir/name.swift.hbs` → `dir/name.swift`.
fn strip_template_suffix(path: &Path) -> Result<PathBuf> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .with_context(|| format!("Template has no file name: {}", path.display()))?;
    let stripped = file_name
        .strip_suffix(TEMPLATE_SUFFIX)
        .unwrap_or(file_name);
    Ok(path.with_file_name(stripped))
}
