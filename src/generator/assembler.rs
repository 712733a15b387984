//! Template project assembly: destructive copy, placeholder rename,
//! one-shot project templates.

use crate::constants::{PLACEHOLDER, PROJECT_MANIFEST_PATTERN, TEST_TARGET_PATTERN};
use crate::generator::engine::{self, TemplateEngine};
use crate::services::OutputPaths;
use anyhow::{Context, Result};
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};

/// Copies the template skeleton to the output location and specializes
/// it for one project name.
pub struct TemplateProjectAssembler<'a> {
    engine: &'a TemplateEngine,
    template_project_dir: &'a Path,
    paths: &'a OutputPaths,
}

impl<'a> TemplateProjectAssembler<'a> {
    pub fn new(
        engine: &'a TemplateEngine,
        template_project_dir: &'a Path,
        paths: &'a OutputPaths,
    ) -> Self {
        Self {
            engine,
            template_project_dir,
            paths,
        }
    }

    /// Assembles the project skeleton for `project_name` (already
    /// trimmed and non-empty). Any prior output at the destination is
    /// removed first.
    pub fn assemble(&self, project_name: &str) -> Result<PathBuf> {
        let dest = self.paths.project_dir();
        if dest.exists() {
            fs::remove_dir_all(&dest).with_context(|| {
                format!("Failed to clear previous output: {}", dest.display())
            })?;
        }

        copy_dir_recursive(self.template_project_dir, &dest)?;
        rename_placeholders(&dest, project_name)?;

        let data = json!({ "projectName": project_name });
        engine::search_and_adopt(self.engine, &dest, PROJECT_MANIFEST_PATTERN, &data)?;
        engine::search_and_adopt(self.engine, &dest, TEST_TARGET_PATTERN, &data)?;

        Ok(dest)
    }
}

fn copy_dir_recursive(src: &Path, dest: &Path) -> Result<()> {
    fs::create_dir_all(dest)
        .with_context(|| format!("Failed to create directory: {}", dest.display()))?;
    for entry in sorted_entries(src)? {
        let target = dest.join(entry.file_name());
        let source = entry.path();
        if source.is_dir() {
            copy_dir_recursive(&source, &target)?;
        } else {
            fs::copy(&source, &target).with_context(|| {
                format!("Failed to copy {} to {}", source.display(), target.display())
            })?;
        }
    }
    Ok(())
}

/// Renames every file and directory whose name contains the placeholder
/// token. Parents are renamed before descending so child paths stay
/// valid.
fn rename_placeholders(dir: &Path, project_name: &str) -> Result<()> {
    for entry in sorted_entries(dir)? {
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };

        let mut path = entry.path();
        if name.contains(PLACEHOLDER) {
            let renamed = dir.join(name.replace(PLACEHOLDER, project_name));
            fs::rename(&path, &renamed).with_context(|| {
                format!("Failed to rename {} to {}", path.display(), renamed.display())
            })?;
            path = renamed;
        }
        if path.is_dir() {
            rename_placeholders(&path, project_name)?;
        }
    }
    Ok(())
}

fn sorted_entries(dir: &Path) -> Result<Vec<fs::DirEntry>> {
    let mut entries: Vec<fs::DirEntry> = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?
        .collect::<std::io::Result<_>>()
        .with_context(|| format!("Failed to list directory: {}", dir.display()))?;
    entries.sort_by_key(fs::DirEntry::file_name);
    Ok(entries)
}
