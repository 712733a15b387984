//! Asset catalog synthesis.
//!
//! Recursively mirrors the slice and image inputs into a nested catalog
//! subtree: one intermediate manifest per directory node, one leaf
//! manifest plus file copy per image.

use crate::constants::{
    CATALOG_DIR_PATTERN, CATALOG_STAGING_DIR, GENERATED_ASSETS_DIR, IMAGE_ITEM_SUFFIX,
    INTERMEDIATE_MANIFEST, LEAF_MANIFEST_DIR, LEAF_MANIFEST_TEMPLATE, MANIFEST_FILE_NAME,
};
use crate::generator::engine::TemplateEngine;
use crate::services::{paths, OutputPaths};
use anyhow::{Context, Result};
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};

/// The two manifest templates shipped inside the skeleton's catalog
/// staging directory.
struct ManifestTemplates {
    /// Namespace-level manifest, copied as-is into directory nodes
    intermediate: PathBuf,
    /// Leaf manifest template, rendered with the image's file name
    leaf: PathBuf,
}

/// Populates the assembled project's asset catalog from the exported
/// slice and image files.
pub struct AssetCatalogSynthesizer<'a> {
    engine: &'a TemplateEngine,
    template_project_dir: &'a Path,
    paths: &'a OutputPaths,
}

impl<'a> AssetCatalogSynthesizer<'a> {
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

    /// Synthesizes the catalog inside `project_dir`.
    ///
    /// A missing catalog container in the skeleton is fatal. A missing
    /// or empty slice directory is tolerated; the image root is
    /// processed unconditionally.
    pub fn synthesize(&self, project_dir: &Path) -> Result<()> {
        let templates = self.manifest_templates()?;

        let catalog = find_catalog_dir(project_dir)
            .context("no asset catalog directory within template")?;
        let generated = catalog.join(GENERATED_ASSETS_DIR);
        fs::create_dir_all(&generated)
            .with_context(|| format!("Failed to create {}", generated.display()))?;

        // The staging directory only carries manifest templates; it has
        // no place in the assembled project.
        let staging = catalog.join(CATALOG_STAGING_DIR);
        if staging.exists() {
            fs::remove_dir_all(&staging)
                .with_context(|| format!("Failed to remove {}", staging.display()))?;
        }

        fs::copy(&templates.intermediate, generated.join(MANIFEST_FILE_NAME))
            .context("Failed to seed the generated assets manifest")?;

        if let Ok(entries) = fs::read_dir(self.paths.slices_dir()) {
            let mut slices: Vec<PathBuf> = entries
                .collect::<std::io::Result<Vec<_>>>()
                .context("Failed to list slice directory")?
                .into_iter()
                .map(|entry| entry.path())
                .collect();
            slices.sort();
            for slice in slices {
                self.emit_node(&slice, &generated, &templates)?;
            }
        }

        self.emit_node(&self.paths.images_dir(), &generated, &templates)
    }

    /// Mirrors one input node into `dest`. Directories recurse with an
    /// intermediate manifest; files become `<basename>.<suffix>`
    /// containers holding a leaf manifest and a copy of the file.
    /// Symbolic links are not followed.
    fn emit_node(
        &self,
        origin: &Path,
        dest: &Path,
        templates: &ManifestTemplates,
    ) -> Result<()> {
        let metadata = fs::symlink_metadata(origin)
            .with_context(|| format!("Failed to stat asset input: {}", origin.display()))?;
        let name = origin
            .file_name()
            .and_then(|n| n.to_str())
            .with_context(|| format!("Asset input has no name: {}", origin.display()))?;

        if metadata.is_dir() {
            let node_dir = dest.join(name);
            fs::create_dir_all(&node_dir)
                .with_context(|| format!("Failed to create {}", node_dir.display()))?;
            fs::copy(&templates.intermediate, node_dir.join(MANIFEST_FILE_NAME))
                .with_context(|| format!("Failed to seed manifest in {}", node_dir.display()))?;

            let mut children: Vec<PathBuf> = fs::read_dir(origin)
                .with_context(|| format!("Failed to read {}", origin.display()))?
                .collect::<std::io::Result<Vec<_>>>()?
                .into_iter()
                .map(|entry| entry.path())
                .collect();
            children.sort();
            for child in children {
                self.emit_node(&child, &node_dir, templates)?;
            }
            return Ok(());
        }

        let stem = origin
            .file_stem()
            .and_then(|s| s.to_str())
            .with_context(|| format!("Asset file has no stem: {}", origin.display()))?;
        let item_dir = dest.join(format!("{stem}.{IMAGE_ITEM_SUFFIX}"));
        fs::create_dir_all(&item_dir)
            .with_context(|| format!("Failed to create {}", item_dir.display()))?;

        let manifest = self
            .engine
            .render_file(&templates.leaf, &json!({ "filename": name }))?;
        fs::write(item_dir.join(MANIFEST_FILE_NAME), manifest)
            .with_context(|| format!("Failed to write manifest in {}", item_dir.display()))?;
        fs::copy(origin, item_dir.join(name))
            .with_context(|| format!("Failed to copy asset: {}", origin.display()))?;
        Ok(())
    }

    fn manifest_templates(&self) -> Result<ManifestTemplates> {
        let catalog = find_catalog_dir(self.template_project_dir)
            .context("no asset catalog template directory")?;
        let staging = catalog.join(CATALOG_STAGING_DIR);
        let intermediate = staging.join(INTERMEDIATE_MANIFEST);
        let leaf = staging.join(LEAF_MANIFEST_DIR).join(LEAF_MANIFEST_TEMPLATE);

        if !intermediate.is_file() {
            anyhow::bail!(
                "missing intermediate manifest template: {}",
                intermediate.display()
            );
        }
        if !leaf.is_file() {
            anyhow::bail!("missing leaf manifest template: {}", leaf.display());
        }
        Ok(ManifestTemplates { intermediate, leaf })
    }
}

fn find_catalog_dir(root: &Path) -> Option<PathBuf> {
    paths::search_paths(root, CATALOG_DIR_PATTERN)
        .ok()?
        .into_iter()
        .find(|path| path.is_dir())
}
