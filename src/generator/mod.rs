//! The design-to-code generation pipeline.
//!
//! Stages run strictly in order: the assembler prepares the skeleton,
//! the synthesizer populates assets, the emitter populates per-screen
//! sources and removes the consumed templates. A failure in any stage
//! aborts the run; stages are not rolled back individually, so an
//! aborted run leaves a partial output tree the caller must discard.

pub mod assembler;
pub mod assets;
pub mod emitter;
pub mod engine;

pub use engine::TemplateEngine;

use crate::constants::{PARTIALS_DIR, PROJECT_TEMPLATE_DIR};
use crate::parser;
use crate::services::OutputPaths;
use anyhow::{bail, Result};
use assembler::TemplateProjectAssembler;
use assets::AssetCatalogSynthesizer;
use emitter::SourceCodeEmitter;
use std::path::{Path, PathBuf};

/// Orchestrates a full generation run from one template root and one
/// design-export workspace.
#[derive(Debug)]
pub struct ProjectGenerator {
    engine: TemplateEngine,
    paths: OutputPaths,
    template_project_dir: PathBuf,
}

impl ProjectGenerator {
    /// Creates a generator for the given template root and output root.
    ///
    /// The template root must contain a `project/` skeleton; a
    /// `partials/` directory next to it is registered with the engine
    /// when present.
    pub fn new(template_root: &Path, output_root: &Path) -> Result<Self> {
        let template_project_dir = template_root.join(PROJECT_TEMPLATE_DIR);
        if !template_project_dir.is_dir() {
            bail!(
                "no project template directory: {}",
                template_project_dir.display()
            );
        }

        let partials_dir = template_root.join(PARTIALS_DIR);
        let engine = TemplateEngine::new(Some(partials_dir.as_path()))?;
        Ok(Self {
            engine,
            paths: OutputPaths::new(output_root),
            template_project_dir,
        })
    }

    /// Runs the pipeline for `project_name` and returns the generated
    /// project directory.
    ///
    /// A blank name is a fatal precondition failure; it is rejected
    /// before any filesystem mutation occurs.
    pub fn generate(&self, project_name: &str) -> Result<PathBuf> {
        let name = project_name.trim();
        if name.is_empty() {
            bail!("project name is empty");
        }

        let assembler =
            TemplateProjectAssembler::new(&self.engine, &self.template_project_dir, &self.paths);
        let project_dir = assembler.assemble(name)?;

        let synthesizer =
            AssetCatalogSynthesizer::new(&self.engine, &self.template_project_dir, &self.paths);
        synthesizer.synthesize(&project_dir)?;

        let elements = parser::load_elements(&self.paths.metadata_json())?;
        let (tree_value, forest) = parser::load_tree(&self.paths.tree_json())?;

        let emitter = SourceCodeEmitter::new(&self.engine);
        emitter.emit(&project_dir, &elements, &forest, &tree_value)?;

        Ok(project_dir)
    }
}
