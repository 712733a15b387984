//! Generate command for design-to-code output.

use crate::config::Config;
use crate::generator::ProjectGenerator;
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Generate a source project from a design export
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Project name used for placeholder substitution
    #[arg(short, long, value_name = "NAME")]
    pub name: String,

    /// Design-export workspace root (metadata.json, tree.json, slices/, images/)
    #[arg(short, long, value_name = "DIR")]
    pub output_root: Option<PathBuf>,

    /// Template root containing project/ and optional partials/
    #[arg(short, long, value_name = "DIR")]
    pub template_dir: Option<PathBuf>,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self) -> Result<()> {
        let config = Config::load().unwrap_or_default();

        let output_root = self
            .output_root
            .clone()
            .or(config.paths.output_root)
            .context("Output root not specified. Use --output-root or set it in config")?;
        let template_dir = self
            .template_dir
            .clone()
            .or(config.paths.template_dir)
            .context("Template dir not specified. Use --template-dir or set it in config")?;

        let generator = ProjectGenerator::new(&template_dir, &output_root)?;
        let project_dir = generator.generate(&self.name)?;

        println!("✓ Generated project '{}'", self.name.trim());
        println!("  Output: {}", project_dir.display());
        Ok(())
    }
}
