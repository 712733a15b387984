//! Inspect command: print derived container configurations.

use crate::config::Config;
use crate::models::ContainerConfig;
use crate::parser;
use crate::services::{container_config, tree_index, OutputPaths};
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Print derived container configurations as JSON without generating
#[derive(Debug, Clone, Args)]
pub struct InspectArgs {
    /// Design-export workspace root (metadata.json, tree.json)
    #[arg(short, long, value_name = "DIR")]
    pub output_root: Option<PathBuf>,
}

impl InspectArgs {
    /// Execute the inspect command
    pub fn execute(&self) -> Result<()> {
        let config = Config::load().unwrap_or_default();
        let output_root = self
            .output_root
            .clone()
            .or(config.paths.output_root)
            .context("Output root not specified. Use --output-root or set it in config")?;
        let paths = OutputPaths::new(output_root);

        let elements = parser::load_elements(&paths.metadata_json())?;
        let (_, forest) = parser::load_tree(&paths.tree_json())?;

        let configs: Vec<ContainerConfig> = elements
            .iter()
            .filter(|element| element.is_container())
            .map(|container| {
                let views = tree_index::resolve_member_views(&forest, &elements, container);
                container_config::derive(container, &views)
            })
            .collect();

        let rendered =
            serde_json::to_string_pretty(&configs).context("Failed to serialize configs")?;
        println!("{rendered}");
        Ok(())
    }
}
