//! Loading of the design-export JSON documents.

use crate::models::{Element, TreeNode};
use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Loads the flat element list from `metadata.json`.
pub fn load_elements(path: &Path) -> Result<Vec<Element>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read metadata file: {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse metadata file: {}", path.display()))
}

/// Loads the design tree from `tree.json`.
///
/// Returns both the raw JSON value and the typed forest: the raw value
/// is what aggregate templates consume and what gets serialized back
/// verbatim, so the pipeline never mutates it; the typed forest backs
/// the membership queries.
pub fn load_tree(path: &Path) -> Result<(Value, Vec<TreeNode>)> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read tree file: {}", path.display()))?;
    let value: Value = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse tree file: {}", path.display()))?;
    let forest: Vec<TreeNode> = serde_json::from_value(value.clone())
        .with_context(|| format!("Tree file has unexpected shape: {}", path.display()))?;
    Ok((value, forest))
}
