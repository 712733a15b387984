//! Output-root path layout and recursive path search.

use anyhow::{Context, Result};
use regex::Regex;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Fixed layout of the design-export workspace under one output root.
///
/// The extraction stage deposits `metadata.json`, `tree.json`, `slices/`
/// and `images/` here; the generated project is written to `generated/`.
#[derive(Debug, Clone)]
pub struct OutputPaths {
    root: PathBuf,
}

impl OutputPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Flat element records exported by the design tool.
    pub fn metadata_json(&self) -> PathBuf {
        self.root.join("metadata.json")
    }

    /// Hierarchical tree of uid-linked nodes.
    pub fn tree_json(&self) -> PathBuf {
        self.root.join("tree.json")
    }

    /// Flat directory of exported slice (icon) files. Optional input.
    pub fn slices_dir(&self) -> PathBuf {
        self.root.join("slices")
    }

    /// Hierarchical directory of exported image files.
    pub fn images_dir(&self) -> PathBuf {
        self.root.join("images")
    }

    /// Destination for the assembled project.
    pub fn project_dir(&self) -> PathBuf {
        self.root.join("generated")
    }
}

/// Recursively searches `root` for entries whose file name matches
/// `pattern`. Results are sorted by path for deterministic behavior.
///
/// Matches files and directories alike; callers filter by kind.
pub fn search_paths(root: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let regex = Regex::new(pattern)
        .with_context(|| format!("Invalid search pattern: {pattern}"))?;

    let mut matches: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| {
            entry
                .file_name()
                .to_str()
                .is_some_and(|name| regex.is_match(name))
        })
        .map(walkdir::DirEntry::into_path)
        .collect();
    matches.sort();
    Ok(matches)
}

/// Like [`search_paths`] but fails when nothing matches. Used for
/// template files whose absence is a fatal precondition.
pub fn find_required(root: &Path, pattern: &str) -> Result<PathBuf> {
    search_paths(root, pattern)?
        .into_iter()
        .next()
        .with_context(|| format!("{pattern} is not found under {}", root.display()))
}
