//! Service layer for the design-to-code pipeline.
//!
//! This module contains the pure algorithms of the pipeline (tree
//! indexing, configuration derivation, naming) and the path utilities
//! shared by the generator stages.

pub mod container_config;
pub mod naming;
pub mod paths;
pub mod tree_index;

// Re-export commonly used types and functions
pub use paths::OutputPaths;
pub use tree_index::{lookup_property, resolve_member_view_ids, resolve_member_views};
