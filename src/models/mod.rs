//! Data models for design exports and derived template bindings.
//!
//! This module contains all the core data structures used throughout the
//! application. Models are designed to be independent of filesystem and
//! template concerns.

pub mod container_config;
pub mod element;
pub mod tree;

// Re-export all model types
pub use container_config::{
    ContainerConfig, DataVariable, ListSection, SectionInsets, SectionSize,
};
pub use element::{Element, ElementType, Rect};
pub use tree::{NodeProperties, PropertyPayload, TreeNode};
