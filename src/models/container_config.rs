//! Derived per-container template-binding data.

use crate::models::Element;
use serde::{Deserialize, Serialize};

/// A typed data variable exposed to the per-container config template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataVariable {
    /// Pluralized variable name (e.g. "cities")
    pub name: String,
    /// Pluralized type name with leading uppercase (e.g. "Cities")
    #[serde(rename = "type")]
    pub variable_type: String,
}

/// Section dimensions copied from the source cell's rect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionSize {
    pub width: f64,
    pub height: f64,
}

/// Section edge insets. Zero on all sides until the design export
/// carries inset data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct SectionInsets {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

/// One list section derived from a unique cell view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSection {
    /// Cell class name minus the trailing "Cell" (e.g. "City")
    pub class_prefix: String,
    /// `<classPrefix>Section`
    pub section_name: String,
    /// Lower-camel plural of the prefix (e.g. "cities")
    pub variable_name: String,
    pub size: SectionSize,
    pub insets: SectionInsets,
}

/// Normalized per-container configuration consumed by templates.
///
/// Created per container per generation run, rendered, then discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerConfig {
    pub container: Element,
    /// Title-cased name of the container's list view, when one exists.
    /// Only the first list per container is honored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_name: Option<String>,
    /// Cell class names registered for runtime class lookup
    pub dynamic_classes: Vec<String>,
    pub data_variables: Vec<DataVariable>,
    pub list_sections: Vec<ListSection>,
}
