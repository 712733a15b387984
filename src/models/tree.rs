//! Hierarchical design tree linking flat elements by uid.

use crate::models::Rect;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Per-node payload, discriminated by the `type` field of the export.
///
/// The export attaches a heterogeneous properties object to tree nodes;
/// decoding it into a tagged enum keeps the matching exhaustive instead
/// of dispatching on stringly-typed discriminators downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum NodeProperties {
    Container(PropertyPayload),
    List(PropertyPayload),
    Cell(PropertyPayload),
    View(PropertyPayload),
    Button(PropertyPayload),
    TextView(PropertyPayload),
    TextInput(PropertyPayload),
    Image(PropertyPayload),
}

/// Common property fields shared by every node kind.
///
/// Design tools attach tool-specific extras per kind; those are kept
/// verbatim in `extra` so the tree survives a serialize round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PropertyPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rect: Option<Rect>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One node of the design forest.
///
/// `uid` references an [`crate::models::Element`] id when the node
/// corresponds to a design element; forest roots correspond to
/// containers. Well-formed input is a forest of finite rooted trees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeNode {
    pub uid: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub elements: Vec<TreeNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<NodeProperties>,
    /// Template-time exclusion flag; not consulted by tree indexing.
    #[serde(default)]
    pub exclude_on_adopt: bool,
}
