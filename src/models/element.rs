//! Flat design element records as exported by the design tool.

use serde::{Deserialize, Serialize};

/// Element kind discriminator from the design export.
///
/// Unknown kinds decode as [`ElementType::Other`] so new design-tool
/// element types never fail a generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElementType {
    /// Top-level screen/artboard owning a subtree of views
    Container,
    /// Scrolling list view
    List,
    /// Reusable list cell
    Cell,
    /// Plain view
    View,
    /// Button control
    Button,
    /// Static text
    TextView,
    /// Editable text field
    TextInput,
    /// Image view
    Image,
    /// Any element type this version does not model
    #[serde(other)]
    Other,
}

/// Rectangle geometry in design-canvas points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Rect {
    /// Horizontal origin relative to the parent
    #[serde(default)]
    pub x: f64,
    /// Vertical origin relative to the parent
    #[serde(default)]
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// One record from the flat `metadata.json` list.
///
/// `id` is unique within a generation run. Order of records in the
/// export drives the order of emitted files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub element_type: ElementType,
    #[serde(default)]
    pub rect: Rect,
}

impl Element {
    /// Returns true for top-level container elements.
    pub fn is_container(&self) -> bool {
        self.element_type == ElementType::Container
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_element() {
        let json = r#"{
            "id": "v1",
            "name": "city cell",
            "type": "Cell",
            "rect": { "x": 0, "y": 0, "width": 100, "height": 80 }
        }"#;

        let element: Element = serde_json::from_str(json).unwrap();
        assert_eq!(element.id, "v1");
        assert_eq!(element.element_type, ElementType::Cell);
        assert!((element.rect.width - 100.0).abs() < f64::EPSILON);
        assert!(!element.is_container());
    }

    #[test]
    fn test_unknown_type_decodes_as_other() {
        let json = r#"{ "id": "x", "name": "wave", "type": "HoloDeck" }"#;
        let element: Element = serde_json::from_str(json).unwrap();
        assert_eq!(element.element_type, ElementType::Other);
    }

    #[test]
    fn test_missing_rect_defaults_to_zero() {
        let json = r#"{ "id": "x", "name": "n", "type": "View" }"#;
        let element: Element = serde_json::from_str(json).unwrap();
        assert!(element.rect.width.abs() < f64::EPSILON);
    }
}
