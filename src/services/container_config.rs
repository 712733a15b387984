//! Container configuration derivation.
//!
//! Normalizes a container and its resolved member views into the
//! [`ContainerConfig`] consumed by the per-container config template.
//! Pure: no I/O, deterministic given the input view order.

use crate::models::{
    ContainerConfig, DataVariable, Element, ElementType, ListSection, SectionInsets, SectionSize,
};
use crate::services::naming;
use indexmap::IndexMap;

/// Derives a [`ContainerConfig`] from a container and its member views.
///
/// Cells sharing a name are deduplicated last-wins in input order, so
/// reordering the views changes which cell supplies the section size.
/// Only the first List view names the list; additional lists on the
/// same container are ignored.
pub fn derive(container: &Element, views: &[Element]) -> ContainerConfig {
    let lists: Vec<&Element> = views
        .iter()
        .filter(|view| view.element_type == ElementType::List)
        .collect();

    // Last occurrence wins; the map keeps first-insertion order.
    let mut unique_cells: IndexMap<&str, &Element> = IndexMap::new();
    for cell in views
        .iter()
        .filter(|view| view.element_type == ElementType::Cell)
    {
        unique_cells.insert(cell.name.as_str(), cell);
    }

    let dynamic_classes: Vec<String> = unique_cells
        .keys()
        .map(|name| naming::upper_camel_case(name))
        .collect();

    let mut data_variables = Vec::new();
    for name in unique_cells.keys() {
        let lower_class = naming::lower_camel_case(name);
        let prefix = strip_cell_suffix(&lower_class);
        let plural = naming::pluralize(prefix);
        if plural.is_empty() {
            continue;
        }
        data_variables.push(DataVariable {
            variable_type: naming::capitalize_first(&plural),
            name: plural,
        });
    }

    let mut list_sections = Vec::new();
    for (name, view) in &unique_cells {
        let class_name = naming::upper_camel_case(name);
        let class_prefix = strip_cell_suffix(&class_name);
        if class_prefix.is_empty() {
            continue;
        }
        list_sections.push(ListSection {
            class_prefix: class_prefix.to_string(),
            section_name: format!("{class_prefix}Section"),
            variable_name: naming::lower_camel_case(&naming::pluralize(class_prefix)),
            size: SectionSize {
                width: view.rect.width,
                height: view.rect.height,
            },
            // Placeholder until the export carries inset data.
            insets: SectionInsets::default(),
        });
    }

    ContainerConfig {
        container: container.clone(),
        list_name: lists
            .first()
            .map(|list| naming::upper_camel_case(&list.name)),
        dynamic_classes,
        data_variables,
        list_sections,
    }
}

fn strip_cell_suffix(class_name: &str) -> &str {
    class_name.strip_suffix("Cell").unwrap_or(class_name)
}
