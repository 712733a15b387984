//! Design tree indexing: container membership and property lookup.

use crate::models::{Element, NodeProperties, TreeNode};
use std::collections::HashSet;

/// Resolves the member-view ids of a container by tree descent.
///
/// Locates the forest **root** whose `uid` equals `container_id` (first
/// match; sibling roots sharing an id are unsupported) and collects the
/// uid of that root and every descendant, transitively. The
/// `exclude_on_adopt` flag is a template-time concern and is not
/// consulted here.
///
/// An absent container id yields an empty set, not an error: a
/// container with no tree content is valid.
pub fn resolve_member_view_ids(forest: &[TreeNode], container_id: &str) -> HashSet<String> {
    let mut ids = HashSet::new();
    if let Some(root) = forest.iter().find(|node| node.uid == container_id) {
        collect_uids(root, &mut ids);
    }
    ids
}

fn collect_uids(node: &TreeNode, ids: &mut HashSet<String>) {
    ids.insert(node.uid.clone());
    for child in &node.elements {
        collect_uids(child, ids);
    }
}

/// Materializes a container's member views by intersecting its resolved
/// member ids with the flat element list, preserving element order. The
/// container element itself is not a view of its own.
pub fn resolve_member_views(
    forest: &[TreeNode],
    elements: &[Element],
    container: &Element,
) -> Vec<Element> {
    let member_ids = resolve_member_view_ids(forest, &container.id);
    elements
        .iter()
        .filter(|element| member_ids.contains(&element.id) && element.id != container.id)
        .cloned()
        .collect()
}

/// Looks up node properties by a dot-joined chain of node names
/// (`"travelCities.city cell"`). Depth-first, first match wins.
pub fn lookup_property<'a>(
    forest: &'a [TreeNode],
    dotted_path: &str,
) -> Option<&'a NodeProperties> {
    lookup_property_inner(forest, dotted_path, None)
}

fn lookup_property_inner<'a>(
    nodes: &'a [TreeNode],
    dotted_path: &str,
    parent: Option<&str>,
) -> Option<&'a NodeProperties> {
    for node in nodes {
        let current = match parent {
            Some(prefix) => format!("{prefix}.{}", node.name),
            None => node.name.clone(),
        };
        if current == dotted_path {
            return node.properties.as_ref();
        }
        if let Some(props) = lookup_property_inner(&node.elements, dotted_path, Some(&current)) {
            return Some(props);
        }
    }
    None
}
