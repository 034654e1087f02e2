//! Forest rendering
//!
//! Roots are the parentless nodes accepted by the filter, visited in
//! lexical order. Each root is walked depth-first in pre-order, children in
//! lexical order, down to the configured maximum depth.

use serde::Serialize;
use std::io::{self, Write};
use tracing::warn;

use crate::error::HierarchyError;
use crate::filter::RootFilter;
use crate::graph::{Hierarchy, NodeId};

/// Indentation used when none is configured
pub const DEFAULT_INDENT: usize = 2;

/// Options for rendering
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Which roots to print
    pub filter: RootFilter,
    /// Deepest level printed, roots being level 0; `None` is unbounded
    pub max_depth: Option<usize>,
    /// Spaces per level
    pub indent: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            filter: RootFilter::All,
            max_depth: None,
            indent: DEFAULT_INDENT,
        }
    }
}

impl RenderOptions {
    fn allows(&self, depth: usize) -> bool {
        self.max_depth.map_or(true, |max| depth <= max)
    }
}

/// Statistics from rendering
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Roots printed
    pub roots: usize,
    /// Lines written
    pub lines: usize,
    /// Back edges cut short by the cycle guard
    pub cycles: usize,
}

/// Roots accepted by `filter`, in lexical order
pub fn select_roots(hierarchy: &Hierarchy, filter: &RootFilter) -> Vec<NodeId> {
    hierarchy
        .roots()
        .into_iter()
        .filter(|id| filter.includes(hierarchy.node(*id)))
        .collect()
}

/// Write the forest as indented text, one subject per line
pub fn render<W: Write>(
    hierarchy: &Hierarchy,
    options: &RenderOptions,
    out: &mut W,
) -> io::Result<RenderStats> {
    let mut stats = RenderStats::default();
    let mut on_path = vec![false; hierarchy.len()];

    for root in select_roots(hierarchy, &options.filter) {
        stats.roots += 1;
        write_node(hierarchy, options, root, 0, &mut on_path, out, &mut stats)?;
    }

    Ok(stats)
}

/// Render into a `String`
pub fn render_to_string(
    hierarchy: &Hierarchy,
    options: &RenderOptions,
) -> io::Result<String> {
    let mut buf = Vec::new();
    render(hierarchy, options, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn write_node<W: Write>(
    hierarchy: &Hierarchy,
    options: &RenderOptions,
    id: NodeId,
    depth: usize,
    on_path: &mut [bool],
    out: &mut W,
    stats: &mut RenderStats,
) -> io::Result<()> {
    if !options.allows(depth) {
        return Ok(());
    }

    let node = hierarchy.node(id);
    writeln!(
        out,
        "{:width$}{}",
        "",
        node.subject,
        width = depth * options.indent
    )?;
    stats.lines += 1;

    if on_path[id.index()] {
        warn!("cycle detected at {}, not descending", node.subject);
        stats.cycles += 1;
        return Ok(());
    }

    on_path[id.index()] = true;
    for child in &node.children {
        write_node(hierarchy, options, *child, depth + 1, on_path, out, stats)?;
    }
    on_path[id.index()] = false;

    Ok(())
}

/// A rendered node carrying the item's attributes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    pub subject: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Set when this node closes a cycle; its children are omitted
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub cycle: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNode>,
}

/// Build the forest as a tree of `TreeNode`s, following the same rules as `render`
pub fn to_forest(hierarchy: &Hierarchy, options: &RenderOptions) -> Vec<TreeNode> {
    let mut on_path = vec![false; hierarchy.len()];
    select_roots(hierarchy, &options.filter)
        .into_iter()
        .filter_map(|root| build_node(hierarchy, options, root, 0, &mut on_path))
        .collect()
}

fn build_node(
    hierarchy: &Hierarchy,
    options: &RenderOptions,
    id: NodeId,
    depth: usize,
    on_path: &mut [bool],
) -> Option<TreeNode> {
    if !options.allows(depth) {
        return None;
    }

    let node = hierarchy.node(id);
    let cycle = on_path[id.index()];
    let mut children = Vec::new();

    if cycle {
        warn!("cycle detected at {}, not descending", node.subject);
    } else {
        on_path[id.index()] = true;
        children = node
            .children
            .iter()
            .filter_map(|child| build_node(hierarchy, options, *child, depth + 1, on_path))
            .collect();
        on_path[id.index()] = false;
    }

    Some(TreeNode {
        subject: node.subject.clone(),
        kind: node.kind.clone(),
        domain: node.domain.clone(),
        range: node.range.clone(),
        comment: node.comment.clone(),
        cycle,
        children,
    })
}

/// Serialize a forest to JSON
pub fn to_json_string(forest: &[TreeNode], pretty: bool) -> Result<String, HierarchyError> {
    if pretty {
        Ok(serde_json::to_string_pretty(forest)?)
    } else {
        Ok(serde_json::to_string(forest)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::ingest;

    fn hierarchy(lines: &[&str]) -> Hierarchy {
        ingest(lines.iter()).unwrap().hierarchy
    }

    fn sample() -> Hierarchy {
        hierarchy(&[
            "ies:Entity rdfs:subClassOf ies:Thing .",
            "ies:Person rdfs:subClassOf ies:Entity .",
            "ies:Location rdfs:subClassOf ies:Entity .",
            "ies:Event rdfs:subClassOf ies:Thing .",
            "ies:attribute rdf:type rdfs:Class .",
            "ies:hasName rdfs:subPropertyOf ies:attribute .",
        ])
    }

    #[test]
    fn test_example_forest() {
        let h = hierarchy(&["ies:A rdfs:subClassOf ies:B .", "ies:C rdf:type ies:Thing ."]);
        let out = render_to_string(&h, &RenderOptions::default()).unwrap();
        assert_eq!(out, "ies:B\n  ies:A\nies:C\n");
    }

    #[test]
    fn test_full_render_is_lexically_ordered() {
        let out = render_to_string(&sample(), &RenderOptions::default()).unwrap();
        assert_eq!(
            out,
            "ies:Thing\n  ies:Entity\n    ies:Location\n    ies:Person\n  ies:Event\nies:attribute\n  ies:hasName\n"
        );
    }

    #[test]
    fn test_depth_zero_prints_roots_only() {
        let options = RenderOptions {
            max_depth: Some(0),
            ..Default::default()
        };
        let out = render_to_string(&sample(), &options).unwrap();
        assert_eq!(out, "ies:Thing\nies:attribute\n");
    }

    #[test]
    fn test_depth_bound_limits_indentation() {
        let options = RenderOptions {
            max_depth: Some(1),
            ..Default::default()
        };
        let out = render_to_string(&sample(), &options).unwrap();
        assert!(out.lines().all(|l| l.len() - l.trim_start().len() <= 2));
        assert!(out.contains("  ies:Entity\n"));
        assert!(!out.contains("ies:Person"));
    }

    #[test]
    fn test_filter_selects_roots_but_not_descendants() {
        let h = sample();
        let options = RenderOptions {
            filter: RootFilter::Attributes,
            ..Default::default()
        };
        assert_eq!(render_to_string(&h, &options).unwrap(), "ies:attribute\n  ies:hasName\n");

        let options = RenderOptions {
            filter: RootFilter::Relationships,
            ..Default::default()
        };
        assert_eq!(render_to_string(&h, &options).unwrap(), "");
        // Filtering never changes the items
        assert_eq!(h.len(), 7);
    }

    #[test]
    fn test_custom_indent() {
        let h = hierarchy(&["ies:A rdfs:subClassOf ies:B ."]);
        let options = RenderOptions {
            indent: 4,
            ..Default::default()
        };
        assert_eq!(render_to_string(&h, &options).unwrap(), "ies:B\n    ies:A\n");
    }

    #[test]
    fn test_shared_child_is_printed_under_each_parent() {
        let h = hierarchy(&[
            "ies:C rdfs:subClassOf ies:A .",
            "ies:C rdfs:subClassOf ies:B .",
        ]);
        let mut buf = Vec::new();
        let stats = render(&h, &RenderOptions::default(), &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "ies:A\n  ies:C\nies:B\n  ies:C\n");
        assert_eq!(stats.roots, 2);
        assert_eq!(stats.lines, 4);
        assert_eq!(stats.cycles, 0);
    }

    #[test]
    fn test_cycle_below_root_terminates() {
        let h = hierarchy(&[
            "ies:A rdfs:subClassOf ies:Root .",
            "ies:B rdfs:subClassOf ies:A .",
            "ies:A rdfs:subClassOf ies:B .",
        ]);
        let mut buf = Vec::new();
        let stats = render(&h, &RenderOptions::default(), &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "ies:Root\n  ies:A\n    ies:B\n      ies:A\n"
        );
        assert_eq!(stats.cycles, 1);
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let h = sample();
        let first = render_to_string(&h, &RenderOptions::default()).unwrap();
        let second = render_to_string(&h, &RenderOptions::default()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_forest_matches_text_structure() {
        let h = hierarchy(&[
            "ies:A rdfs:subClassOf ies:B .",
            "ies:A rdfs:comment \"an a\" .",
            "ies:C rdf:type ies:Thing .",
        ]);
        let forest = to_forest(&h, &RenderOptions::default());
        assert_eq!(forest.len(), 2);
        assert_eq!(forest[0].subject, "ies:B");
        assert_eq!(forest[0].children[0].subject, "ies:A");
        assert_eq!(forest[0].children[0].comment.as_deref(), Some("\"an a\""));
        assert_eq!(forest[1].kind.as_deref(), Some("ies:Thing"));

        let json = to_json_string(&forest, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["children"][0]["subject"], "ies:A");
        assert!(value[1].get("children").is_none());
        assert!(value[1].get("cycle").is_none());
    }

    #[test]
    fn test_forest_flags_cycle_and_omits_its_children() {
        let h = hierarchy(&[
            "ies:A rdfs:subClassOf ies:Root .",
            "ies:B rdfs:subClassOf ies:A .",
            "ies:A rdfs:subClassOf ies:B .",
        ]);
        let forest = to_forest(&h, &RenderOptions::default());
        assert_eq!(forest.len(), 1);

        let a = &forest[0].children[0];
        assert_eq!(a.subject, "ies:A");
        assert!(!a.cycle);
        let b = &a.children[0];
        assert_eq!(b.subject, "ies:B");
        let inner = &b.children[0];
        assert_eq!(inner.subject, "ies:A");
        assert!(inner.cycle);
        assert!(inner.children.is_empty());

        let json = to_json_string(&forest, false).unwrap();
        assert_eq!(
            json,
            r#"[{"subject":"ies:Root","children":[{"subject":"ies:A","children":[{"subject":"ies:B","children":[{"subject":"ies:A","cycle":true}]}]}]}]"#
        );
    }

    #[test]
    fn test_forest_respects_depth() {
        let options = RenderOptions {
            max_depth: Some(0),
            ..Default::default()
        };
        let forest = to_forest(&sample(), &options);
        assert!(forest.iter().all(|n| n.children.is_empty()));
    }
}
