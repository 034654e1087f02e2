//! Item graph built during ingestion
//!
//! `GraphBuilder` owns the mutable subject -> item mapping while statements
//! are folded in. Once ingestion finishes it is frozen into a `Hierarchy`,
//! an immutable arena where nodes address each other by index and child
//! lists are already in lexical order.

use indexmap::IndexSet;
use std::collections::HashMap;

/// Index of an item inside a `GraphBuilder`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(usize);

/// All facts accumulated about one subject
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Item {
    /// Identifier, also used as the display label
    pub subject: String,
    /// Set by `rdf:type`
    pub kind: Option<String>,
    pub domain: Option<String>,
    pub range: Option<String>,
    pub comment: Option<String>,
    parents: IndexSet<String>,
    children: IndexSet<String>,
}

impl Item {
    fn new(subject: &str) -> Self {
        Self {
            subject: subject.to_string(),
            ..Default::default()
        }
    }

    pub fn parents(&self) -> &IndexSet<String> {
        &self.parents
    }

    pub fn children(&self) -> &IndexSet<String> {
        &self.children
    }
}

/// Mutable graph, only touched by ingestion
#[derive(Debug, Default)]
pub struct GraphBuilder {
    items: Vec<Item>,
    index: HashMap<String, ItemId>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the item for `subject`, creating an empty one on first reference
    pub fn get_or_create(&mut self, subject: &str) -> ItemId {
        if let Some(id) = self.index.get(subject) {
            return *id;
        }
        let id = ItemId(self.items.len());
        self.items.push(Item::new(subject));
        self.index.insert(subject.to_string(), id);
        id
    }

    pub fn set_kind(&mut self, id: ItemId, kind: &str) {
        self.items[id.0].kind = Some(kind.to_string());
    }

    pub fn set_comment(&mut self, id: ItemId, comment: &str) {
        self.items[id.0].comment = Some(comment.to_string());
    }

    pub fn set_domain(&mut self, id: ItemId, domain: &str) {
        self.items[id.0].domain = Some(domain.to_string());
    }

    pub fn set_range(&mut self, id: ItemId, range: &str) {
        self.items[id.0].range = Some(range.to_string());
    }

    /// Register `parent` as a parent of `child`, along with the inverse child edge
    pub fn add_parent(&mut self, child: ItemId, parent: &str) {
        let parent_id = self.get_or_create(parent);
        let child_subject = self.items[child.0].subject.clone();
        self.items[child.0].parents.insert(parent.to_string());
        self.items[parent_id.0].children.insert(child_subject);
    }

    pub fn get(&self, subject: &str) -> Option<&Item> {
        self.index.get(subject).map(|id| &self.items[id.0])
    }

    pub fn item(&self, id: ItemId) -> &Item {
        &self.items[id.0]
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Convert into the read-only arena used for rendering
    pub fn freeze(self) -> Hierarchy {
        // Arena order is lexical so that index order == display order
        let mut items = self.items;
        items.sort_by(|a, b| a.subject.cmp(&b.subject));

        let lookup: HashMap<String, NodeId> = items
            .iter()
            .enumerate()
            .map(|(i, item)| (item.subject.clone(), NodeId(i)))
            .collect();

        let resolve = |names: &IndexSet<String>| -> Vec<NodeId> {
            let mut ids: Vec<NodeId> = names
                .iter()
                .filter_map(|n| lookup.get(n).copied())
                .collect();
            ids.sort();
            ids
        };

        let nodes = items
            .into_iter()
            .map(|item| Node {
                parents: resolve(&item.parents),
                children: resolve(&item.children),
                subject: item.subject,
                kind: item.kind,
                domain: item.domain,
                range: item.range,
                comment: item.comment,
            })
            .collect();

        Hierarchy { nodes, lookup }
    }
}

/// Index of a node inside a `Hierarchy`; ordering follows subject order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Frozen item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub subject: String,
    pub kind: Option<String>,
    pub domain: Option<String>,
    pub range: Option<String>,
    pub comment: Option<String>,
    /// Sorted by subject
    pub parents: Vec<NodeId>,
    /// Sorted by subject
    pub children: Vec<NodeId>,
}

impl Node {
    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }
}

/// Read-only hierarchy, nodes stored in lexical subject order
#[derive(Debug, Clone, Default)]
pub struct Hierarchy {
    nodes: Vec<Node>,
    lookup: HashMap<String, NodeId>,
}

impl Hierarchy {
    pub fn lookup(&self, subject: &str) -> Option<NodeId> {
        self.lookup.get(subject).copied()
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn get(&self, subject: &str) -> Option<&Node> {
        self.lookup(subject).map(|id| self.node(id))
    }

    /// Nodes in lexical subject order
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Every node without parents, in lexical subject order
    pub fn roots(&self) -> Vec<NodeId> {
        self.iter()
            .filter(|(_, node)| node.is_root())
            .map(|(id, _)| id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
