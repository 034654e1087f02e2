//! RDF Hierarchy Library
//!
//! Reads a restricted, line-oriented serialization of RDF triples that
//! describes a taxonomy (classes, properties and the relations between
//! them) and renders its subclass / subproperty / powertype hierarchy as
//! an indented forest.
//!
//! # Overview
//!
//! Processing is strictly two-phase:
//!
//! 1. **Ingest**: every line is parsed into a (subject, predicate, object)
//!    statement and folded into a `GraphBuilder`. Hierarchy predicates
//!    register a parent edge on the subject and the inverse child edge on
//!    the object. The first malformed line aborts the run.
//! 2. **Render**: the frozen `Hierarchy` is walked from each parentless
//!    root (optionally filtered) in lexical order, depth-first, printing
//!    one indented subject per line down to an optional depth bound.
//!
//! # Input format
//!
//! One statement per line, `<subject> <predicate> <object> .`. Blank lines,
//! `#` comments and `@` directives are ignored. Recognised predicates are
//! `rdf:type`, `rdfs:comment`, `rdfs:domain`, `rdfs:range`,
//! `ies:powertype`, `rdfs:subClassOf` and `rdfs:subPropertyOf`; anything
//! else is reported and skipped.
//!
//! # Usage
//!
//! ```
//! use rdf_hierarchy::{ingest, render_to_string, RenderOptions};
//!
//! let lines = ["ies:A rdfs:subClassOf ies:B .", "ies:C rdf:type ies:Thing ."];
//! let ingested = ingest(lines)?;
//! let text = render_to_string(&ingested.hierarchy, &RenderOptions::default())?;
//! assert_eq!(text, "ies:B\n  ies:A\nies:C\n");
//! # Ok::<(), rdf_hierarchy::HierarchyError>(())
//! ```

pub mod error;
pub mod filter;
pub mod graph;
pub mod ingest;
pub mod render;
pub mod source;
pub mod statement;
pub mod vocab;

// Re-export main types for convenience
pub use crate::error::HierarchyError;
pub use crate::filter::RootFilter;
pub use crate::graph::{GraphBuilder, Hierarchy, Item, ItemId, Node, NodeId};
pub use crate::ingest::{ingest, IngestStats, Ingested};
pub use crate::render::{
    render, render_to_string, select_roots, to_forest, to_json_string, RenderOptions,
    RenderStats, TreeNode, DEFAULT_INDENT,
};
pub use crate::source::{read_lines, TripleSource};
pub use crate::statement::{parse_line, Statement};
pub use crate::vocab::{Predicate, DEFAULT_SOURCE};
