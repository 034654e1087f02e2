//! Vocabulary recognised by the triple ingestor
//!
//! Defines the predicates that carry meaning for the hierarchy, the
//! subject prefixes a statement must start with, and the names of the
//! root filter presets.

/// `rdf:type`, sets an item's kind
pub const RDF_TYPE: &str = "rdf:type";

/// `rdfs:comment`
pub const RDFS_COMMENT: &str = "rdfs:comment";

/// `rdfs:domain`
pub const RDFS_DOMAIN: &str = "rdfs:domain";

/// `rdfs:range`
pub const RDFS_RANGE: &str = "rdfs:range";

/// IES powertype relation, treated as a parent edge
pub const IES_POWERTYPE: &str = "ies:powertype";

/// `rdfs:subClassOf`
pub const RDFS_SUB_CLASS_OF: &str = "rdfs:subClassOf";

/// `rdfs:subPropertyOf`
pub const RDFS_SUB_PROPERTY_OF: &str = "rdfs:subPropertyOf";

/// Prefixes a statement line must start with to be processed
pub const SUBJECT_PREFIXES: [&str; 2] = ["ies", "<"];

/// Statement terminator stripped before splitting
pub const STATEMENT_TERMINATOR: &str = " .";

/// File read when no source is given on the command line
pub const DEFAULT_SOURCE: &str = "ies.rdf";

pub const IES_ATTRIBUTE: &str = "ies:attribute";
pub const IES_RELATIONSHIP: &str = "ies:relationship";
pub const RDFS_CLASS: &str = "rdfs:Class";
pub const RDFS_RESOURCE: &str = "rdfs:Resource";

/// Names accepted by `RootFilter::from_str`
pub const FILTER_NAMES: [&str; 4] = ["all", "attributes", "relationships", "types"];

/// Relations that register a parent/child edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HierarchyRelation {
    Powertype,
    SubClassOf,
    SubPropertyOf,
}

/// Classification of a statement's predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    Type,
    Comment,
    Domain,
    Range,
    Hierarchy(HierarchyRelation),
    Unknown,
}

impl Predicate {
    /// Classify a predicate token
    pub fn classify(predicate: &str) -> Self {
        match predicate {
            RDF_TYPE => Predicate::Type,
            RDFS_COMMENT => Predicate::Comment,
            RDFS_DOMAIN => Predicate::Domain,
            RDFS_RANGE => Predicate::Range,
            IES_POWERTYPE => Predicate::Hierarchy(HierarchyRelation::Powertype),
            RDFS_SUB_CLASS_OF => Predicate::Hierarchy(HierarchyRelation::SubClassOf),
            RDFS_SUB_PROPERTY_OF => Predicate::Hierarchy(HierarchyRelation::SubPropertyOf),
            _ => Predicate::Unknown,
        }
    }

    pub fn is_hierarchy(&self) -> bool {
        matches!(self, Predicate::Hierarchy(_))
    }
}

/// Check if a line starts with one of the accepted subject prefixes
pub fn has_subject_prefix(line: &str) -> bool {
    SUBJECT_PREFIXES.iter().any(|p| line.starts_with(p))
}
