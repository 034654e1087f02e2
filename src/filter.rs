//! Root selection presets
//!
//! A filter only decides which roots are printed; once a root is selected
//! its whole subtree is rendered.

use std::fmt;
use std::str::FromStr;

use crate::error::HierarchyError;
use crate::graph::Node;
use crate::vocab::{IES_ATTRIBUTE, IES_RELATIONSHIP, RDFS_CLASS, RDFS_RESOURCE, RDF_TYPE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RootFilter {
    /// Every root
    #[default]
    All,
    /// Only `ies:attribute`
    Attributes,
    /// Only `ies:relationship`
    Relationships,
    /// `rdf:type`, `rdfs:Class` and `rdfs:Resource`
    Types,
}

impl RootFilter {
    pub fn name(&self) -> &'static str {
        match self {
            RootFilter::All => "all",
            RootFilter::Attributes => "attributes",
            RootFilter::Relationships => "relationships",
            RootFilter::Types => "types",
        }
    }

    /// Whether `node` may be printed as a root
    pub fn includes(&self, node: &Node) -> bool {
        let subject = node.subject.as_str();
        match self {
            RootFilter::All => true,
            RootFilter::Attributes => subject == IES_ATTRIBUTE,
            RootFilter::Relationships => subject == IES_RELATIONSHIP,
            RootFilter::Types => matches!(subject, RDF_TYPE | RDFS_CLASS | RDFS_RESOURCE),
        }
    }
}

impl FromStr for RootFilter {
    type Err = HierarchyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(RootFilter::All),
            "attributes" => Ok(RootFilter::Attributes),
            "relationships" => Ok(RootFilter::Relationships),
            "types" => Ok(RootFilter::Types),
            other => Err(HierarchyError::UnknownFilter(other.to_string())),
        }
    }
}

impl fmt::Display for RootFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::FILTER_NAMES;

    fn node(subject: &str) -> Node {
        Node {
            subject: subject.to_string(),
            kind: None,
            domain: None,
            range: None,
            comment: None,
            parents: vec![],
            children: vec![],
        }
    }

    #[test]
    fn test_from_str_round_trips_names() {
        for name in FILTER_NAMES {
            let filter: RootFilter = name.parse().unwrap();
            assert_eq!(filter.name(), name);
        }
    }

    #[test]
    fn test_unknown_filter() {
        let err = "classes".parse::<RootFilter>().unwrap_err();
        assert!(matches!(err, HierarchyError::UnknownFilter(ref n) if n == "classes"));
        assert!(err.to_string().contains("attributes"));
    }

    #[test]
    fn test_presets() {
        assert!(RootFilter::All.includes(&node("ies:Anything")));
        assert!(RootFilter::Attributes.includes(&node("ies:attribute")));
        assert!(!RootFilter::Attributes.includes(&node("ies:Attribute")));
        assert!(RootFilter::Relationships.includes(&node("ies:relationship")));
        assert!(RootFilter::Types.includes(&node("rdfs:Class")));
        assert!(RootFilter::Types.includes(&node("rdfs:Resource")));
        assert!(RootFilter::Types.includes(&node("rdf:type")));
        assert!(!RootFilter::Types.includes(&node("ies:Entity")));
    }
}
