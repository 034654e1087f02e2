//! Error types for hierarchy ingestion and rendering

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HierarchyError {
    #[error("Failed to read triples from {origin}: {reason}")]
    SourceUnavailable { origin: String, reason: String },

    #[error("error at line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// Non-fatal; ingestion records it and keeps going.
    #[error("unknown predicate {predicate:?} on line {line}")]
    UnknownPredicate { predicate: String, line: usize },

    #[error("unknown filter {0:?}, choose from [{names}]", names = crate::vocab::FILTER_NAMES.join(", "))]
    UnknownFilter(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl HierarchyError {
    pub(crate) fn parse(line: usize, reason: impl Into<String>) -> Self {
        HierarchyError::Parse {
            line,
            reason: reason.into(),
        }
    }

    /// Line number for errors tied to a statement
    pub fn line(&self) -> Option<usize> {
        match self {
            HierarchyError::Parse { line, .. } | HierarchyError::UnknownPredicate { line, .. } => {
                Some(*line)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_filter_lists_choices() {
        let err = HierarchyError::UnknownFilter("everything".to_string());
        assert_eq!(
            err.to_string(),
            "unknown filter \"everything\", choose from [all, attributes, relationships, types]"
        );
    }
}
