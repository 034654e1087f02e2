//! Triple ingestion
//!
//! Folds a sequence of raw lines into a `GraphBuilder`, one statement at a
//! time, and freezes the result. The first malformed line aborts the run.

use tracing::{debug, warn};

use crate::error::HierarchyError;
use crate::graph::{GraphBuilder, Hierarchy};
use crate::statement::{parse_line, Statement};
use crate::vocab::Predicate;

/// Statistics from ingestion
#[derive(Debug, Default)]
pub struct IngestStats {
    /// Lines consumed, including skipped ones
    pub lines_read: usize,
    /// Lines that produced a statement
    pub statements: usize,
    /// Blank, comment and directive lines
    pub skipped: usize,
    /// Statements whose predicate was not recognised
    pub unknown_predicates: Vec<HierarchyError>,
}

/// Result of a successful ingestion
#[derive(Debug)]
pub struct Ingested {
    pub hierarchy: Hierarchy,
    pub stats: IngestStats,
}

/// Ingest all lines and freeze the resulting graph
pub fn ingest<I, S>(lines: I) -> Result<Ingested, HierarchyError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut graph = GraphBuilder::new();
    let mut stats = IngestStats::default();

    for (i, line) in lines.into_iter().enumerate() {
        let line_number = i + 1;
        stats.lines_read += 1;

        let statement = match parse_line(line.as_ref(), line_number)? {
            Some(s) => s,
            None => {
                stats.skipped += 1;
                continue;
            }
        };
        stats.statements += 1;

        if let Some(diagnostic) = apply(&mut graph, &statement, line_number) {
            warn!("{}", diagnostic);
            stats.unknown_predicates.push(diagnostic);
        }
    }

    debug!(
        "ingested {} statements into {} items ({} lines skipped)",
        stats.statements,
        graph.len(),
        stats.skipped
    );

    Ok(Ingested {
        hierarchy: graph.freeze(),
        stats,
    })
}

/// Fold one statement into the graph
///
/// Returns a diagnostic when the predicate is unknown; the subject item is
/// still created in that case but nothing else about it changes.
pub fn apply(
    graph: &mut GraphBuilder,
    statement: &Statement<'_>,
    line_number: usize,
) -> Option<HierarchyError> {
    let item = graph.get_or_create(statement.subject);
    let object = statement.object;

    match Predicate::classify(statement.predicate) {
        Predicate::Type => graph.set_kind(item, object),
        Predicate::Comment => graph.set_comment(item, object),
        Predicate::Domain => graph.set_domain(item, object),
        Predicate::Range => graph.set_range(item, object),
        Predicate::Hierarchy(_) => graph.add_parent(item, object),
        Predicate::Unknown => {
            return Some(HierarchyError::UnknownPredicate {
                predicate: statement.predicate.to_string(),
                line: line_number,
            })
        }
    }
    None
}
