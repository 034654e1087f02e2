//! Line-level statement parsing
//!
//! Each statement occupies exactly one line: `<subject> <predicate> <object> .`
//! Blank lines, `#` comments and `@` directives are skipped.

use crate::error::HierarchyError;
use crate::vocab::{has_subject_prefix, STATEMENT_TERMINATOR};

/// A single parsed (subject, predicate, object) statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement<'a> {
    pub subject: &'a str,
    pub predicate: &'a str,
    /// May contain embedded spaces (e.g. comment text)
    pub object: &'a str,
}

/// Parse one raw line
///
/// # Arguments
/// * `raw` - The line as read, including any surrounding whitespace
/// * `line_number` - 1-based position of the line, used in errors
///
/// # Returns
/// `Ok(None)` for lines that carry no statement, `Ok(Some(..))` otherwise
pub fn parse_line(raw: &str, line_number: usize) -> Result<Option<Statement<'_>>, HierarchyError> {
    let line = raw.trim();
    if is_ignorable(line) {
        return Ok(None);
    }

    if !has_subject_prefix(line) {
        return Err(HierarchyError::parse(
            line_number,
            format!("line {:?} does not start with 'ies' or '<'", line),
        ));
    }

    let body = line.strip_suffix(STATEMENT_TERMINATOR).unwrap_or(line);
    let mut parts = body.splitn(3, ' ');
    let (subject, predicate, object) = match (parts.next(), parts.next(), parts.next()) {
        (Some(s), Some(p), Some(o)) => (s, p, o),
        _ => {
            return Err(HierarchyError::parse(
                line_number,
                format!("line {:?} does not have 3 parts", line),
            ))
        }
    };

    for (field, value) in [
        ("subject", subject),
        ("predicate", predicate),
        ("object", object),
    ] {
        if value.trim().is_empty() {
            return Err(HierarchyError::parse(
                line_number,
                format!("line {:?} does not have {} {}", line, article(field), field),
            ));
        }
    }

    Ok(Some(Statement {
        subject,
        predicate,
        object,
    }))
}

/// Blank, comment and directive lines
fn is_ignorable(line: &str) -> bool {
    line.is_empty() || line.starts_with('#') || line.starts_with('@')
}

fn article(word: &str) -> &'static str {
    if word.starts_with('o') {
        "an"
    } else {
        "a"
    }
}
