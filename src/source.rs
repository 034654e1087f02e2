//! Input sources for triples
//!
//! A source is resolved to its full list of lines before ingestion starts.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use tracing::debug;
use url::Url;

use crate::error::HierarchyError;

/// Source from which to read statement lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TripleSource {
    /// Local triples file
    File(PathBuf),
    /// Standard input
    Stdin,
    /// Remote file fetched over HTTP(S)
    Url(String),
}

impl TripleSource {
    /// Interpret a command-line argument
    /// - `-`: standard input
    /// - `http://` / `https://`: URL
    /// - anything else: local path
    pub fn from_arg(arg: &str) -> Result<Self, HierarchyError> {
        if arg == "-" {
            Ok(TripleSource::Stdin)
        } else if is_url(arg) {
            let parsed = Url::parse(arg).map_err(|e| HierarchyError::SourceUnavailable {
                origin: arg.to_string(),
                reason: format!("invalid URL: {}", e),
            })?;
            Ok(TripleSource::Url(parsed.to_string()))
        } else {
            Ok(TripleSource::File(PathBuf::from(arg)))
        }
    }
}

impl fmt::Display for TripleSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TripleSource::File(p) => write!(f, "{}", p.display()),
            TripleSource::Stdin => f.write_str("<stdin>"),
            TripleSource::Url(u) => f.write_str(u),
        }
    }
}

/// Check if a source string is a URL
fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Read every line of a source
pub fn read_lines(source: &TripleSource) -> Result<Vec<String>, HierarchyError> {
    let unavailable = |reason: String| HierarchyError::SourceUnavailable {
        origin: source.to_string(),
        reason,
    };

    let lines = match source {
        TripleSource::File(path) => {
            let file = File::open(path)
                .map_err(|e| unavailable(format!("failed to open file: {}", e)))?;
            lines_from_reader(BufReader::new(file))
        }
        TripleSource::Stdin => lines_from_reader(io::stdin().lock()),
        TripleSource::Url(url) => {
            let body = fetch_url(url).map_err(unavailable)?;
            Ok(body.lines().map(String::from).collect())
        }
    }
    .map_err(|e| unavailable(format!("failed to read: {}", e)))?;

    debug!("read {} lines from {}", lines.len(), source);
    Ok(lines)
}

/// Collect lines from any buffered reader
///
/// Invalid UTF-8 is replaced rather than rejected, matching the lossy
/// decoding used for URL bodies.
pub fn lines_from_reader<R: BufRead>(mut reader: R) -> io::Result<Vec<String>> {
    let mut lines = Vec::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        lines.push(String::from_utf8_lossy(&buf).into_owned());
    }
    Ok(lines)
}

/// Simple URL fetch, failing on non-success status
fn fetch_url(url: &str) -> Result<String, String> {
    let response =
        reqwest::blocking::get(url).map_err(|e| format!("HTTP request failed: {}", e))?;
    if !response.status().is_success() {
        return Err(format!("HTTP status {}", response.status()));
    }
    response
        .text()
        .map_err(|e| format!("Failed to read response: {}", e))
}
