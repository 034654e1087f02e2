//! RDF Hierarchy CLI
//!
//! Command-line tool for printing the class/property hierarchy of a triples file.

use std::io::{self, Write};

use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use rdf_hierarchy::{
    ingest, read_lines, render, to_forest, to_json_string, HierarchyError, RenderOptions,
    RootFilter, TripleSource, DEFAULT_INDENT, DEFAULT_SOURCE,
};

#[derive(Parser)]
#[command(name = "rdf-hierarchy")]
#[command(about = "Print the subclass/subproperty hierarchy of a triples file as a tree")]
#[command(version)]
struct Cli {
    /// Triples file, `-` for stdin, or an http(s) URL
    #[arg(default_value = DEFAULT_SOURCE)]
    source: String,

    /// Filter to apply to the top level items, choose from [all, attributes, relationships, types]
    #[arg(long, default_value = "all")]
    filter: String,

    /// Maximum depth to display (default: unbounded)
    #[arg(long)]
    depth: Option<usize>,

    /// Spaces of indentation per level
    #[arg(long, default_value_t = DEFAULT_INDENT)]
    indent: usize,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<(), HierarchyError> {
    // Reject the filter before touching the input
    let filter: RootFilter = cli.filter.parse()?;
    let options = RenderOptions {
        filter,
        max_depth: cli.depth,
        indent: cli.indent,
    };

    let source = TripleSource::from_arg(&cli.source)?;
    let lines = read_lines(&source)?;
    let ingested = ingest(&lines)?;

    info!(
        "Read {} statements from {}, {} items ({} unknown predicates)",
        ingested.stats.statements,
        source,
        ingested.hierarchy.len(),
        ingested.stats.unknown_predicates.len()
    );

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    match cli.format {
        Format::Text => {
            let stats = render(&ingested.hierarchy, &options, &mut out)?;
            info!("Printed {} roots, {} lines", stats.roots, stats.lines);
        }
        Format::Json => {
            let forest = to_forest(&ingested.hierarchy, &options);
            writeln!(out, "{}", to_json_string(&forest, cli.pretty)?)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
