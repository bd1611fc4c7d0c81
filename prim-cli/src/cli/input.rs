//! Edge-list ingestion.
//!
//! The format is line based. Blank lines and lines starting with `#` are
//! ignored. The first remaining line holds the vertex count; every later line
//! holds one edge as `u v weight`, separated by whitespace.
//!
//! ```text
//! # triangle
//! 3
//! 0 1 1
//! 1 2 2
//! 0 2 3
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use prim_core::{Graph, Weight};
use thiserror::Error;
use tracing::{Span, debug, field, instrument};

use super::CliError;

/// Why an edge-list line was rejected.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ParseReason {
    /// The input ended before a vertex count was seen.
    #[error("expected a vertex count before end of input")]
    MissingVertexCount,
    /// A line had the wrong number of whitespace-separated fields.
    #[error("expected {expected} field(s), found {found}")]
    FieldCount {
        /// Fields required on this line.
        expected: usize,
        /// Fields present.
        found: usize,
    },
    /// A field was not a non-negative integer in range.
    #[error("invalid {field} `{token}`")]
    InvalidNumber {
        /// Which field failed to parse.
        field: &'static str,
        /// The raw token.
        token: String,
    },
    /// The vertex count parsed but is too large to allocate.
    #[error("vertex count {count} cannot be allocated")]
    VertexCountTooLarge {
        /// The requested vertex count.
        count: usize,
    },
}

/// Reads and parses the edge list at `path`.
#[instrument(
    name = "cli.read_edge_list",
    err,
    skip(path),
    fields(path = field::Empty, edges = field::Empty),
)]
pub(super) fn read_edge_list(path: &Path) -> Result<Graph, CliError> {
    let span = Span::current();
    span.record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let graph = parse_edge_list(BufReader::new(file), path)?;
    span.record("edges", graph.edge_count());
    Ok(graph)
}

/// Parses an edge list from `reader`; `path` is only used in I/O errors.
pub(super) fn parse_edge_list(reader: impl BufRead, path: &Path) -> Result<Graph, CliError> {
    let mut graph: Option<Graph> = None;
    let mut last_line = 0;

    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        last_line = line_number;
        let text = line.map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let content = text.trim();
        if content.is_empty() || content.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = content.split_whitespace().collect();

        match graph.as_mut() {
            None => {
                let [count] = expect_fields::<1>(&fields, line_number)?;
                let vertex_count = parse_field::<usize>(count, "vertex count", line_number)?;
                debug!(vertex_count, line = line_number, "read vertex count");
                let allocated = Graph::try_new(vertex_count).map_err(|_| CliError::Parse {
                    line: line_number,
                    reason: ParseReason::VertexCountTooLarge {
                        count: vertex_count,
                    },
                })?;
                graph = Some(allocated);
            }
            Some(graph) => {
                let [u, v, weight] = expect_fields::<3>(&fields, line_number)?;
                graph
                    .add_edge(
                        parse_field::<usize>(u, "source vertex", line_number)?,
                        parse_field::<usize>(v, "target vertex", line_number)?,
                        parse_field::<Weight>(weight, "weight", line_number)?,
                    )
                    .map_err(|source| CliError::Graph {
                        line: line_number,
                        source,
                    })?;
            }
        }
    }

    graph.ok_or(CliError::Parse {
        line: last_line + 1,
        reason: ParseReason::MissingVertexCount,
    })
}

fn expect_fields<'a, const N: usize>(
    fields: &[&'a str],
    line: usize,
) -> Result<[&'a str; N], CliError> {
    <[&str; N]>::try_from(fields).map_err(|_| CliError::Parse {
        line,
        reason: ParseReason::FieldCount {
            expected: N,
            found: fields.len(),
        },
    })
}

fn parse_field<T: FromStr>(token: &str, field: &'static str, line: usize) -> Result<T, CliError> {
    token.parse().map_err(|_| CliError::Parse {
        line,
        reason: ParseReason::InvalidNumber {
            field,
            token: token.to_owned(),
        },
    })
}
