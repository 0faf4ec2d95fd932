#[cfg(test)]
#[path = "../../tests/unit/edges/reader_test.rs"]
mod reader_test;

use crate::common::*;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// A trait to read edge list.
pub trait EdgeListProblem {
    /// Reads edges in file order. Blank lines are skipped, every other line must have at least two
    /// integer fields.
    fn read_edges(self) -> ReadResult<Vec<Edge>>;
}

impl<R: Read> EdgeListProblem for BufReader<R> {
    fn read_edges(self) -> ReadResult<Vec<Edge>> {
        SectionReader::new(self).read_non_blank(parse_edge)
    }
}

impl EdgeListProblem for String {
    fn read_edges(self) -> ReadResult<Vec<Edge>> {
        BufReader::new(self.as_bytes()).read_edges()
    }
}

/// Reads edges from the file at given path.
pub fn read_edge_file(path: impl AsRef<Path>) -> ReadResult<Vec<Edge>> {
    BufReader::new(File::open(path)?).read_edges()
}

fn parse_edge(line_number: usize, line: &str) -> ReadResult<Edge> {
    let fields = split_fields(line_number, line, 2)?
        .into_iter()
        .map(|field| parse_field::<usize>(line_number, line, field, "point index"))
        .collect::<ReadResult<Vec<_>>>()?;

    Edge::with_fields(fields).ok_or_else(|| ReadError::malformed(line_number, line, "expecting at least 2 fields"))
}
