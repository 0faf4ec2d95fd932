#[cfg(test)]
#[path = "../../tests/unit/common/text_reader_test.rs"]
mod text_reader_test;

use super::{ReadError, ReadResult};
use std::io::prelude::*;
use std::io::{BufReader, Read};
use std::str::FromStr;

/// Reads input line by line keeping track of line numbers. Sections are read in two phases: lines
/// are discarded until a marker line, then accumulated until a terminator line.
pub(crate) struct SectionReader<R: Read> {
    bytes: Vec<u8>,
    buffer: String,
    reader: BufReader<R>,
    line_number: usize,
}

impl<R: Read> SectionReader<R> {
    pub fn new(reader: BufReader<R>) -> Self {
        Self { bytes: Vec::new(), buffer: String::new(), reader, line_number: 0 }
    }

    /// Discards lines until `is_marker` matches. Returns false when input ends first.
    pub fn skip_until(&mut self, is_marker: impl Fn(&str) -> bool) -> ReadResult<bool> {
        while self.read_line()? {
            if is_marker(self.buffer.as_str()) {
                return Ok(true);
            }
        }

        Ok(false)
    }

    /// Parses every line until `is_terminator` matches or input ends. The terminator line is consumed,
    /// but not parsed.
    pub fn read_until<T>(
        &mut self,
        is_terminator: impl Fn(&str) -> bool,
        mut parse_fn: impl FnMut(usize, &str) -> ReadResult<T>,
    ) -> ReadResult<Vec<T>> {
        let mut items = Vec::new();

        while self.read_line()? {
            let line = self.buffer.trim();
            if is_terminator(line) {
                break;
            }

            items.push(parse_fn(self.line_number, line)?);
        }

        Ok(items)
    }

    /// Parses every non-blank line till the end of input.
    pub fn read_non_blank<T>(&mut self, mut parse_fn: impl FnMut(usize, &str) -> ReadResult<T>) -> ReadResult<Vec<T>> {
        let mut items = Vec::new();

        while self.read_line()? {
            let line = self.buffer.trim();
            if !line.is_empty() {
                items.push(parse_fn(self.line_number, line)?);
            }
        }

        Ok(items)
    }

    fn read_line(&mut self) -> ReadResult<bool> {
        self.bytes.clear();
        self.buffer.clear();

        if self.reader.read_until(b'\n', &mut self.bytes)? == 0 {
            return Ok(false);
        }

        self.line_number += 1;

        match std::str::from_utf8(&self.bytes) {
            Ok(line) => self.buffer.push_str(line),
            Err(_) => {
                let content = String::from_utf8_lossy(&self.bytes);
                return Err(ReadError::malformed(self.line_number, &content, "line is not valid utf-8"));
            }
        }

        Ok(true)
    }
}

/// Splits line into whitespace separated fields and checks that there are at least `min_fields` of them.
pub(crate) fn split_fields<'a>(line_number: usize, line: &'a str, min_fields: usize) -> ReadResult<Vec<&'a str>> {
    let fields = line.split_whitespace().collect::<Vec<_>>();

    if fields.len() < min_fields {
        Err(ReadError::malformed(
            line_number,
            line,
            format!("expecting at least {min_fields} fields, got {}", fields.len()),
        ))
    } else {
        Ok(fields)
    }
}

/// Parses a single field reporting the line it comes from on failure.
pub(crate) fn parse_field<T: FromStr>(line_number: usize, line: &str, field: &str, name: &str) -> ReadResult<T> {
    field.parse::<T>().map_err(|_| ReadError::malformed(line_number, line, format!("cannot parse {name} '{field}'")))
}
