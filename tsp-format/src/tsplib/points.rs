#[cfg(test)]
#[path = "../../tests/unit/tsplib/points_test.rs"]
mod points_test;

use super::{NODE_COORD_SECTION, is_coord_section_end, is_coord_section_marker};
use crate::common::*;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// A trait to read point coordinates of tsplib95 instance.
pub trait TsplibPoints {
    /// Reads points in the order of `NODE_COORD_SECTION`.
    fn read_points(self) -> ReadResult<Vec<Point>>;
}

impl<R: Read> TsplibPoints for BufReader<R> {
    fn read_points(self) -> ReadResult<Vec<Point>> {
        PointReader::new(self).read_points()
    }
}

impl TsplibPoints for String {
    fn read_points(self) -> ReadResult<Vec<Point>> {
        PointReader::new(BufReader::new(self.as_bytes())).read_points()
    }
}

/// Reads points from the instance file at given path.
pub fn read_point_file(path: impl AsRef<Path>) -> ReadResult<Vec<Point>> {
    BufReader::new(File::open(path)?).read_points()
}

struct PointReader<R: Read> {
    reader: SectionReader<R>,
}

impl<R: Read> PointReader<R> {
    fn new(reader: BufReader<R>) -> Self {
        Self { reader: SectionReader::new(reader) }
    }

    fn read_points(&mut self) -> ReadResult<Vec<Point>> {
        if !self.reader.skip_until(is_coord_section_marker)? {
            return Err(ReadError::MissingSection { marker: NODE_COORD_SECTION });
        }

        self.reader.read_until(is_coord_section_end, parse_point)
    }
}

/// Parses `<index> <x> <y>` line, the index is ignored as the position in the section defines it.
fn parse_point(line_number: usize, line: &str) -> ReadResult<Point> {
    let fields = split_fields(line_number, line, 3)?;

    let x = parse_field::<f64>(line_number, line, fields[1], "x coordinate")?;
    let y = parse_field::<f64>(line_number, line, fields[2], "y coordinate")?;

    Ok(Point::new(x, y))
}
