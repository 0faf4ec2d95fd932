#[cfg(test)]
#[path = "../../tests/unit/tsplib/tour_test.rs"]
mod tour_test;

use super::{TOUR_SECTION, is_tour_section_end, is_tour_section_marker};
use crate::common::*;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// A trait to read tsplib95 tour.
pub trait TsplibTour {
    /// Reads a raw sequence of one-based point indices from `TOUR_SECTION`. Indices are not checked
    /// against any instance.
    fn read_tour(self) -> ReadResult<Tour>;
}

impl<R: Read> TsplibTour for BufReader<R> {
    fn read_tour(self) -> ReadResult<Tour> {
        TourReader::new(self).read_tour()
    }
}

impl TsplibTour for String {
    fn read_tour(self) -> ReadResult<Tour> {
        TourReader::new(BufReader::new(self.as_bytes())).read_tour()
    }
}

/// Reads the tour file at given path and checks that every index references one of `points`.
pub fn read_tour_file(path: impl AsRef<Path>, points: &[Point]) -> ReadResult<Tour> {
    let tour = BufReader::new(File::open(path)?).read_tour()?;

    tour.indices().iter().try_for_each(|&index| IndexBase::One.to_position(index, points.len()).map(|_| ()))?;

    Ok(tour)
}

struct TourReader<R: Read> {
    reader: SectionReader<R>,
}

impl<R: Read> TourReader<R> {
    fn new(reader: BufReader<R>) -> Self {
        Self { reader: SectionReader::new(reader) }
    }

    fn read_tour(&mut self) -> ReadResult<Tour> {
        if !self.reader.skip_until(is_tour_section_marker)? {
            return Err(ReadError::MissingSection { marker: TOUR_SECTION });
        }

        let indices = self.reader.read_until(is_tour_section_end, |line_number, line| {
            let fields = split_fields(line_number, line, 1)?;
            parse_field::<usize>(line_number, line, fields[0], "tour index")
        })?;

        if indices.is_empty() { Err(ReadError::EmptyTour) } else { Ok(Tour::new(indices)) }
    }
}
