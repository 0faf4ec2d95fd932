#[cfg(test)]
#[path = "../../tests/unit/common/models_test.rs"]
mod models_test;

use super::{ReadError, ReadResult};
use std::collections::HashSet;

/// Represents a point on a plane.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a new instance of `Point`.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Specifies how point indices written in a file map to positions in a point sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndexBase {
    /// Index `0` refers to the first point.
    Zero,
    /// Index `1` refers to the first point.
    One,
}

impl IndexBase {
    /// Converts index to a position in a sequence of `size` points.
    pub fn to_position(&self, index: usize, size: usize) -> ReadResult<usize> {
        let position = match self {
            IndexBase::Zero => Some(index),
            IndexBase::One => index.checked_sub(1),
        };

        position.filter(|&position| position < size).ok_or(ReadError::IndexOutOfRange { index, size })
    }

    /// Returns a point referenced by given index.
    pub fn resolve(&self, index: usize, points: &[Point]) -> ReadResult<Point> {
        self.to_position(index, points.len()).map(|position| points[position])
    }
}

/// Represents a tour: an ordered sequence of one-based point indices. The cycle is implicit: the
/// last point connects back to the first one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tour {
    indices: Vec<usize>,
}

impl Tour {
    /// Creates a new instance of `Tour`.
    pub fn new(indices: Vec<usize>) -> Self {
        Self { indices }
    }

    /// Returns point indices in visiting order.
    pub fn indices(&self) -> &[usize] {
        self.indices.as_slice()
    }

    /// Returns amount of visited points.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns true if tour has no points.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Returns points in visiting order.
    pub fn resolve(&self, points: &[Point]) -> ReadResult<Vec<Point>> {
        self.indices.iter().map(|&index| IndexBase::One.resolve(index, points)).collect()
    }

    /// Returns points in visiting order with the first point repeated at the end, so the sequence
    /// can be drawn as one closed polyline.
    pub fn closed_path(&self, points: &[Point]) -> ReadResult<Vec<Point>> {
        let mut path = self.resolve(points)?;

        if let Some(&first) = path.first() {
            path.push(first);
        }

        Ok(path)
    }

    /// Checks that every index references a point and no index is visited twice.
    pub fn validate(&self, points: &[Point]) -> ReadResult<()> {
        let mut visited = HashSet::with_capacity(self.indices.len());

        self.indices.iter().try_for_each(|&index| {
            IndexBase::One.to_position(index, points.len())?;

            if visited.insert(index) { Ok(()) } else { Err(ReadError::DuplicateIndex { index }) }
        })
    }

    /// Returns pairs of consecutive indices including the closing pair `(last, first)`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.indices.iter().zip(self.indices.iter().cycle().skip(1)).map(|(&from, &to)| (from, to))
    }
}

/// Represents an edge: a tuple of at least two point indices. Only the first two fields define a
/// connection, the rest is kept as it was written in the file.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    fields: Vec<usize>,
}

impl Edge {
    /// Creates an edge between two points.
    pub fn new(a: usize, b: usize) -> Self {
        Self { fields: vec![a, b] }
    }

    /// Creates an edge from all fields of a line. Returns `None` if there are less than two fields.
    pub fn with_fields(fields: Vec<usize>) -> Option<Self> {
        if fields.len() < 2 { None } else { Some(Self { fields }) }
    }

    /// Returns the first point index.
    pub fn a(&self) -> usize {
        self.fields[0]
    }

    /// Returns the second point index.
    pub fn b(&self) -> usize {
        self.fields[1]
    }

    /// Returns all fields including extra ones.
    pub fn fields(&self) -> &[usize] {
        self.fields.as_slice()
    }

    /// Returns both end points of the edge.
    pub fn resolve(&self, points: &[Point], base: IndexBase) -> ReadResult<(Point, Point)> {
        Ok((base.resolve(self.a(), points)?, base.resolve(self.b(), points)?))
    }
}
