//! Contains functionality to read a subset of TSPLIB95 format: point coordinates of an instance file
//! and a visiting order of a tour file.

mod points;
pub use self::points::*;

mod tour;
pub use self::tour::*;

/// A marker line of the coordinate section.
pub const NODE_COORD_SECTION: &str = "NODE_COORD_SECTION";
/// A marker line of the tour section.
pub const TOUR_SECTION: &str = "TOUR_SECTION";
/// An end of file marker.
pub const EOF: &str = "EOF";
/// A tour terminator.
pub const TOUR_TERMINATOR: &str = "-1";

/// Checks whether the line starts a coordinate section.
pub fn is_coord_section_marker(line: &str) -> bool {
    line.contains(NODE_COORD_SECTION)
}

/// Checks whether the line ends a coordinate section.
pub fn is_coord_section_end(line: &str) -> bool {
    line.trim().is_empty() || line.contains(EOF)
}

/// Checks whether the line starts a tour section.
pub fn is_tour_section_marker(line: &str) -> bool {
    line.contains(TOUR_SECTION)
}

/// Checks whether the line ends a tour section.
pub fn is_tour_section_end(line: &str) -> bool {
    is_coord_section_end(line) || line.split_whitespace().any(|field| field == TOUR_TERMINATOR)
}
