//! This crate contains logic to read TSP instances and candidate tours stored in plain text files,
//! so they can be rendered or analyzed by other tools.
//!
//!
//! # Supported formats
//!
//! - **tsplib**: a subset of TSPLIB95 format: `NODE_COORD_SECTION` of an instance file and
//!   `TOUR_SECTION` of a tour file
//! - **edges**: a plain list of point index tuples, one edge per line, without any header
//!
//! # Index conventions
//!
//! Indices are kept exactly as they are written in the file. Tours follow TSPLIB and are one-based,
//! edge lists written by the merge tooling are zero-based. Resolving indices into points is always
//! explicit, see [`IndexBase`](crate::common::IndexBase).

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
pub(crate) mod helpers;

pub mod common;
pub mod edges;
pub mod tsplib;

/// Reexports commonly used types and functions.
pub mod prelude {
    pub use crate::common::{
        Edge, IndexBase, Point, ReadError, ReadResult, Tour, cycle_path, edges_length, euclidean_distance,
        tour_edge_diff, tour_length,
    };
    pub use crate::edges::{EdgeListProblem, read_edge_file};
    pub use crate::tsplib::{TsplibPoints, TsplibTour, read_point_file, read_tour_file};
}
