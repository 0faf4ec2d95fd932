//! Contains functionality to read plain edge lists: one edge per line as whitespace separated
//! point indices, no header or footer.

mod reader;
pub use self::reader::*;
