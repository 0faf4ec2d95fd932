//! Contains common models, errors and text reading functionality.

mod error;
pub use self::error::*;

mod models;
pub use self::models::*;

mod routing;
pub use self::routing::*;

mod text_reader;
pub(crate) use self::text_reader::*;
