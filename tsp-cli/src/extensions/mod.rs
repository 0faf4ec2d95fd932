//! Module provides various helper functionality.

pub mod config;
pub mod plot;
pub mod render;
