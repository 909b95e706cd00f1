//! Output formatting for tool results and the catalog

pub mod console;
pub mod formatter;
