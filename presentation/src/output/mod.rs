//! Output formatting for merge results

pub mod console;
pub mod formatter;
