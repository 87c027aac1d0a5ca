//! Command implementations

pub mod completions;
pub mod interactive;
pub mod report;
