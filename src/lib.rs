//! pccat: PC Catalog
//!
//! Records personal computers with validated attributes, keeps them in a
//! duplicate-free collection, and renders a fixed-width tabular report.

pub mod cli;
pub mod core;
pub mod entities;
pub mod logging;
pub mod report;
