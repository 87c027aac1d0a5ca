//! Entity type definitions
//!
//! - [`Pc`] - A personal computer with model, year, manufacturer and components

pub mod pc;

pub use pc::{InvalidRecordError, Pc, RecordField};
