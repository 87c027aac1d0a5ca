//! Core module - fundamental types and utilities

pub mod catalog;
pub mod config;
pub mod entity;
pub mod factory;
pub mod set;

pub use catalog::Catalog;
pub use config::Config;
pub use entity::Entity;
pub use factory::PcFactory;
pub use set::{EmptyCollectionError, UniqueCollection};
