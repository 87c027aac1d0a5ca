//! Entity trait - common interface for catalog record types

/// Common trait for all catalog entities
pub trait Entity {
    /// Short human-readable kind (e.g., "PC"), used in log fields
    const KIND: &'static str;

    /// Check that every attribute currently satisfies its domain constraint
    fn rep_ok(&self) -> bool;
}
