//! Spatial data structures for the intensity field

/// Square intensity field and border predicate
pub mod field;

pub use field::Field;
