//! `gildedrose-core` — shared building blocks for the inventory crates.
//!
//! This crate contains **pure domain** primitives (no IO).

pub mod error;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use value_object::ValueObject;
