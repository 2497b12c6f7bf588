//! Catalog domain module.
//!
//! This crate contains business rules for sellable items, implemented purely
//! as deterministic domain logic (no IO, no HTTP, no storage).

pub mod item;
pub mod price;

pub use item::{Item, ItemKind};
pub use price::Price;
