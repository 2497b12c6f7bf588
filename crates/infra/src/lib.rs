//! `shopcart-infra` — store contracts and the services built on them.
//!
//! The domain crates stay pure; everything that touches shared mutable state
//! lives here, behind the [`store::Store`] transaction boundary.

pub mod catalog;
pub mod ledger;
pub mod store;


pub use catalog::CatalogService;
pub use ledger::{CartService, UpdateOutcome};
pub use store::{in_memory::InMemoryStore, Store, StoreTx};
