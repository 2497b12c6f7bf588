//! Cart domain module.
//!
//! A [`Cart`] is little more than an identity; its lines live alongside it in
//! the store and are lifecycle-bound to it (deleting a cart deletes its
//! lines). [`CartLine`] carries the actual quantities.

pub mod cart;

pub use cart::{Cart, CartLine};
