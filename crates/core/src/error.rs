//! Domain error model.

use thiserror::Error;

use crate::id::{CartId, ItemId};

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant except `Storage` is a deterministic, recoverable-by-caller
/// condition. `Storage` is the opaque wrapper for backing-store failures;
/// the core never retries it.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Requested quantity violates the quantity constraints of the operation.
    #[error("invalid quantity: {0}. Must be a positive integer.")]
    InvalidQuantity(i64),

    /// No catalog item with this id.
    #[error("item with id {0} not found")]
    ItemNotFound(ItemId),

    /// No cart line for (cart, item).
    #[error("no line for item {item_id} in cart {cart_id}")]
    CartLineNotFound { cart_id: CartId, item_id: ItemId },

    /// No such cart (or no cart exists yet at all).
    #[error("cart not found")]
    CartNotFound,

    /// Insufficient stock for the requested delta.
    #[error("item with id {item_id} is out of stock (requested {requested}, available {available})")]
    OutOfStock {
        item_id: ItemId,
        requested: i64,
        available: i64,
    },

    /// Catalog item names are unique.
    #[error("an item named {0:?} already exists")]
    DuplicateItemName(String),

    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// Opaque backing-store failure (lock poisoning, connectivity, ...).
    #[error("storage failure: {0}")]
    Storage(String),
}

impl DomainError {
    pub fn invalid_quantity(quantity: i64) -> Self {
        Self::InvalidQuantity(quantity)
    }

    pub fn item_not_found(item_id: ItemId) -> Self {
        Self::ItemNotFound(item_id)
    }

    pub fn line_not_found(cart_id: CartId, item_id: ItemId) -> Self {
        Self::CartLineNotFound { cart_id, item_id }
    }

    pub fn cart_not_found() -> Self {
        Self::CartNotFound
    }

    pub fn out_of_stock(item_id: ItemId, requested: i64, available: i64) -> Self {
        Self::OutOfStock {
            item_id,
            requested,
            available,
        }
    }

    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateItemName(name.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}
