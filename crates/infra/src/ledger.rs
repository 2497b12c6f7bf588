//! Inventory ledger: the operations that mutate cart lines and item stock
//! together.
//!
//! Conservation law: for every item,
//! `stock_current = stock_original - sum(quantity of all lines referencing
//! it)`. Each operation here runs in one store transaction and either
//! preserves that equation or has no effect at all.

use shopcart_cart::{Cart, CartLine};
use shopcart_catalog::Item;
use shopcart_core::{CartId, DomainError, DomainResult, ItemId};
use shopcart_invoicing::{invoice_for, CartInvoice};

use crate::store::{Store, StoreTx};

/// Result of an update: the surviving line, or a tombstone when the update
/// took the quantity to zero and the line was deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    Updated(CartLine),
    Removed,
}

/// Cart/inventory service over a transactional store.
///
/// `cart_id` is optional on every operation: `None` addresses the sole
/// externally-visible cart (the first one, created lazily by `add_item`).
#[derive(Debug, Clone)]
pub struct CartService<S> {
    store: S,
}

impl<S: Store> CartService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Add `quantity` units of an item to the cart.
    ///
    /// Creates the cart if it does not exist yet, merges into an existing
    /// line for the same item, and takes the quantity out of stock. Returns
    /// the resulting line with its full quantity.
    pub fn add_item(
        &self,
        cart_id: Option<CartId>,
        item_id: ItemId,
        quantity: i64,
    ) -> DomainResult<CartLine> {
        if quantity <= 0 {
            return Err(DomainError::invalid_quantity(quantity));
        }

        self.store.with_tx(|tx| {
            let mut item = tx
                .find_item(item_id)
                .ok_or(DomainError::ItemNotFound(item_id))?;
            item.reserve(quantity)?;

            let cart = match existing_cart(tx, cart_id) {
                Some(cart) => cart,
                None => tx.create_cart(cart_id.unwrap_or_else(CartId::new)),
            };

            let line = match tx.find_line(cart.id_typed(), item_id) {
                Some(mut line) => {
                    line.add(quantity);
                    line
                }
                None => CartLine::new(cart.id_typed(), item_id, quantity),
            };

            tx.save_line(line.clone());
            tx.save_item(item);
            Ok(line)
        })
    }

    /// Set a line's quantity to `quantity`, adjusting stock by the delta.
    ///
    /// `quantity == 0` restores the line's full quantity to stock and
    /// deletes the line ([`UpdateOutcome::Removed`], not an error).
    pub fn update_item(
        &self,
        cart_id: Option<CartId>,
        item_id: ItemId,
        quantity: i64,
    ) -> DomainResult<UpdateOutcome> {
        if quantity < 0 {
            return Err(DomainError::invalid_quantity(quantity));
        }

        self.store.with_tx(|tx| {
            let cart = require_cart(tx, cart_id)?;
            let mut line = tx
                .find_line(cart.id_typed(), item_id)
                .ok_or_else(|| DomainError::line_not_found(cart.id_typed(), item_id))?;
            // Defensive: referential integrity should make this unreachable.
            let mut item = tx
                .find_item(item_id)
                .ok_or(DomainError::ItemNotFound(item_id))?;

            if quantity == 0 {
                item.release(line.quantity());
                tx.save_item(item);
                tx.delete_line(line.id_typed());
                return Ok(UpdateOutcome::Removed);
            }

            let delta = quantity - line.quantity();
            if delta > 0 {
                item.reserve(delta)?;
            } else {
                item.release(-delta);
            }
            line.set_quantity(quantity);

            tx.save_item(item);
            tx.save_line(line.clone());
            Ok(UpdateOutcome::Updated(line))
        })
    }

    /// Remove a line, restoring its quantity to stock.
    ///
    /// A vanished item skips the restock but never fails the removal.
    pub fn remove_item(&self, cart_id: Option<CartId>, item_id: ItemId) -> DomainResult<()> {
        self.store.with_tx(|tx| {
            let cart = require_cart(tx, cart_id)?;
            let line = tx
                .find_line(cart.id_typed(), item_id)
                .ok_or_else(|| DomainError::line_not_found(cart.id_typed(), item_id))?;

            match tx.find_item(item_id) {
                Some(mut item) => {
                    item.release(line.quantity());
                    tx.save_item(item);
                }
                None => {
                    tracing::warn!(%item_id, "removing line whose item no longer exists");
                }
            }

            tx.delete_line(line.id_typed());
            Ok(())
        })
    }

    /// Priced view of the cart. A missing cart yields the empty view, never
    /// an error (first-use convenience).
    pub fn cart_view(&self, cart_id: Option<CartId>) -> DomainResult<CartInvoice> {
        self.store.with_tx(|tx| {
            let Some(cart) = existing_cart(tx, cart_id) else {
                return Ok(CartInvoice::empty());
            };
            Ok(invoice_for(&joined_lines(tx, &cart)))
        })
    }

    /// Invoice for the cart. Unlike [`CartService::cart_view`], a missing
    /// cart is an error here; the asymmetry is inherited behavior, kept
    /// deliberately.
    pub fn invoice(&self, cart_id: Option<CartId>) -> DomainResult<CartInvoice> {
        self.store.with_tx(|tx| {
            let cart = require_cart(tx, cart_id)?;
            Ok(invoice_for(&joined_lines(tx, &cart)))
        })
    }
}

fn existing_cart(tx: &dyn StoreTx, cart_id: Option<CartId>) -> Option<Cart> {
    match cart_id {
        Some(id) => tx.find_cart(id),
        None => tx.first_cart(),
    }
}

fn require_cart(tx: &dyn StoreTx, cart_id: Option<CartId>) -> DomainResult<Cart> {
    existing_cart(tx, cart_id).ok_or_else(DomainError::cart_not_found)
}

fn joined_lines(tx: &dyn StoreTx, cart: &Cart) -> Vec<(CartLine, Item)> {
    tx.lines_in_cart(cart.id_typed())
        .into_iter()
        .filter_map(|line| match tx.find_item(line.item_id()) {
            Some(item) => Some((line, item)),
            None => {
                tracing::warn!(line_id = %line.id_typed(), "cart line has no item; skipping");
                None
            }
        })
        .collect()
}
