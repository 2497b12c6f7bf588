use serde::{Deserialize, Serialize};

use shopcart_core::{CartId, CartLineId, Entity, ItemId};

/// Cart aggregate root.
///
/// Externally only one cart is ever addressed (created lazily on first add),
/// but the model deliberately supports many.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    id: CartId,
}

impl Cart {
    pub fn new(id: CartId) -> Self {
        Self { id }
    }

    pub fn id_typed(&self) -> CartId {
        self.id
    }
}

impl Entity for Cart {
    type Id = CartId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// One line of a cart: a reference to an item plus a quantity.
///
/// Invariant: `quantity > 0`. A line that would reach zero is deleted by the
/// ledger instead, so a zero-quantity line is never observable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    id: CartLineId,
    cart_id: CartId,
    item_id: ItemId,
    quantity: i64,
}

impl CartLine {
    /// Create a fresh line. The caller guarantees `quantity > 0`.
    pub fn new(cart_id: CartId, item_id: ItemId, quantity: i64) -> Self {
        debug_assert!(quantity > 0);
        Self {
            id: CartLineId::new(),
            cart_id,
            item_id,
            quantity,
        }
    }

    pub fn id_typed(&self) -> CartLineId {
        self.id
    }

    pub fn cart_id(&self) -> CartId {
        self.cart_id
    }

    pub fn item_id(&self) -> ItemId {
        self.item_id
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Increment the quantity (repeat add of the same item).
    pub fn add(&mut self, quantity: i64) {
        debug_assert!(quantity > 0);
        self.quantity += quantity;
    }

    /// Replace the quantity. The caller guarantees `quantity > 0`.
    pub fn set_quantity(&mut self, quantity: i64) {
        debug_assert!(quantity > 0);
        self.quantity = quantity;
    }
}

impl Entity for CartLine {
    type Id = CartLineId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_accumulates_quantity() {
        let mut line = CartLine::new(CartId::new(), ItemId::new(), 3);
        line.add(2);
        assert_eq!(line.quantity(), 5);
    }

    #[test]
    fn set_quantity_replaces_quantity() {
        let mut line = CartLine::new(CartId::new(), ItemId::new(), 5);
        line.set_quantity(2);
        assert_eq!(line.quantity(), 2);
    }
}
