use std::collections::BTreeMap;
use std::sync::Mutex;

use shopcart_cart::{Cart, CartLine};
use shopcart_catalog::Item;
use shopcart_core::{CartId, CartLineId, DomainError, DomainResult, ItemId};

use super::{Store, StoreTx};

/// Working set of one transaction (and, at rest, the committed state).
#[derive(Debug, Clone, Default)]
struct State {
    items: BTreeMap<ItemId, Item>,
    carts: Vec<Cart>,
    lines: BTreeMap<CartLineId, CartLine>,
}

impl StoreTx for State {
    fn find_item(&self, id: ItemId) -> Option<Item> {
        self.items.get(&id).cloned()
    }

    fn insert_item(&mut self, item: Item) -> DomainResult<()> {
        if self.items.values().any(|i| i.name() == item.name()) {
            return Err(DomainError::duplicate_name(item.name()));
        }
        self.items.insert(item.id_typed(), item);
        Ok(())
    }

    fn save_item(&mut self, item: Item) {
        self.items.insert(item.id_typed(), item);
    }

    fn list_items(&self, offset: usize, limit: usize) -> Vec<Item> {
        self.items.values().skip(offset).take(limit).cloned().collect()
    }

    fn delete_item(&mut self, id: ItemId) {
        self.items.remove(&id);
    }

    fn find_cart(&self, id: CartId) -> Option<Cart> {
        self.carts.iter().find(|c| c.id_typed() == id).copied()
    }

    fn first_cart(&self) -> Option<Cart> {
        self.carts.first().copied()
    }

    fn create_cart(&mut self, id: CartId) -> Cart {
        let cart = Cart::new(id);
        self.carts.push(cart);
        cart
    }

    fn delete_cart(&mut self, id: CartId) {
        self.carts.retain(|c| c.id_typed() != id);
        // Lines are lifecycle-bound to their cart.
        self.lines.retain(|_, line| line.cart_id() != id);
    }

    fn find_line(&self, cart_id: CartId, item_id: ItemId) -> Option<CartLine> {
        self.lines
            .values()
            .find(|line| line.cart_id() == cart_id && line.item_id() == item_id)
            .cloned()
    }

    fn lines_in_cart(&self, cart_id: CartId) -> Vec<CartLine> {
        self.lines
            .values()
            .filter(|line| line.cart_id() == cart_id)
            .cloned()
            .collect()
    }

    fn save_line(&mut self, line: CartLine) {
        self.lines.insert(line.id_typed(), line);
    }

    fn delete_line(&mut self, id: CartLineId) {
        self.lines.remove(&id);
    }

    fn clear(&mut self) {
        self.lines.clear();
        self.carts.clear();
        self.items.clear();
    }
}

/// In-memory transactional store.
///
/// Transactions run against a clone of the committed state and are swapped
/// in wholesale on commit; an error drops the working copy, so no partial
/// mutation is ever observable. The mutex serializes transactions, which is
/// also what prevents lost-update races on the same item.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    inner: Mutex<State>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for InMemoryStore {
    fn with_tx<T, F>(&self, f: F) -> DomainResult<T>
    where
        F: FnOnce(&mut dyn StoreTx) -> DomainResult<T>,
    {
        let mut committed = self
            .inner
            .lock()
            .map_err(|_| DomainError::storage("store mutex poisoned"))?;

        let mut working = committed.clone();
        let out = f(&mut working)?;
        *committed = working;
        Ok(out)
    }
}
