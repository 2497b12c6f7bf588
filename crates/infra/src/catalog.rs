//! Catalog management: creating and looking up sellable items.
//!
//! CRUD glue around the store; the stock-mutating rules live in
//! [`crate::ledger`].

use shopcart_catalog::Item;
use shopcart_core::{DomainError, DomainResult, ItemId};

use crate::store::Store;

pub const DEFAULT_LIST_LIMIT: usize = 100;

#[derive(Debug, Clone)]
pub struct CatalogService<S> {
    store: S,
}

impl<S: Store> CatalogService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Insert a new item. Names are unique across the catalog.
    pub fn insert(&self, item: Item) -> DomainResult<Item> {
        self.store.with_tx(move |tx| {
            tx.insert_item(item.clone())?;
            Ok(item)
        })
    }

    pub fn get(&self, id: ItemId) -> DomainResult<Item> {
        self.store
            .with_tx(|tx| tx.find_item(id).ok_or(DomainError::ItemNotFound(id)))
    }

    /// Items in creation order.
    pub fn list(&self, offset: usize, limit: usize) -> DomainResult<Vec<Item>> {
        self.store.with_tx(|tx| Ok(tx.list_items(offset, limit)))
    }

    /// Reset the store to exactly `items`: drops all carts, lines, and
    /// items first, then inserts. Used by demo seeding.
    pub fn replace_all(&self, items: Vec<Item>) -> DomainResult<usize> {
        self.store.with_tx(|tx| {
            tx.clear();
            let count = items.len();
            for item in items {
                tx.insert_item(item)?;
            }
            Ok(count)
        })
    }
}
