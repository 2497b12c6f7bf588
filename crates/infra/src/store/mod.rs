//! Store contracts for the catalog and cart state.
//!
//! Every ledger operation runs inside one scoped transaction: acquire,
//! perform all reads and writes, commit on success, discard everything on
//! any failure. A rejected operation leaves the store exactly as it was.

use shopcart_cart::{Cart, CartLine};
use shopcart_catalog::Item;
use shopcart_core::{CartId, CartLineId, DomainResult, ItemId};

pub mod in_memory;

/// Operations available inside one transaction scope.
///
/// Reads return owned copies; writes land in the transaction's working set
/// and only become visible when the enclosing [`Store::with_tx`] commits.
pub trait StoreTx {
    fn find_item(&self, id: ItemId) -> Option<Item>;

    /// Insert a new catalog item, enforcing name uniqueness.
    fn insert_item(&mut self, item: Item) -> DomainResult<()>;

    /// Write back an item read earlier in this transaction.
    fn save_item(&mut self, item: Item);

    /// Items in creation order (UUIDv7 ids are time-ordered).
    fn list_items(&self, offset: usize, limit: usize) -> Vec<Item>;

    /// Delete an item from the catalog. Lines referencing it are left in
    /// place; the ledger tolerates and skips them.
    fn delete_item(&mut self, id: ItemId);

    fn find_cart(&self, id: CartId) -> Option<Cart>;

    /// The first cart in creation order, if any. External callers address
    /// only this one.
    fn first_cart(&self) -> Option<Cart>;

    fn create_cart(&mut self, id: CartId) -> Cart;

    /// Delete a cart and, with it, all its lines.
    fn delete_cart(&mut self, id: CartId);

    fn find_line(&self, cart_id: CartId, item_id: ItemId) -> Option<CartLine>;

    /// Lines of one cart in creation order.
    fn lines_in_cart(&self, cart_id: CartId) -> Vec<CartLine>;

    fn save_line(&mut self, line: CartLine);

    fn delete_line(&mut self, id: CartLineId);

    /// Drop all carts, lines, and items (seeding support).
    fn clear(&mut self);
}

/// A transactional backing store.
pub trait Store: Send + Sync {
    /// Run `f` against a transaction scope.
    ///
    /// `Ok` commits every write made through the scope atomically; `Err`
    /// discards them all. Transactions on the same store are serialized, so
    /// two concurrent operations cannot both pass a stock check only one
    /// should pass.
    fn with_tx<T, F>(&self, f: F) -> DomainResult<T>
    where
        F: FnOnce(&mut dyn StoreTx) -> DomainResult<T>;
}

impl<S> Store for std::sync::Arc<S>
where
    S: Store + ?Sized,
{
    fn with_tx<T, F>(&self, f: F) -> DomainResult<T>
    where
        F: FnOnce(&mut dyn StoreTx) -> DomainResult<T>,
    {
        (**self).with_tx(f)
    }
}
