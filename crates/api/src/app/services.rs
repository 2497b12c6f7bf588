use std::sync::Arc;

use shopcart_infra::{CartService, CatalogService, InMemoryStore};

pub type SharedStore = Arc<InMemoryStore>;

/// Service handles shared by all request handlers.
///
/// Both services run against the same store, so cart and catalog mutations
/// are serialized through one transaction boundary.
#[derive(Clone)]
pub struct AppServices {
    pub cart: CartService<SharedStore>,
    pub catalog: CatalogService<SharedStore>,
}

impl AppServices {
    pub fn in_memory() -> Self {
        let store: SharedStore = Arc::new(InMemoryStore::new());
        Self {
            cart: CartService::new(store.clone()),
            catalog: CatalogService::new(store),
        }
    }
}
