use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use shopcart_core::{DomainError, DomainResult, Entity, ItemId};

use crate::price::Price;

/// Variant payload of a catalog item.
///
/// The inventory rules below only ever touch the common fields (price,
/// stock); the variant data is opaque to them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemKind {
    /// Physical product.
    Product { care_instructions: String },
    /// Dated event (tickets).
    Event { event_date: NaiveDate },
}

/// Catalog item: a sellable product or event.
///
/// Invariant: `stock >= 0` at rest. All stock mutation goes through
/// [`Item::reserve`] and [`Item::release`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    name: String,
    description: String,
    thumbnail: String,
    price: Price,
    stock: i64,
    #[serde(flatten)]
    kind: ItemKind,
}

impl Item {
    /// Create a product item.
    pub fn product(
        name: impl Into<String>,
        description: impl Into<String>,
        thumbnail: impl Into<String>,
        price: Price,
        stock: i64,
        care_instructions: impl Into<String>,
    ) -> DomainResult<Self> {
        Self::new(
            name,
            description,
            thumbnail,
            price,
            stock,
            ItemKind::Product {
                care_instructions: care_instructions.into(),
            },
        )
    }

    /// Create an event item.
    pub fn event(
        name: impl Into<String>,
        description: impl Into<String>,
        thumbnail: impl Into<String>,
        price: Price,
        stock: i64,
        event_date: NaiveDate,
    ) -> DomainResult<Self> {
        Self::new(
            name,
            description,
            thumbnail,
            price,
            stock,
            ItemKind::Event { event_date },
        )
    }

    fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        thumbnail: impl Into<String>,
        price: Price,
        stock: i64,
        kind: ItemKind,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if stock < 0 {
            return Err(DomainError::validation(format!(
                "stock cannot be negative, got {stock}"
            )));
        }
        Ok(Self {
            id: ItemId::new(),
            name,
            description: description.into(),
            thumbnail: thumbnail.into(),
            price,
            stock,
            kind,
        })
    }

    pub fn id_typed(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn thumbnail(&self) -> &str {
        &self.thumbnail
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn stock(&self) -> i64 {
        self.stock
    }

    pub fn kind(&self) -> &ItemKind {
        &self.kind
    }

    /// Take `quantity` units out of stock.
    ///
    /// Fails with `OutOfStock` when fewer than `quantity` units are
    /// available; the item is left untouched in that case.
    pub fn reserve(&mut self, quantity: i64) -> DomainResult<()> {
        debug_assert!(quantity >= 0);
        if quantity > self.stock {
            return Err(DomainError::out_of_stock(self.id, quantity, self.stock));
        }
        self.stock -= quantity;
        Ok(())
    }

    /// Return `quantity` units to stock.
    pub fn release(&mut self, quantity: i64) {
        debug_assert!(quantity >= 0);
        self.stock += quantity;
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn test_product(stock: i64) -> Item {
        Item::product(
            "Tortoiseshell Sunglasses",
            "Classic tortoiseshell frame",
            "https://example.test/sunglasses.jpg",
            Price::from_cents(3999),
            stock,
            "Wipe with a dry cloth",
        )
        .unwrap()
    }

    #[test]
    fn reserve_decrements_stock() {
        let mut item = test_product(10);
        item.reserve(3).unwrap();
        assert_eq!(item.stock(), 7);
    }

    #[test]
    fn reserve_beyond_stock_is_rejected_without_mutation() {
        let mut item = test_product(5);
        let err = item.reserve(6).unwrap_err();
        match err {
            DomainError::OutOfStock {
                requested,
                available,
                ..
            } => {
                assert_eq!(requested, 6);
                assert_eq!(available, 5);
            }
            other => panic!("expected OutOfStock, got {other:?}"),
        }
        assert_eq!(item.stock(), 5);
    }

    #[test]
    fn release_restores_stock() {
        let mut item = test_product(10);
        item.reserve(4).unwrap();
        item.release(4);
        assert_eq!(item.stock(), 10);
    }

    #[test]
    fn blank_name_is_rejected() {
        let result = Item::product(
            "   ",
            "desc",
            "thumb",
            Price::ZERO,
            0,
            "none",
        );
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn negative_stock_is_rejected() {
        let result = Item::event(
            "Concert",
            "desc",
            "thumb",
            Price::ZERO,
            -1,
            NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
        );
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn item_json_carries_variant_tag_and_payload() {
        let item = Item::event(
            "Red Hot Chili Peppers in Madrid",
            "Stadium show",
            "https://example.test/rhcp.jpg",
            Price::from_cents(6000),
            20,
            NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
        )
        .unwrap();

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "EVENT");
        assert_eq!(json["event_date"], "2024-12-31");
        assert_eq!(json["price"], 60.0);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: any sequence of successful reserves/releases keeps
        /// stock non-negative, and a failed reserve changes nothing.
        #[test]
        fn stock_never_goes_negative(
            initial in 0i64..1_000,
            deltas in prop::collection::vec(-50i64..50, 0..32)
        ) {
            let mut item = test_product(initial);
            for delta in deltas {
                let before = item.stock();
                if delta >= 0 {
                    match item.reserve(delta) {
                        Ok(()) => prop_assert_eq!(item.stock(), before - delta),
                        Err(_) => prop_assert_eq!(item.stock(), before),
                    }
                } else {
                    item.release(-delta);
                    prop_assert_eq!(item.stock(), before - delta);
                }
                prop_assert!(item.stock() >= 0);
            }
        }
    }
}
