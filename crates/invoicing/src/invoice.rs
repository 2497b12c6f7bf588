use serde::Serialize;

use shopcart_cart::CartLine;
use shopcart_catalog::Item;
use shopcart_core::{CartId, CartLineId, ItemId};

/// One invoice line: the cart line joined with its item and priced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceLine {
    pub id: CartLineId,
    pub cart_id: CartId,
    pub item_id: ItemId,
    pub quantity: i64,
    pub item: Item,
    /// Major-unit subtotal: `quantity * price`. Exact, because prices are
    /// kept in minor units until this conversion.
    pub subtotal: f64,
}

/// Priced view of a cart: lines plus cart-level totals.
///
/// The empty cart is an explicit value (`items=[]`, zero totals), never an
/// absence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartInvoice {
    pub items: Vec<InvoiceLine>,
    pub total_quantity: i64,
    pub total_price: f64,
}

impl InvoiceLine {
    /// Price one cart line against its item.
    pub fn priced(line: &CartLine, item: &Item) -> Self {
        let subtotal_cents = line.quantity() as u64 * item.price().cents();
        Self {
            id: line.id_typed(),
            cart_id: line.cart_id(),
            item_id: line.item_id(),
            quantity: line.quantity(),
            item: item.clone(),
            subtotal: subtotal_cents as f64 / 100.0,
        }
    }
}

impl CartInvoice {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_quantity: 0,
            total_price: 0.0,
        }
    }
}

/// Price a cart from its lines joined with their items.
pub fn invoice_for(entries: &[(CartLine, Item)]) -> CartInvoice {
    let mut items = Vec::with_capacity(entries.len());
    let mut total_quantity: i64 = 0;
    let mut total_cents: u64 = 0;

    for (line, item) in entries {
        total_quantity += line.quantity();
        total_cents += line.quantity() as u64 * item.price().cents();
        items.push(InvoiceLine::priced(line, item));
    }

    CartInvoice {
        items,
        total_quantity,
        total_price: total_cents as f64 / 100.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopcart_catalog::Price;

    fn sunglasses() -> Item {
        Item::product(
            "Tortoiseshell Sunglasses",
            "Classic tortoiseshell frame",
            "https://example.test/sunglasses.jpg",
            Price::from_major(39.99).unwrap(),
            10,
            "Wipe with a dry cloth",
        )
        .unwrap()
    }

    fn concert() -> Item {
        Item::event(
            "Red Hot Chili Peppers in Madrid",
            "Stadium show",
            "https://example.test/rhcp.jpg",
            Price::from_major(60.00).unwrap(),
            20,
            chrono_date(),
        )
        .unwrap()
    }

    fn chrono_date() -> chrono::NaiveDate {
        chrono::NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
    }

    #[test]
    fn empty_input_gives_explicit_empty_invoice() {
        let invoice = invoice_for(&[]);
        assert_eq!(invoice, CartInvoice::empty());
        assert!(invoice.items.is_empty());
        assert_eq!(invoice.total_quantity, 0);
        assert_eq!(invoice.total_price, 0.0);
    }

    #[test]
    fn two_line_invoice_matches_pinned_totals() {
        let a = sunglasses();
        let b = concert();
        let cart_id = shopcart_core::CartId::new();
        let entries = vec![
            (CartLine::new(cart_id, a.id_typed(), 3), a),
            (CartLine::new(cart_id, b.id_typed(), 1), b),
        ];

        let invoice = invoice_for(&entries);

        assert_eq!(invoice.items[0].subtotal, 119.97);
        assert_eq!(invoice.items[1].subtotal, 60.00);
        assert_eq!(invoice.total_quantity, 4);
        assert_eq!(invoice.total_price, 179.97);
    }

    #[test]
    fn invoice_line_serializes_with_item_payload() {
        let item = sunglasses();
        let cart_id = shopcart_core::CartId::new();
        let invoice = invoice_for(&[(CartLine::new(cart_id, item.id_typed(), 2), item)]);

        let json = serde_json::to_value(&invoice).unwrap();
        assert_eq!(json["total_quantity"], 2);
        assert_eq!(json["items"][0]["subtotal"], 79.98);
        assert_eq!(json["items"][0]["item"]["type"], "PRODUCT");
    }
}
