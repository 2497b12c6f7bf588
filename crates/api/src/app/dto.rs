//! Request payloads.

use chrono::NaiveDate;
use serde::Deserialize;

use shopcart_core::ItemId;

#[derive(Debug, Deserialize)]
pub struct AddCartItemRequest {
    pub item_id: ItemId,
    pub quantity: i64,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCartItemRequest {
    pub quantity: i64,
}

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub description: String,
    pub thumbnail: String,
    /// Major-unit decimal, e.g. `39.99`.
    pub price: f64,
    pub stock: i64,
    pub care_instructions: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateEventRequest {
    pub name: String,
    pub description: String,
    pub thumbnail: String,
    pub price: f64,
    pub stock: i64,
    pub event_date: NaiveDate,
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub offset: usize,
    pub limit: Option<usize>,
}
