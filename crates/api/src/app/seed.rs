//! Demo catalog seeding.
//!
//! Replaces the whole store contents, so only for dev/demo use
//! (`SHOPCART_SEED_DEMO=1`).

use chrono::NaiveDate;

use shopcart_catalog::{Item, Price};
use shopcart_core::{DomainError, DomainResult};
use shopcart_infra::CatalogService;

use crate::app::services::SharedStore;

pub fn demo_items() -> DomainResult<Vec<Item>> {
    Ok(vec![
        Item::product(
            "Tortoiseshell Sunglasses",
            "Classic tortoiseshell frame with polarized lenses",
            "https://cdn.example.test/items/sunglasses.jpg",
            Price::from_major(39.99)?,
            10,
            "Wipe with a dry microfiber cloth; keep out of direct heat",
        )?,
        Item::product(
            "Linen Tote Bag",
            "Natural linen tote with leather handles",
            "https://cdn.example.test/items/tote.jpg",
            Price::from_major(24.50)?,
            35,
            "Machine wash cold, line dry",
        )?,
        Item::event(
            "Red Hot Chili Peppers in Madrid",
            "Stadium show, doors at 19:00",
            "https://cdn.example.test/items/rhcp.jpg",
            Price::from_major(60.00)?,
            20,
            date(2024, 12, 31)?,
        )?,
    ])
}

pub fn seed_demo(catalog: &CatalogService<SharedStore>) -> DomainResult<usize> {
    catalog.replace_all(demo_items()?)
}

fn date(year: i32, month: u32, day: u32) -> DomainResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| DomainError::validation(format!("invalid date {year}-{month}-{day}")))
}
