//! `shopcart-api` — HTTP surface for the cart and catalog services.

pub mod app;
