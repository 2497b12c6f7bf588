//! Catalog management routes.

use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use shopcart_catalog::{Item, Price};
use shopcart_core::{DomainResult, ItemId};
use shopcart_infra::catalog::DEFAULT_LIST_LIMIT;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_items))
        .route("/products", post(create_product))
        .route("/events", post(create_event))
        .route("/:id", get(get_item))
}

pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateProductRequest>,
) -> axum::response::Response {
    tracing::info!(name = %body.name, "creating product");

    let item = match product_from_request(body) {
        Ok(item) => item,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.catalog.insert(item) {
        Ok(item) => (StatusCode::CREATED, Json(item)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn create_event(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateEventRequest>,
) -> axum::response::Response {
    tracing::info!(name = %body.name, "creating event");

    let item = match event_from_request(body) {
        Ok(item) => item,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.catalog.insert(item) {
        Ok(item) => (StatusCode::CREATED, Json(item)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn list_items(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::ListQuery>,
) -> axum::response::Response {
    let limit = query.limit.unwrap_or(DEFAULT_LIST_LIMIT);
    match services.catalog.list(query.offset, limit) {
        Ok(items) => (StatusCode::OK, Json(items)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ItemId = match id.parse() {
        Ok(id) => id,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.catalog.get(id) {
        Ok(item) => (StatusCode::OK, Json(item)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

fn product_from_request(body: dto::CreateProductRequest) -> DomainResult<Item> {
    Item::product(
        body.name,
        body.description,
        body.thumbnail,
        Price::from_major(body.price)?,
        body.stock,
        body.care_instructions,
    )
}

fn event_from_request(body: dto::CreateEventRequest) -> DomainResult<Item> {
    Item::event(
        body.name,
        body.description,
        body.thumbnail,
        Price::from_major(body.price)?,
        body.stock,
        body.event_date,
    )
}
