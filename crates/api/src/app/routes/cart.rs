//! Cart routes.
//!
//! All routes address the sole implicit cart; `add_item` creates it lazily
//! on first use.

use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};

use shopcart_cart::CartLine;
use shopcart_core::ItemId;
use shopcart_infra::UpdateOutcome;
use shopcart_invoicing::InvoiceLine;

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(get_cart))
        .route("/invoice", get(get_invoice))
        .route("/items", post(add_item))
        .route("/items/:item_id", put(update_item).delete(remove_item))
}

pub async fn add_item(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::AddCartItemRequest>,
) -> axum::response::Response {
    tracing::info!(item_id = %body.item_id, quantity = body.quantity, "adding item to cart");

    let line = match services.cart.add_item(None, body.item_id, body.quantity) {
        Ok(line) => line,
        Err(e) => {
            tracing::warn!(error = %e, "add to cart rejected");
            return errors::domain_error_to_response(e);
        }
    };

    priced_line_response(&services, line)
}

pub async fn update_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(item_id): Path<String>,
    Json(body): Json<dto::UpdateCartItemRequest>,
) -> axum::response::Response {
    let item_id: ItemId = match item_id.parse() {
        Ok(id) => id,
        Err(e) => return errors::domain_error_to_response(e),
    };
    tracing::info!(%item_id, quantity = body.quantity, "updating cart line");

    match services.cart.update_item(None, item_id, body.quantity) {
        Ok(UpdateOutcome::Updated(line)) => priced_line_response(&services, line),
        Ok(UpdateOutcome::Removed) => (
            StatusCode::OK,
            Json(serde_json::json!({ "message": "Item removed from cart" })),
        )
            .into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "cart line update rejected");
            errors::domain_error_to_response(e)
        }
    }
}

pub async fn remove_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(item_id): Path<String>,
) -> axum::response::Response {
    let item_id: ItemId = match item_id.parse() {
        Ok(id) => id,
        Err(e) => return errors::domain_error_to_response(e),
    };
    tracing::info!(%item_id, "removing cart line");

    match services.cart.remove_item(None, item_id) {
        Ok(()) => (
            StatusCode::OK,
            Json(serde_json::json!({ "detail": "Item removed from cart successfully." })),
        )
            .into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "cart line removal rejected");
            errors::domain_error_to_response(e)
        }
    }
}

pub async fn get_cart(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    tracing::info!("fetching cart view");
    match services.cart.cart_view(None) {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_invoice(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    tracing::info!("generating cart invoice");
    match services.cart.invoice(None) {
        Ok(invoice) => (StatusCode::OK, Json(invoice)).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "invoice generation failed");
            errors::domain_error_to_response(e)
        }
    }
}

/// Join a line with its item and respond with the priced line.
fn priced_line_response(services: &AppServices, line: CartLine) -> axum::response::Response {
    match services.catalog.get(line.item_id()) {
        Ok(item) => (StatusCode::OK, Json(InvoiceLine::priced(&line, &item))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
