use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use shopcart_core::DomainError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    let message = err.to_string();
    match err {
        DomainError::InvalidQuantity(_) => {
            json_error(StatusCode::BAD_REQUEST, "invalid_quantity", message)
        }
        DomainError::OutOfStock { .. } => {
            json_error(StatusCode::BAD_REQUEST, "out_of_stock", message)
        }
        DomainError::ItemNotFound(_)
        | DomainError::CartLineNotFound { .. }
        | DomainError::CartNotFound => json_error(StatusCode::NOT_FOUND, "not_found", message),
        DomainError::DuplicateItemName(_) => {
            json_error(StatusCode::CONFLICT, "duplicate_item_name", message)
        }
        DomainError::Validation(_) => {
            json_error(StatusCode::BAD_REQUEST, "validation_error", message)
        }
        DomainError::InvalidId(_) => json_error(StatusCode::BAD_REQUEST, "invalid_id", message),
        DomainError::Storage(_) => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "storage_error", message)
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
