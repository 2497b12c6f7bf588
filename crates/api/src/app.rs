use std::sync::Arc;

use axum::{extract::Extension, Router};
use tower::ServiceBuilder;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod seed;
pub mod services;

use services::AppServices;

/// Build the full application router.
pub fn build_app(services: Arc<AppServices>) -> Router {
    Router::new()
        .nest("/cart", routes::cart::router())
        .nest("/items", routes::items::router())
        .merge(routes::system::router())
        .layer(ServiceBuilder::new().layer(Extension(services)))
}
