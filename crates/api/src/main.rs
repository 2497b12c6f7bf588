use std::sync::Arc;

use anyhow::Context;

use shopcart_api::app::{self, seed, services::AppServices};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    shopcart_observability::init();

    let services = Arc::new(AppServices::in_memory());

    if std::env::var("SHOPCART_SEED_DEMO").is_ok_and(|v| v == "1") {
        let count = seed::seed_demo(&services.catalog).context("demo seeding failed")?;
        tracing::info!(items = count, "seeded demo catalog");
    }

    let addr = std::env::var("SHOPCART_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let app = app::build_app(services);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
