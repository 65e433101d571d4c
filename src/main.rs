use bounded_catalog::catalog::generator::generate_products;
use bounded_catalog::catalog::store::ProductStore;
use bounded_catalog::config::ServerConfig;
use bounded_catalog::search::engine::BoundedSearch;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::from_env()?;

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    // 1. Catalog bulk load:
    let catalog_size = config.catalog_size;
    let store = tokio::task::spawn_blocking(move || {
        let store = ProductStore::with_capacity(catalog_size as usize);
        generate_products(&store, catalog_size);
        store
    })
    .await?;

    if store.count() <= 100 {
        tracing::warn!(
            "Catalog holds only {} products; every search will scan the whole catalog",
            store.count()
        );
    }

    // 2. Search engine:
    let engine = Arc::new(BoundedSearch::new(Arc::new(store)));

    // 3. HTTP Router:
    let app = bounded_catalog::router(engine);

    // 4. Start HTTP server:
    tracing::info!("Server starting on {}", config.bind_addr);
    tracing::info!("Endpoints:");
    tracing::info!("  GET /search?q=<query> - Search products (checks 100 products)");
    tracing::info!("  GET /stats - Get server statistics");

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
