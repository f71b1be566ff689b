use tracing::info;

use catalog_service::{
    build_router,
    catalog::Catalog,
    config::{Config, StoreKind},
    logging,
    store::{FileStore, MemoryStore},
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    logging::init_server();

    let config = Config::from_env()?;

    let catalog = match config.store {
        StoreKind::Memory => {
            info!("Using in-memory product store");
            Catalog::new(MemoryStore::new())
        }
        StoreKind::File => {
            info!(path = %config.catalog_file.display(), "Using file product store");
            Catalog::new(FileStore::new(&config.catalog_file)?)
        }
    };

    let app = build_router(AppState::new(catalog));

    let addr = format!("{}:{}", config.host, config.port);
    info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
