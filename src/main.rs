//! grubdash server binary
//!
//! Reads configuration from the YAML file named by `GRUBDASH_CONFIG` (all
//! sections optional), seeds the stores and serves until Ctrl+C / SIGTERM.

use anyhow::Result;
use grubdash::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load()?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.filter))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let AppConfig { server, seed, .. } = config;
    tracing::info!(
        dishes = seed.dishes.len(),
        orders = seed.orders.len(),
        "seeding stores"
    );

    ServerBuilder::new()
        .register(DishDescriptor::new(InMemoryStore::with_records(seed.dishes)))
        .register(OrderDescriptor::new(InMemoryStore::with_records(seed.orders)))
        .serve(&server.addr())
        .await
}
