//! Service entrypoint for the Rate Resolution Engine.

use std::net::SocketAddr;

use tracing::{info, warn};

use rate_engine::api::{AppState, create_router};
use rate_engine::seed::load_seed_rates;
use rate_engine::store::RateStore;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt::init();

    let store = RateStore::new();

    // Seed the initial rate set through the same validation path as
    // PUT /rates; a missing or invalid seed file is not fatal.
    let seed_path =
        std::env::var("RATE_ENGINE_SEED").unwrap_or_else(|_| "./rates.json".to_string());
    let seeded = load_seed_rates(&seed_path).and_then(|rates| {
        let count = rates.len();
        store.replace_all(&rates)?;
        Ok(count)
    });
    match seeded {
        Ok(count) => {
            info!(path = %seed_path, rates_count = count, "Seeded initial rate set");
        }
        Err(error) => {
            warn!(path = %seed_path, error = %error, "Starting with an empty rate set");
        }
    }

    let router = create_router(AppState::new(store));

    let port = std::env::var("RATE_ENGINE_PORT")
        .ok()
        .and_then(|port| port.parse().ok())
        .unwrap_or(8000u16);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Rate engine listening");

    axum::serve(listener, router).await
}
