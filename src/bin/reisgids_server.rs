// Research guide server entry point
//
// Usage: cargo run --bin reisgids_server
// Configuration: see `reisgids::config` (PORT, BIND_ADDR, PAGE_CACHE_*)

use reisgids::{create_router, registry, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    reisgids::init_tracing();

    tracing::info!("Starting research guide server...");

    let config = Config::from_env();
    config.log_summary();

    let steps = registry::global().clone();
    tracing::info!("Loaded {} steps", steps.len());

    let state = AppState::new(steps, &config);
    let app = create_router(state);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
