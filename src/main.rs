use std::sync::Arc;

use message_timeline::config::{AppConfig, StoreBackendKind};
use message_timeline::message_store::{MemoryBackend, PostgresBackend, SortedSetBackend};
use message_timeline::routes::configure_routes;
use message_timeline::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let env = env_logger::Env::default().default_filter_or("info");
    env_logger::init_from_env(env);

    let config = AppConfig::from_env()?;

    let backend: Arc<dyn SortedSetBackend> = match config.backend {
        StoreBackendKind::Postgres => {
            log::info!(
                "Connecting to PostgreSQL at {}:{}/{}",
                config.store.host,
                config.store.port,
                config.store.database
            );
            let backend = PostgresBackend::new(config.store.clone())?;
            if let Err(e) = backend.ensure_schema().await {
                log::warn!("Database not ready, requests will fail until it is: {}", e);
            }
            Arc::new(backend)
        }
        StoreBackendKind::Memory => {
            log::warn!("Using the in-memory store; messages are lost on exit");
            Arc::new(MemoryBackend::new())
        }
    };

    let state = AppState::new(backend, config.partition)
        .with_range_policy(config.range_policy)
        .with_unavailable_detail(config.unavailable_detail.clone());

    match state.store().count().await {
        Ok(count) => log::info!(
            "Partition {} on {} holds {} messages",
            state.partition(),
            state.backend_name(),
            count
        ),
        Err(e) => log::warn!("Could not count messages at startup: {}", e),
    }

    let routes = configure_routes(state);

    log::info!("Starting server on http://{}", config.bind_addr);
    warp::serve(routes).run(config.bind_addr).await;

    Ok(())
}
