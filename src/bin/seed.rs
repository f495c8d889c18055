//! Populate the catalog and onboarding questions
//!
//! Usage: `cargo run --bin seed`

use career_compass::config::Settings;
use career_compass::seed;
use career_compass::services::{CacheManager, PostgresClient};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let settings = Settings::load()?;

    let postgres = PostgresClient::from_settings(
        &settings.database.url,
        Some(2),
        Some(1),
        settings.database.acquire_timeout_secs,
        settings.database.idle_timeout_secs,
    )
    .await
    .map_err(|e| {
        error!("Failed to connect to PostgreSQL: {}", e);
        e
    })?;

    let cache = match CacheManager::new(
        &settings.cache.redis_url,
        1,
        settings.cache.ttl_secs.unwrap_or(300),
    )
    .await
    {
        Ok(cache) => Some(cache),
        Err(e) => {
            warn!("Redis unavailable ({}), cached catalog entries will expire on their own", e);
            None
        }
    };

    let report = seed::run(&postgres, cache.as_ref()).await?;

    info!("{}", serde_json::to_string(&report)?);

    Ok(())
}
