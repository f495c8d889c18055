// Route exports
pub mod auth;
pub mod career_tracks;
pub mod health;
pub mod interests;
pub mod onboarding;
pub mod progress;
pub mod questions;
pub mod quizzes;
pub mod users;

use actix_web::web;
use serde::{de::DeserializeOwned, Serialize};
use std::future::Future;
use std::sync::Arc;
use crate::core::Recommender;
use crate::error::ApiError;
use crate::services::{CacheError, CacheManager, Passwords, PostgresClient, PostgresError, TokenService};

pub use auth::AuthUser;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub postgres: Arc<PostgresClient>,
    pub cache: Arc<CacheManager>,
    pub tokens: Arc<TokenService>,
    pub recommender: Recommender,
    pub onboarding_question_count: usize,
    pub passwords: Arc<Passwords>,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(health::configure)
            .configure(auth::configure)
            .configure(users::configure)
            .configure(interests::configure)
            .configure(career_tracks::configure)
            .configure(quizzes::configure)
            .configure(questions::configure)
            .configure(progress::configure)
            .configure(onboarding::configure),
    );
}

/// Read through the cache, loading from the store on a miss
///
/// Cache failures are logged and fall back to the store.
pub(crate) async fn cached<T, F, Fut>(cache: &CacheManager, key: &str, load: F) -> Result<T, ApiError>
where
    T: Serialize + DeserializeOwned,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, PostgresError>>,
{
    match cache.get::<T>(key).await {
        Ok(value) => return Ok(value),
        Err(CacheError::CacheMiss(_)) => {}
        Err(e) => tracing::warn!("Cache read failed for {}, falling back to database: {}", key, e),
    }

    let value = load().await?;

    if let Err(e) = cache.set(key, &value).await {
        tracing::warn!("Failed to populate cache for {}: {}", key, e);
    }

    Ok(value)
}

/// Drop every cached catalog entry after a catalog write
pub(crate) async fn invalidate_catalog(cache: &CacheManager) {
    if let Err(e) = cache.invalidate_pattern(crate::services::CacheKey::CATALOG_PATTERN).await {
        tracing::warn!("Failed to invalidate catalog cache: {}", e);
    }
}
