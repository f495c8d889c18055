use actix_web::{web, HttpResponse};
use crate::error::ApiError;
use crate::models::Interest;
use crate::routes::{cached, AppState};
use crate::services::CacheKey;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/interests", web::get().to(list_interests))
        .route("/interests/{id}", web::get().to(get_interest));
}

/// The interest catalog, read through the cache
pub(crate) async fn load_interests(state: &AppState) -> Result<Vec<Interest>, ApiError> {
    let postgres = state.postgres.clone();
    cached(&state.cache, &CacheKey::interests(), || async move {
        postgres.list_interests().await
    })
    .await
}

async fn list_interests(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let interests = load_interests(&state).await?;
    Ok(HttpResponse::Ok().json(interests))
}

async fn get_interest(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let interest = state.postgres.get_interest(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(interest))
}
