use actix_web::{web, HttpResponse};
use validator::Validate;
use crate::error::ApiError;
use crate::models::{CareerTrack, CreateCareerTrackRequest, LearningPage, LearningPageQuery};
use crate::routes::{cached, invalidate_catalog, AppState, AuthUser};
use crate::services::{CacheKey, NewCareerTrack};

/// Configure career track routes
///
/// `recommendations` is registered ahead of `{key}` so it is not read as a slug.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .service(
            web::resource("/career-tracks")
                .route(web::get().to(list_career_tracks))
                .route(web::post().to(create_career_track)),
        )
        .route("/career-tracks/recommendations", web::get().to(recommendations))
        .route("/career-tracks/{key}", web::get().to(get_career_track))
        .route("/career-tracks/{key}/learning_pages", web::get().to(learning_pages))
        .route("/career-tracks/{key}/learning_page", web::get().to(learning_page));
}

/// The career track catalog, read through the cache
pub(crate) async fn load_career_tracks(state: &AppState) -> Result<Vec<CareerTrack>, ApiError> {
    let postgres = state.postgres.clone();
    cached(&state.cache, &CacheKey::career_tracks(), || async move {
        postgres.list_career_tracks().await
    })
    .await
}

/// Resolve a path key: all digits is an id, anything else a slug
async fn resolve_track(state: &AppState, key: &str) -> Result<CareerTrack, ApiError> {
    let track = match parse_track_id(key) {
        Some(id) => state.postgres.get_career_track(id).await?,
        None => state.postgres.get_career_track_by_slug(key).await?,
    };
    Ok(track)
}

fn parse_track_id(key: &str) -> Option<i64> {
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse().ok()
}

/// Parse the `page` query value, defaulting to the first page
fn parse_page_number(raw: Option<&str>) -> Result<i32, ApiError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(1),
        Some(value) => value
            .parse::<i32>()
            .map_err(|_| ApiError::BadRequest("Invalid page number".to_string())),
    }
}

async fn list_career_tracks(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let tracks = load_career_tracks(&state).await?;
    Ok(HttpResponse::Ok().json(tracks))
}

/// Create a track with its interests and a starter learning page
///
/// POST /api/v1/career-tracks
async fn create_career_track(
    state: web::Data<AppState>,
    auth: AuthUser,
    req: web::Json<CreateCareerTrackRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let req = req.into_inner();
    let new_track = NewCareerTrack {
        title: req.title.trim().to_string(),
        slug: req.slug,
        emoji: req.emoji,
        description: req.description,
        avg_salary: req.avg_salary,
        interests: req.relevant_interests,
        roadmap: req.roadmap,
    };

    let track = state.postgres.create_career_track(&new_track).await?;
    invalidate_catalog(&state.cache).await;

    tracing::info!("User {} created career track {}", auth.user_id, track.slug);

    Ok(HttpResponse::Created().json(track))
}

/// The best-scoring career tracks for the caller
///
/// GET /api/v1/career-tracks/recommendations
async fn recommendations(
    state: web::Data<AppState>,
    auth: AuthUser,
) -> Result<HttpResponse, ApiError> {
    let user = state.postgres.get_user(auth.user_id).await?;
    let tracks = load_career_tracks(&state).await?;

    let ranked = state.recommender.top_matches(&user.interests, tracks)?;

    Ok(HttpResponse::Ok().json(ranked))
}

async fn get_career_track(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let track = resolve_track(&state, &path).await?;
    Ok(HttpResponse::Ok().json(track))
}

/// Load every learning page of a track through the cache
async fn load_learning_pages(state: &AppState, track_id: i64) -> Result<Vec<LearningPage>, ApiError> {
    let postgres = state.postgres.clone();
    cached(&state.cache, &CacheKey::learning_pages(track_id), || async move {
        postgres.list_learning_pages(track_id).await
    })
    .await
}

async fn learning_pages(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let track = resolve_track(&state, &path).await?;
    let pages = load_learning_pages(&state, track.id).await?;

    Ok(HttpResponse::Ok().json(pages))
}

/// A single learning page
///
/// GET /api/v1/career-tracks/{key}/learning_page?page=N
async fn learning_page(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<LearningPageQuery>,
) -> Result<HttpResponse, ApiError> {
    let page_number = parse_page_number(query.page.as_deref())?;
    let track = resolve_track(&state, &path).await?;

    let page = state
        .postgres
        .get_learning_page(track.id, page_number)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Page {}", page_number)))?;

    Ok(HttpResponse::Ok().json(page))
}
