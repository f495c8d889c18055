use actix_web::{web, HttpResponse};
use serde_json::Value;
use std::collections::HashSet;
use validator::Validate;
use crate::core::validate_career_selection;
use crate::error::ApiError;
use crate::models::{
    RegisterRequest, RegisterResponse, SelectCareerPathsRequest, UpdateInterestsRequest,
    UpdatePreferencesRequest, UserResponse,
};
use crate::routes::career_tracks::load_career_tracks;
use crate::routes::{AppState, AuthUser};

/// Configure account routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/users/register", web::post().to(register))
        .route("/users/me", web::get().to(me))
        .route("/users/update_interests", web::patch().to(update_interests))
        .route("/users/update_preferences", web::patch().to(update_preferences))
        .route("/users/recommendations", web::get().to(recommendations))
        .route("/users/select_career_paths", web::post().to(select_career_paths));
}

/// Register a new account
///
/// POST /api/v1/users/register
///
/// Request body:
/// ```json
/// {
///   "username": "string",
///   "email": "string",
///   "password": "string",
///   "confirm_password": "string"
/// }
/// ```
async fn register(
    state: web::Data<AppState>,
    req: web::Json<RegisterRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let username = req.username.trim();
    if username.is_empty() {
        return Err(ApiError::BadRequest("Username may not be blank".to_string()));
    }

    if req.password != req.confirm_password {
        return Err(ApiError::BadRequest("Passwords do not match".to_string()));
    }

    let passwords = state.passwords.clone();
    let password = req.password.clone();
    let password_hash = web::block(move || passwords.hash(&password)).await??;

    let user = state
        .postgres
        .create_user(username, req.email.trim(), &password_hash)
        .await?;

    let token = state.tokens.issue(user.id)?;

    Ok(HttpResponse::Created().json(RegisterResponse {
        user: user.into(),
        token,
    }))
}

/// GET /api/v1/users/me
async fn me(state: web::Data<AppState>, auth: AuthUser) -> Result<HttpResponse, ApiError> {
    let user = state.postgres.get_user(auth.user_id).await?;
    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

/// Replace the caller's interests and mark onboarding complete
///
/// Names are trimmed; blanks and repeats are dropped.
async fn update_interests(
    state: web::Data<AppState>,
    auth: AuthUser,
    req: web::Json<UpdateInterestsRequest>,
) -> Result<HttpResponse, ApiError> {
    let interests = normalize_interests(&req.interests);

    tracing::info!("User {} set {} interests", auth.user_id, interests.len());

    let user = state.postgres.update_user_interests(auth.user_id, &interests).await?;
    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

async fn update_preferences(
    state: web::Data<AppState>,
    auth: AuthUser,
    req: web::Json<UpdatePreferencesRequest>,
) -> Result<HttpResponse, ApiError> {
    let preferences = Value::Object(req.into_inner().preferences);
    let user = state.postgres.update_user_preferences(auth.user_id, preferences).await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

/// Every career track sharing at least one interest with the caller
///
/// GET /api/v1/users/recommendations
async fn recommendations(
    state: web::Data<AppState>,
    auth: AuthUser,
) -> Result<HttpResponse, ApiError> {
    let user = state.postgres.get_user(auth.user_id).await?;
    let tracks = load_career_tracks(&state).await?;

    let ranked = state.recommender.all_matches(&user.interests, tracks)?;

    tracing::debug!("User {} matched {} career tracks", auth.user_id, ranked.len());

    Ok(HttpResponse::Ok().json(ranked))
}

async fn select_career_paths(
    state: web::Data<AppState>,
    auth: AuthUser,
    req: web::Json<SelectCareerPathsRequest>,
) -> Result<HttpResponse, ApiError> {
    let known = state.postgres.career_track_ids().await?;
    let selection = validate_career_selection(&req.career_track_ids, &known)?;

    let user = state
        .postgres
        .update_selected_career_paths(auth.user_id, &selection)
        .await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

fn normalize_interests(raw: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    raw.iter()
        .map(|name| name.trim())
        .filter(|name| !name.is_empty() && seen.insert(*name))
        .map(str::to_string)
        .collect()
}
