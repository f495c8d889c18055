use actix_web::{web, HttpResponse};
use chrono::Utc;
use std::collections::HashMap;
use validator::Validate;
use crate::core::{apply_event, ProgressEvent};
use crate::error::ApiError;
use crate::models::{CareerTrack, CreateProgressRequest, Progress, ProgressResponse, UpdateProgressRequest};
use crate::routes::career_tracks::load_career_tracks;
use crate::routes::{AppState, AuthUser};
use crate::services::ProgressTarget;

/// Configure progress routes; every row is scoped to the caller
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .service(
            web::resource("/progress")
                .route(web::get().to(list_progress))
                .route(web::post().to(create_progress)),
        )
        .service(
            web::resource("/progress/{id}")
                .route(web::get().to(get_progress))
                .route(web::put().to(update_progress))
                .route(web::patch().to(update_progress))
                .route(web::delete().to(delete_progress)),
        )
        .route("/progress/{id}/complete_day", web::post().to(complete_day));
}

/// Attach career tracks to progress rows
///
/// Tracks missing from the cached catalog are fetched directly.
async fn expand(state: &AppState, rows: Vec<Progress>) -> Result<Vec<ProgressResponse>, ApiError> {
    let mut tracks: HashMap<i64, CareerTrack> = load_career_tracks(state)
        .await?
        .into_iter()
        .map(|track| (track.id, track))
        .collect();

    let mut expanded = Vec::with_capacity(rows.len());
    for progress in rows {
        let career = match tracks.get(&progress.career_id) {
            Some(track) => track.clone(),
            None => {
                let track = state.postgres.get_career_track(progress.career_id).await?;
                tracks.insert(track.id, track.clone());
                track
            }
        };
        expanded.push(ProgressResponse::new(progress, career));
    }

    Ok(expanded)
}

async fn expand_one(state: &AppState, progress: Progress) -> Result<ProgressResponse, ApiError> {
    let career = state.postgres.get_career_track(progress.career_id).await?;
    Ok(ProgressResponse::new(progress, career))
}

async fn list_progress(state: web::Data<AppState>, auth: AuthUser) -> Result<HttpResponse, ApiError> {
    let rows = state.postgres.list_progress(auth.user_id).await?;
    let expanded = expand(&state, rows).await?;

    Ok(HttpResponse::Ok().json(expanded))
}

async fn create_progress(
    state: web::Data<AppState>,
    auth: AuthUser,
    req: web::Json<CreateProgressRequest>,
) -> Result<HttpResponse, ApiError> {
    let progress = state.postgres.create_progress(auth.user_id, req.career_id).await?;
    let response = expand_one(&state, progress).await?;

    Ok(HttpResponse::Created().json(response))
}

async fn get_progress(
    state: web::Data<AppState>,
    auth: AuthUser,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let progress = state.postgres.get_progress(auth.user_id, path.into_inner()).await?;
    let response = expand_one(&state, progress).await?;

    Ok(HttpResponse::Ok().json(response))
}

async fn update_progress(
    state: web::Data<AppState>,
    auth: AuthUser,
    path: web::Path<i64>,
    req: web::Json<UpdateProgressRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let progress = state
        .postgres
        .update_progress(auth.user_id, path.into_inner(), &req)
        .await?;
    let response = expand_one(&state, progress).await?;

    Ok(HttpResponse::Ok().json(response))
}

async fn delete_progress(
    state: web::Data<AppState>,
    auth: AuthUser,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let progress_id = path.into_inner();
    if !state.postgres.delete_progress(auth.user_id, progress_id).await? {
        return Err(ApiError::NotFound(format!("Progress {}", progress_id)));
    }
    Ok(HttpResponse::NoContent().finish())
}

/// Mark one more day of the track as done
///
/// The track is as long as its number of quizzes, and never shorter than a day.
///
/// POST /api/v1/progress/{id}/complete_day
async fn complete_day(
    state: web::Data<AppState>,
    auth: AuthUser,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let progress = state.postgres.get_progress(auth.user_id, path.into_inner()).await?;
    let total_days = track_length(state.postgres.count_quizzes(progress.career_id).await?);

    let event = ProgressEvent::DayCompleted { total_days, at: Utc::now() };
    let saved = state
        .postgres
        .apply_progress_transition(auth.user_id, ProgressTarget::Id(progress.id), |current| {
            apply_event(current, &event).map_err(ApiError::from)
        })
        .await?
        .progress;

    if saved.completed {
        tracing::info!("User {} completed career track {}", auth.user_id, saved.career_id);
    }

    let response = expand_one(&state, saved).await?;
    Ok(HttpResponse::Ok().json(response))
}

fn track_length(quiz_count: i64) -> u32 {
    u32::try_from(quiz_count).unwrap_or(0).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_length_is_at_least_one_day() {
        assert_eq!(track_length(0), 1);
        assert_eq!(track_length(-3), 1);
        assert_eq!(track_length(30), 30);
    }
}
