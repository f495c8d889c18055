use actix_web::{web, HttpResponse};
use validator::Validate;
use crate::error::ApiError;
use crate::models::QuestionPayload;
use crate::routes::{AppState, AuthUser};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .service(
            web::resource("/questions")
                .route(web::get().to(list_questions))
                .route(web::post().to(create_question)),
        )
        .service(
            web::resource("/questions/{id}")
                .route(web::get().to(get_question))
                .route(web::put().to(update_question))
                .route(web::delete().to(delete_question)),
        );
}

/// At least one option must be marked correct
fn check_options(req: &QuestionPayload) -> Result<(), ApiError> {
    if req.options.iter().any(|o| o.is_correct) {
        Ok(())
    } else {
        Err(ApiError::BadRequest("At least one option must be correct".to_string()))
    }
}

async fn list_questions(state: web::Data<AppState>, _auth: AuthUser) -> Result<HttpResponse, ApiError> {
    let questions = state.postgres.list_questions().await?;
    Ok(HttpResponse::Ok().json(questions))
}

async fn create_question(
    state: web::Data<AppState>,
    _auth: AuthUser,
    req: web::Json<QuestionPayload>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;
    check_options(&req)?;

    let question = state
        .postgres
        .create_question(req.quiz, req.text.trim(), &req.options)
        .await?;

    Ok(HttpResponse::Created().json(question))
}

async fn get_question(
    state: web::Data<AppState>,
    _auth: AuthUser,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let question = state.postgres.get_question(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(question))
}

async fn update_question(
    state: web::Data<AppState>,
    _auth: AuthUser,
    path: web::Path<i64>,
    req: web::Json<QuestionPayload>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;
    check_options(&req)?;

    let question = state
        .postgres
        .update_question(path.into_inner(), req.quiz, req.text.trim(), &req.options)
        .await?;

    Ok(HttpResponse::Ok().json(question))
}

async fn delete_question(
    state: web::Data<AppState>,
    _auth: AuthUser,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let question_id = path.into_inner();
    if !state.postgres.delete_question(question_id).await? {
        return Err(ApiError::NotFound(format!("Question {}", question_id)));
    }
    Ok(HttpResponse::NoContent().finish())
}
