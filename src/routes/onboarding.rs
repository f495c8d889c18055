use actix_web::{web, HttpResponse};
use crate::core::{derive_skill_tags, validate_answer};
use crate::error::ApiError;
use crate::models::{CreateUserAnswerRequest, SkillTagsResponse};
use crate::routes::{AppState, AuthUser};
use crate::services::PostgresError;

/// Configure onboarding routes
///
/// `user_skill_tags` is registered ahead of `{id}`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/onboarding-questions", web::get().to(onboarding_questions))
        .service(
            web::resource("/onboarding-answers")
                .route(web::get().to(list_answers))
                .route(web::post().to(create_answer)),
        )
        .route("/onboarding-answers/user_skill_tags", web::get().to(user_skill_tags))
        .service(
            web::resource("/onboarding-answers/{id}")
                .route(web::get().to(get_answer))
                .route(web::delete().to(delete_answer)),
        );
}

/// A random sample of onboarding questions
///
/// GET /api/v1/onboarding-questions
async fn onboarding_questions(
    state: web::Data<AppState>,
    _auth: AuthUser,
) -> Result<HttpResponse, ApiError> {
    let questions = state
        .postgres
        .random_onboarding_questions(state.onboarding_question_count)
        .await?;

    Ok(HttpResponse::Ok().json(questions))
}

async fn list_answers(state: web::Data<AppState>, auth: AuthUser) -> Result<HttpResponse, ApiError> {
    let answers = state.postgres.list_user_answers(auth.user_id).await?;
    Ok(HttpResponse::Ok().json(answers))
}

/// Record an answer after checking it fits the question type
///
/// POST /api/v1/onboarding-answers
///
/// Request body:
/// ```json
/// {
///   "question": 3,
///   "answer": true
/// }
/// ```
async fn create_answer(
    state: web::Data<AppState>,
    auth: AuthUser,
    req: web::Json<CreateUserAnswerRequest>,
) -> Result<HttpResponse, ApiError> {
    let question = state
        .postgres
        .get_onboarding_question(req.question)
        .await
        .map_err(|e| match e {
            PostgresError::NotFound(what) => ApiError::BadRequest(format!("Invalid question: {}", what)),
            other => other.into(),
        })?;

    validate_answer(&question, &req.answer)?;

    let answer = state
        .postgres
        .create_user_answer(auth.user_id, question.id, &req.answer)
        .await?;

    tracing::debug!("User {} answered onboarding question {}", auth.user_id, question.id);

    Ok(HttpResponse::Created().json(answer))
}

async fn get_answer(
    state: web::Data<AppState>,
    auth: AuthUser,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let answer = state.postgres.get_user_answer(auth.user_id, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(answer))
}

async fn delete_answer(
    state: web::Data<AppState>,
    auth: AuthUser,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let answer_id = path.into_inner();
    if !state.postgres.delete_user_answer(auth.user_id, answer_id).await? {
        return Err(ApiError::NotFound(format!("Answer {}", answer_id)));
    }
    Ok(HttpResponse::NoContent().finish())
}

/// Skill tags earned by the caller's answers
///
/// GET /api/v1/onboarding-answers/user_skill_tags
async fn user_skill_tags(state: web::Data<AppState>, auth: AuthUser) -> Result<HttpResponse, ApiError> {
    let answered = state.postgres.answered_questions(auth.user_id).await?;
    let skill_tags = derive_skill_tags(answered.iter().map(|(question, answer)| (question, answer)));

    Ok(HttpResponse::Ok().json(SkillTagsResponse { skill_tags }))
}
