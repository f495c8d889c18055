use actix_web::{web, HttpResponse};
use chrono::Utc;
use validator::Validate;
use crate::core::{apply_event, ProgressEvent};
use crate::error::ApiError;
use crate::models::{Question, QuizPayload, SubmitAnswerRequest, SubmitAnswerResponse};
use crate::routes::{AppState, AuthUser};
use crate::services::ProgressTarget;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .service(
            web::resource("/quizzes")
                .route(web::get().to(list_quizzes))
                .route(web::post().to(create_quiz)),
        )
        .service(
            web::resource("/quizzes/{id}")
                .route(web::get().to(get_quiz))
                .route(web::put().to(update_quiz))
                .route(web::delete().to(delete_quiz)),
        )
        .route("/quizzes/{id}/submit_answer", web::post().to(submit_answer));
}

async fn list_quizzes(state: web::Data<AppState>, _auth: AuthUser) -> Result<HttpResponse, ApiError> {
    let quizzes = state.postgres.list_quizzes().await?;
    Ok(HttpResponse::Ok().json(quizzes))
}

async fn create_quiz(
    state: web::Data<AppState>,
    _auth: AuthUser,
    req: web::Json<QuizPayload>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;
    let quiz = state.postgres.create_quiz(req.career, req.day).await?;
    Ok(HttpResponse::Created().json(quiz))
}

async fn get_quiz(
    state: web::Data<AppState>,
    _auth: AuthUser,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let quiz = state.postgres.get_quiz(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(quiz))
}

async fn update_quiz(
    state: web::Data<AppState>,
    _auth: AuthUser,
    path: web::Path<i64>,
    req: web::Json<QuizPayload>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;
    let quiz = state
        .postgres
        .update_quiz(path.into_inner(), req.career, req.day)
        .await?;
    Ok(HttpResponse::Ok().json(quiz))
}

async fn delete_quiz(
    state: web::Data<AppState>,
    _auth: AuthUser,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let quiz_id = path.into_inner();
    if !state.postgres.delete_quiz(quiz_id).await? {
        return Err(ApiError::NotFound(format!("Quiz {}", quiz_id)));
    }
    Ok(HttpResponse::NoContent().finish())
}

/// Whether an answer is correct for the quiz
///
/// With a question id only that question is checked; without one any
/// question of the quiz accepting the answer counts.
fn grade_answer(questions: &[Question], question_id: Option<i64>, answer: &str) -> Result<bool, ApiError> {
    match question_id {
        Some(id) => questions
            .iter()
            .find(|q| q.id == id)
            .map(|q| q.is_correct_answer(answer))
            .ok_or_else(|| ApiError::NotFound(format!("Question {}", id))),
        None => Ok(questions.iter().any(|q| q.is_correct_answer(answer))),
    }
}

/// Submit an answer and advance the caller's progress on the quiz's track
///
/// POST /api/v1/quizzes/{id}/submit_answer
///
/// Request body:
/// ```json
/// {
///   "answer": "string",
///   "question_id": 1
/// }
/// ```
async fn submit_answer(
    state: web::Data<AppState>,
    auth: AuthUser,
    path: web::Path<i64>,
    req: web::Json<SubmitAnswerRequest>,
) -> Result<HttpResponse, ApiError> {
    let answer = req
        .answer
        .as_deref()
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Answer is required".to_string()))?;

    let quiz = state.postgres.get_quiz(path.into_inner()).await?;
    let questions = state.postgres.list_quiz_questions(quiz.id).await?;
    let correct = grade_answer(&questions, req.question_id, answer)?;

    let event = ProgressEvent::QuizAnswered { correct, at: Utc::now() };
    let update = state
        .postgres
        .apply_progress_transition(auth.user_id, ProgressTarget::Career(quiz.career_id), |progress| {
            apply_event(progress, &event).map_err(ApiError::from)
        })
        .await?;

    tracing::info!(
        "User {} answered quiz {} (correct: {}, streak: {})",
        auth.user_id,
        quiz.id,
        correct,
        update.progress.streak
    );

    let message = if correct { "Correct answer!" } else { "Incorrect answer." };

    Ok(HttpResponse::Ok().json(SubmitAnswerResponse {
        message: message.to_string(),
        correct,
        xp_gained: update.xp_gained(),
        current_xp: update.user.xp,
        current_streak: update.progress.streak,
        days_completed: update.progress.days_completed,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuestionOption;

    fn question(id: i64, correct: &str, wrong: &str) -> Question {
        Question {
            id,
            quiz_id: 1,
            text: format!("Question {}", id),
            options: vec![
                QuestionOption { text: correct.to_string(), is_correct: true },
                QuestionOption { text: wrong.to_string(), is_correct: false },
            ],
        }
    }

    #[test]
    fn test_grade_specific_question() {
        let questions = vec![question(1, "Rust", "Go"), question(2, "Tokio", "Node")];

        assert!(grade_answer(&questions, Some(1), "Rust").unwrap());
        assert!(!grade_answer(&questions, Some(1), "Tokio").unwrap());
        assert!(grade_answer(&questions, Some(3), "Rust").is_err());
    }

    #[test]
    fn test_grade_any_question() {
        let questions = vec![question(1, "Rust", "Go"), question(2, "Tokio", "Node")];

        assert!(grade_answer(&questions, None, "Tokio").unwrap());
        assert!(!grade_answer(&questions, None, "Go").unwrap());
        assert!(!grade_answer(&[], None, "Rust").unwrap());
    }
}
