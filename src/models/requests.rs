use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::{Validate, ValidationError};
use crate::core::slugify;
use crate::models::domain::QuestionOption;

/// Longest interest name the catalog stores
pub const MAX_INTEREST_NAME_LEN: usize = 100;

/// Request to register a new account
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 150))]
    pub username: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
    pub confirm_password: String,
}

/// Request to exchange credentials for a bearer token
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TokenRequest {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateInterestsRequest {
    pub interests: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePreferencesRequest {
    pub preferences: serde_json::Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectCareerPathsRequest {
    pub career_track_ids: Vec<i64>,
}

/// Request to create a career track
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCareerTrackRequest {
    #[validate(length(min = 1, max = 100))]
    pub title: String,
    /// Lowercase words joined by dashes; derived from the title when absent
    #[serde(default)]
    #[validate(length(max = 120), custom(function = "validate_slug"))]
    pub slug: Option<String>,
    #[serde(default)]
    #[validate(length(max = 5))]
    pub emoji: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    #[validate(length(max = 50))]
    pub avg_salary: Option<String>,
    /// Interest names; unknown names are created
    #[serde(default)]
    #[validate(custom(function = "validate_interest_names"))]
    pub relevant_interests: Vec<String>,
    #[serde(default)]
    pub roadmap: Vec<Value>,
}

/// A slug must already be in slug form and may not be all digits, which
/// would be read back as a track id
fn validate_slug(slug: &String) -> Result<(), ValidationError> {
    let slug = slug.trim();
    if slug.is_empty() {
        return Ok(());
    }
    if slugify(slug) != slug {
        return Err(ValidationError::new("slug_format"));
    }
    if slug.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::new("slug_numeric"));
    }
    Ok(())
}

fn validate_interest_names(names: &Vec<String>) -> Result<(), ValidationError> {
    for name in names {
        let len = name.trim().chars().count();
        if len == 0 || len > MAX_INTEREST_NAME_LEN {
            return Err(ValidationError::new("interest_name_length"));
        }
    }
    Ok(())
}

/// Query string of the single learning page endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningPageQuery {
    pub page: Option<String>,
}

/// Body for creating or replacing a quiz
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct QuizPayload {
    #[serde(alias = "career_id")]
    pub career: i64,
    #[validate(range(min = 1))]
    pub day: i32,
}

/// Body for creating or replacing a quiz question
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct QuestionPayload {
    #[serde(alias = "quiz_id")]
    pub quiz: i64,
    #[validate(length(min = 1))]
    pub text: String,
    #[validate(length(min = 1))]
    pub options: Vec<QuestionOption>,
}

/// Answer submitted to a quiz
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitAnswerRequest {
    #[serde(default)]
    pub answer: Option<String>,
    /// Question being answered; when absent any question of the quiz may match
    #[serde(default)]
    pub question_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProgressRequest {
    pub career_id: i64,
}

/// Partial update of a progress row
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateProgressRequest {
    #[validate(range(min = 0))]
    pub xp: Option<i32>,
    #[validate(range(min = 0))]
    pub streak: Option<i32>,
    #[validate(range(min = 0))]
    pub days_completed: Option<i32>,
    pub completed: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserAnswerRequest {
    #[serde(alias = "question_id")]
    pub question: i64,
    pub answer: Value,
}
