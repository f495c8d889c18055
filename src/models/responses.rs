use serde::{Deserialize, Serialize};
use crate::models::domain::{CareerTrack, Progress, User};

/// Public view of a user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub interests: Vec<String>,
    pub preferences: serde_json::Value,
    pub selected_career_paths: Vec<i64>,
    pub onboarding_complete: bool,
    pub xp: i32,
    pub streak: i32,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            interests: user.interests,
            preferences: user.preferences,
            selected_career_paths: user.selected_career_paths,
            onboarding_complete: user.onboarding_complete,
            xp: user.xp,
            streak: user.streak,
        }
    }
}

/// Response for registration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub user: UserResponse,
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Progress with its career track expanded
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressResponse {
    pub id: i64,
    pub career: CareerTrack,
    pub xp: i32,
    pub streak: i32,
    pub days_completed: i32,
    pub completed: bool,
    pub last_attempt: Option<chrono::DateTime<chrono::Utc>>,
}

impl ProgressResponse {
    pub fn new(progress: Progress, career: CareerTrack) -> Self {
        Self {
            id: progress.id,
            career,
            xp: progress.xp,
            streak: progress.streak,
            days_completed: progress.days_completed,
            completed: progress.completed,
            last_attempt: progress.last_attempt,
        }
    }
}

/// Result of submitting a quiz answer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitAnswerResponse {
    pub message: String,
    pub correct: bool,
    pub xp_gained: i32,
    pub current_xp: i32,
    pub current_streak: i32,
    pub days_completed: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillTagsResponse {
    pub skill_tags: Vec<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
