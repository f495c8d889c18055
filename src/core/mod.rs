// Core algorithm exports
pub mod content;
pub mod onboarding;
pub mod progress;
pub mod recommender;
pub mod scoring;

pub use content::{slugify, starter_page, NewLearningPage};
pub use onboarding::{derive_skill_tags, validate_answer, validate_career_selection, AnswerError};
pub use progress::{apply_event, ProgressError, ProgressEvent};
pub use recommender::{rank_tracks, RecommendError, RecommendationConfig, Recommender};
pub use scoring::{interest_set, overlap_score};
