//! Career Compass - career guidance API
//!
//! Onboarding, interest-based career track recommendations, learning pages,
//! quizzes and progress tracking behind an actix-web JSON API.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod seed;
pub mod services;

// Re-export commonly used types
pub use core::{rank_tracks, RecommendationConfig, Recommender};
pub use error::ApiError;
pub use models::{CareerTrack, Interest, ScoredTrack, User};
