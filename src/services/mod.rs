// Service exports
pub mod auth;
pub mod cache;
pub mod postgres;

pub use auth::{verify_password, AuthError, Claims, Passwords, TokenService};
pub use cache::{CacheManager, CacheKey, CacheError, CacheStats};
pub use postgres::{NewCareerTrack, PostgresClient, PostgresError, ProgressTarget, ProgressUpdate};
