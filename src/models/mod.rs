// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    CareerTrack, DayInLife, FunFact, Interest, LearningPage, OnboardingQuestion, PageSection,
    Progress, Question, QuestionKind, QuestionOption, Quiz, Reflection, Scenario, ScoredTrack,
    SectionType, User, UserAnswer,
};
pub use requests::{
    CreateCareerTrackRequest, CreateProgressRequest, CreateUserAnswerRequest, LearningPageQuery,
    QuestionPayload, QuizPayload, RegisterRequest, SelectCareerPathsRequest, SubmitAnswerRequest,
    TokenRequest, UpdateInterestsRequest, UpdatePreferencesRequest, UpdateProgressRequest,
};
pub use responses::{
    ErrorResponse, HealthResponse, ProgressResponse, RegisterResponse, SkillTagsResponse,
    SubmitAnswerResponse, TokenResponse, UserResponse,
};
