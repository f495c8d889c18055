use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A topic a user can be interested in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interest {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub emoji: Option<String>,
}

/// A career path tagged with the interests relevant to it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerTrack {
    pub id: i64,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub emoji: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub avg_salary: Option<String>,
    #[serde(default)]
    pub relevant_interests: Vec<Interest>,
    /// Ordered roadmap steps, free-form JSON
    #[serde(default)]
    pub roadmap: Vec<Value>,
}

impl CareerTrack {
    /// Names of the interests attached to this track
    pub fn interest_names(&self) -> impl Iterator<Item = &str> {
        self.relevant_interests.iter().map(|i| i.name.as_str())
    }
}

/// A career track paired with its overlap score for one user
///
/// Computed per request, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredTrack {
    #[serde(flatten)]
    pub track: CareerTrack,
    pub score: u32,
}

/// Registered user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub interests: Vec<String>,
    pub preferences: Value,
    pub selected_career_paths: Vec<i64>,
    pub onboarding_complete: bool,
    pub xp: i32,
    pub streak: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Daily quiz for a career track
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quiz {
    pub id: i64,
    #[serde(rename = "career")]
    pub career_id: i64,
    pub day: i32,
}

/// One answer choice of a quiz question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOption {
    pub text: String,
    #[serde(default)]
    pub is_correct: bool,
}

/// Quiz question
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    #[serde(rename = "quiz")]
    pub quiz_id: i64,
    pub text: String,
    pub options: Vec<QuestionOption>,
}

impl Question {
    /// True if `answer` names one of the correct options (case-insensitive, trimmed)
    pub fn is_correct_answer(&self, answer: &str) -> bool {
        let answer = answer.trim();
        self.options
            .iter()
            .any(|o| o.is_correct && o.text.trim().eq_ignore_ascii_case(answer))
    }
}

/// A user's progress through one career track
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    pub id: i64,
    pub user_id: i64,
    pub career_id: i64,
    pub xp: i32,
    pub streak: i32,
    pub days_completed: i32,
    pub completed: bool,
    pub last_attempt: Option<chrono::DateTime<chrono::Utc>>,
}

/// Kind of onboarding question, which also decides the answer shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    YesNo,
    MultiChoice,
    #[serde(rename = "scale_1_5")]
    Scale1To5,
}

impl QuestionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionKind::YesNo => "yes_no",
            QuestionKind::MultiChoice => "multi_choice",
            QuestionKind::Scale1To5 => "scale_1_5",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "yes_no" => Some(QuestionKind::YesNo),
            "multi_choice" => Some(QuestionKind::MultiChoice),
            "scale_1_5" => Some(QuestionKind::Scale1To5),
            _ => None,
        }
    }
}

/// Onboarding question with the skill tags it reveals
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnboardingQuestion {
    pub id: i64,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    #[serde(default)]
    pub options: Option<Vec<String>>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A user's answer to an onboarding question
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAnswer {
    pub id: i64,
    #[serde(rename = "user")]
    pub user_id: i64,
    #[serde(rename = "question")]
    pub question_id: i64,
    pub answer: Value,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Section kinds of a learning page, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionType {
    Overview,
    Scope,
    Opportunities,
    Skills,
    Knowledge,
}

impl SectionType {
    pub const ALL: [SectionType; 5] = [
        SectionType::Overview,
        SectionType::Scope,
        SectionType::Opportunities,
        SectionType::Skills,
        SectionType::Knowledge,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionType::Overview => "overview",
            SectionType::Scope => "scope",
            SectionType::Opportunities => "opportunities",
            SectionType::Skills => "skills",
            SectionType::Knowledge => "knowledge",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SectionType::Overview => "Overview",
            SectionType::Scope => "Scope and Impact",
            SectionType::Opportunities => "Opportunities",
            SectionType::Skills => "Skills Required",
            SectionType::Knowledge => "Knowledge Areas",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageSection {
    pub id: i64,
    pub section_type: SectionType,
    pub content: String,
    pub order: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunFact {
    pub id: i64,
    pub title: String,
    pub fact_text: String,
    pub takeaway: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayInLife {
    pub id: i64,
    pub narrative: Value,
}

/// Multiple-choice scenario; `correct_option` is one of `A`, `B`, `C`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub id: i64,
    pub question: String,
    pub option_a: String,
    pub option_b: String,
    pub option_c: String,
    pub correct_option: String,
    pub explanation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reflection {
    pub id: i64,
    pub question_text: String,
    pub option_1: String,
    pub option_2: String,
    pub option_3: String,
}

/// One page of a career track's learning content with everything nested in it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningPage {
    pub id: i64,
    pub page_number: i32,
    pub sections: Vec<PageSection>,
    pub fun_facts: Vec<FunFact>,
    pub day_in_life: Option<DayInLife>,
    pub scenarios: Vec<Scenario>,
    pub reflections: Vec<Reflection>,
}
