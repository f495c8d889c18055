use std::collections::{BTreeSet, HashSet};
use serde_json::Value;
use thiserror::Error;
use crate::models::{OnboardingQuestion, QuestionKind};

/// Maximum number of career paths a user may pick
pub const MAX_SELECTED_CAREER_PATHS: usize = 4;

/// Lowest scale answer that counts as agreement
const SCALE_TAG_THRESHOLD: i64 = 4;

/// Validation failures for onboarding input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnswerError {
    #[error("Answer must be a boolean for yes/no questions")]
    ExpectedBoolean,

    #[error("Answer must be one of the provided options")]
    UnknownOption,

    #[error("Answer must be an integer between 1 and 5")]
    OutOfScale,

    #[error("You can select a maximum of {0} career paths.")]
    TooManyCareerPaths(usize),

    #[error("One or more provided career track IDs are invalid.")]
    UnknownCareerTrack,
}

/// Check that an answer has the shape its question expects
pub fn validate_answer(question: &OnboardingQuestion, answer: &Value) -> Result<(), AnswerError> {
    match question.kind {
        QuestionKind::YesNo => answer
            .as_bool()
            .map(|_| ())
            .ok_or(AnswerError::ExpectedBoolean),
        QuestionKind::MultiChoice => {
            let choice = answer.as_str().ok_or(AnswerError::UnknownOption)?;
            let options = question.options.as_deref().unwrap_or_default();
            if options.iter().any(|o| o == choice) {
                Ok(())
            } else {
                Err(AnswerError::UnknownOption)
            }
        }
        QuestionKind::Scale1To5 => match answer.as_i64() {
            Some(1..=5) => Ok(()),
            _ => Err(AnswerError::OutOfScale),
        },
    }
}

/// Whether an answer earns the question's tags
fn answer_earns_tags(kind: QuestionKind, answer: &Value) -> bool {
    match kind {
        QuestionKind::YesNo => answer.as_bool().unwrap_or(false),
        QuestionKind::MultiChoice => true,
        QuestionKind::Scale1To5 => answer
            .as_i64()
            .map(|v| v >= SCALE_TAG_THRESHOLD)
            .unwrap_or(false),
    }
}

/// Collect the skill tags revealed by a user's answers
///
/// Yes/no questions count when answered yes, multi-choice questions always
/// count, scale questions count at 4 or 5. Tags are deduplicated and sorted.
pub fn derive_skill_tags<'a, I>(answers: I) -> Vec<String>
where
    I: IntoIterator<Item = (&'a OnboardingQuestion, &'a Value)>,
{
    answers
        .into_iter()
        .filter(|(question, answer)| answer_earns_tags(question.kind, answer))
        .flat_map(|(question, _)| question.tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Validate a career path selection against the known track ids
///
/// The limit applies to the request as sent, repeats included. Returns the
/// ids deduplicated in the order given.
pub fn validate_career_selection(
    requested: &[i64],
    known_ids: &HashSet<i64>,
) -> Result<Vec<i64>, AnswerError> {
    if requested.len() > MAX_SELECTED_CAREER_PATHS {
        return Err(AnswerError::TooManyCareerPaths(MAX_SELECTED_CAREER_PATHS));
    }

    let mut seen = HashSet::new();
    let selection: Vec<i64> = requested
        .iter()
        .copied()
        .filter(|id| seen.insert(*id))
        .collect();

    if selection.iter().any(|id| !known_ids.contains(id)) {
        return Err(AnswerError::UnknownCareerTrack);
    }

    Ok(selection)
}
