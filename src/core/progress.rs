use chrono::{DateTime, Utc};
use thiserror::Error;
use crate::models::Progress;

/// XP awarded for a correct quiz answer
pub const XP_PER_CORRECT_ANSWER: i32 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProgressError {
    #[error("Career track already completed")]
    AlreadyCompleted,
}

/// Something a user did that moves their progress forward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressEvent {
    /// A quiz answer was submitted
    QuizAnswered { correct: bool, at: DateTime<Utc> },
    /// A day of the track was finished; `total_days` is the track length
    DayCompleted { total_days: u32, at: DateTime<Utc> },
}

impl ProgressEvent {
    fn at(&self) -> DateTime<Utc> {
        match *self {
            ProgressEvent::QuizAnswered { at, .. } | ProgressEvent::DayCompleted { at, .. } => at,
        }
    }
}

/// Apply an event to a progress snapshot, returning the next snapshot
///
/// Pure: the input is never mutated and no clock is read.
pub fn apply_event(progress: &Progress, event: &ProgressEvent) -> Result<Progress, ProgressError> {
    let mut next = progress.clone();

    match *event {
        ProgressEvent::QuizAnswered { correct, at } => {
            if correct {
                next.xp += XP_PER_CORRECT_ANSWER;
            }
            next.streak = next_streak(progress.streak, progress.last_attempt, at);
        }
        ProgressEvent::DayCompleted { total_days, at } => {
            if progress.completed {
                return Err(ProgressError::AlreadyCompleted);
            }
            next.days_completed += 1;
            next.completed = next.days_completed >= total_days as i32;
            next.streak = next_streak(progress.streak, progress.last_attempt, at);
        }
    }

    // Out-of-order events never move the last attempt backwards
    next.last_attempt = Some(match progress.last_attempt {
        Some(last) if last > event.at() => last,
        _ => event.at(),
    });

    Ok(next)
}

/// Streak after an activity at `at`
///
/// Same calendar day keeps the streak, the following day extends it, any
/// longer gap restarts it at one.
pub fn next_streak(streak: i32, last_attempt: Option<DateTime<Utc>>, at: DateTime<Utc>) -> i32 {
    let Some(last) = last_attempt else {
        return 1;
    };

    match (at.date_naive() - last.date_naive()).num_days() {
        i64::MIN..=0 => streak.max(1),
        1 => streak + 1,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn fresh_progress() -> Progress {
        Progress {
            id: 1,
            user_id: 7,
            career_id: 3,
            xp: 0,
            streak: 0,
            days_completed: 0,
            completed: false,
            last_attempt: None,
        }
    }

    fn day(d: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, d, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_correct_answer_awards_xp_and_starts_streak() {
        let next = apply_event(
            &fresh_progress(),
            &ProgressEvent::QuizAnswered { correct: true, at: day(1, 9) },
        )
        .unwrap();

        assert_eq!(next.xp, XP_PER_CORRECT_ANSWER);
        assert_eq!(next.streak, 1);
        assert_eq!(next.last_attempt, Some(day(1, 9)));
    }

    #[test]
    fn test_wrong_answer_awards_no_xp() {
        let next = apply_event(
            &fresh_progress(),
            &ProgressEvent::QuizAnswered { correct: false, at: day(1, 9) },
        )
        .unwrap();

        assert_eq!(next.xp, 0);
        assert_eq!(next.streak, 1);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let progress = fresh_progress();
        let _ = apply_event(&progress, &ProgressEvent::QuizAnswered { correct: true, at: day(1, 9) });
        assert_eq!(progress, fresh_progress());
    }

    #[test]
    fn test_streak_rules() {
        assert_eq!(next_streak(0, None, day(1, 9)), 1);
        assert_eq!(next_streak(3, Some(day(1, 9)), day(1, 22)), 3);
        assert_eq!(next_streak(3, Some(day(1, 23)), day(2, 1)), 4);
        assert_eq!(next_streak(3, Some(day(1, 9)), day(3, 9)), 1);
        assert_eq!(next_streak(3, Some(day(5, 9)), day(4, 9)), 3);
    }

    #[test]
    fn test_consecutive_days_build_streak() {
        let mut progress = fresh_progress();
        let start = day(1, 8);
        for offset in 0..5 {
            progress = apply_event(
                &progress,
                &ProgressEvent::QuizAnswered { correct: true, at: start + Duration::days(offset) },
            )
            .unwrap();
        }

        assert_eq!(progress.streak, 5);
        assert_eq!(progress.xp, 5 * XP_PER_CORRECT_ANSWER);
    }

    #[test]
    fn test_day_completion_finishes_track() {
        let mut progress = fresh_progress();
        progress = apply_event(&progress, &ProgressEvent::DayCompleted { total_days: 2, at: day(1, 9) }).unwrap();
        assert_eq!(progress.days_completed, 1);
        assert!(!progress.completed);

        progress = apply_event(&progress, &ProgressEvent::DayCompleted { total_days: 2, at: day(2, 9) }).unwrap();
        assert_eq!(progress.days_completed, 2);
        assert!(progress.completed);

        let err = apply_event(&progress, &ProgressEvent::DayCompleted { total_days: 2, at: day(3, 9) });
        assert_eq!(err.unwrap_err(), ProgressError::AlreadyCompleted);
    }

    #[test]
    fn test_last_attempt_never_moves_backwards() {
        let mut progress = fresh_progress();
        progress.last_attempt = Some(day(5, 9));

        let next = apply_event(&progress, &ProgressEvent::QuizAnswered { correct: true, at: day(4, 9) }).unwrap();
        assert_eq!(next.last_attempt, Some(day(5, 9)));
    }
}
