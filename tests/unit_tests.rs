// Unit tests for Career Compass

use career_compass::core::{
    apply_event, derive_skill_tags, rank_tracks, starter_page, validate_answer,
    validate_career_selection, AnswerError, ProgressError, ProgressEvent, RecommendError,
    RecommendationConfig, Recommender,
};
use career_compass::models::{
    CareerTrack, Interest, OnboardingQuestion, Progress, QuestionKind, SectionType,
};
use career_compass::services::{verify_password, Passwords, TokenService};
use chrono::{DateTime, TimeZone, Utc};
use serde_json::json;
use std::collections::HashSet;

fn track(id: i64, title: &str, interests: &[&str]) -> CareerTrack {
    CareerTrack {
        id,
        slug: title.to_lowercase().replace(' ', "-"),
        title: title.to_string(),
        emoji: None,
        description: None,
        avg_salary: None,
        relevant_interests: interests
            .iter()
            .enumerate()
            .map(|(i, name)| Interest {
                id: i as i64 + 1,
                name: name.to_string(),
                emoji: None,
            })
            .collect(),
        roadmap: vec![],
    }
}

fn catalog() -> Vec<CareerTrack> {
    vec![
        track(1, "Frontend", &["Python", "React"]),
        track(2, "AI Engineer", &["AI", "Python", "Data"]),
        track(3, "UX Designer", &["Design"]),
    ]
}

fn at(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, day, hour, 30, 0).unwrap()
}

fn question(kind: QuestionKind, options: Option<Vec<&str>>, tags: &[&str]) -> OnboardingQuestion {
    OnboardingQuestion {
        id: 1,
        text: "Question".to_string(),
        kind,
        options: options.map(|o| o.into_iter().map(String::from).collect()),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

#[test]
fn test_recommendations_worked_example() {
    let recommender = Recommender::default();
    let interests = vec!["Python".to_string(), "AI".to_string()];

    let all: Vec<i64> = recommender
        .all_matches(&interests, catalog())
        .unwrap()
        .iter()
        .map(|s| s.track.id)
        .collect();
    let top: Vec<i64> = recommender
        .top_matches(&interests, catalog())
        .unwrap()
        .iter()
        .map(|s| s.track.id)
        .collect();

    assert_eq!(all, vec![2, 1]);
    assert_eq!(top, vec![2, 1]);
}

#[test]
fn test_recommendations_require_interests() {
    let empty: Vec<String> = vec![];
    let result = Recommender::default().all_matches(&empty, catalog());
    assert_eq!(result.unwrap_err(), RecommendError::InterestsNotSet);
}

#[test]
fn test_no_overlap_is_an_empty_result() {
    let ranked = rank_tracks(&["Cooking"], catalog(), &RecommendationConfig::all_matches()).unwrap();
    assert!(ranked.is_empty());

    let ranked = rank_tracks(&["Python"], vec![], &RecommendationConfig::top(4)).unwrap();
    assert!(ranked.is_empty());
}

#[test]
fn test_top_mode_is_a_prefix_of_all_matches() {
    let tracks: Vec<CareerTrack> = (1..=10)
        .map(|id| {
            let interests: Vec<&str> = ["Python", "AI", "Data", "Tech"]
                .into_iter()
                .take((id % 4 + 1) as usize)
                .collect();
            track(id, &format!("Track {}", id), &interests)
        })
        .collect();
    let interests = ["Python", "AI", "Data", "Tech"];

    let all = rank_tracks(&interests, tracks.clone(), &RecommendationConfig::all_matches()).unwrap();
    let top = rank_tracks(&interests, tracks, &RecommendationConfig::top(4)).unwrap();

    assert_eq!(top.len(), 4);
    for (a, b) in top.iter().zip(all.iter()) {
        assert_eq!(a.track.id, b.track.id);
        assert_eq!(a.score, b.score);
    }
    for pair in all.windows(2) {
        assert!(pair[0].score >= pair[1].score);
        if pair[0].score == pair[1].score {
            assert!(pair[0].track.id < pair[1].track.id);
        }
    }
}

#[test]
fn test_min_score_threshold() {
    let config = RecommendationConfig { limit: None, min_score: 1 };
    let ranked = rank_tracks(&["Python", "AI"], catalog(), &config).unwrap();

    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].track.title, "AI Engineer");
}

#[test]
fn test_progress_over_a_week() {
    let mut progress = Progress {
        id: 1,
        user_id: 1,
        career_id: 2,
        xp: 0,
        streak: 0,
        days_completed: 0,
        completed: false,
        last_attempt: None,
    };

    // Day 1: two answers, one correct
    for correct in [true, false] {
        progress = apply_event(&progress, &ProgressEvent::QuizAnswered { correct, at: at(1, 9) }).unwrap();
    }
    assert_eq!((progress.xp, progress.streak), (10, 1));

    // Day 2 extends the streak
    progress = apply_event(&progress, &ProgressEvent::QuizAnswered { correct: true, at: at(2, 20) }).unwrap();
    assert_eq!((progress.xp, progress.streak), (20, 2));

    // Skipping days 3 and 4 restarts it
    progress = apply_event(&progress, &ProgressEvent::QuizAnswered { correct: true, at: at(5, 8) }).unwrap();
    assert_eq!((progress.xp, progress.streak), (30, 1));
    assert_eq!(progress.last_attempt, Some(at(5, 8)));
}

#[test]
fn test_completing_every_day_finishes_the_track() {
    let mut progress = Progress {
        id: 1,
        user_id: 1,
        career_id: 2,
        xp: 0,
        streak: 0,
        days_completed: 0,
        completed: false,
        last_attempt: None,
    };

    for day in 1..=3 {
        assert!(!progress.completed);
        progress = apply_event(&progress, &ProgressEvent::DayCompleted { total_days: 3, at: at(day, 12) }).unwrap();
    }

    assert!(progress.completed);
    assert_eq!(progress.days_completed, 3);
    assert_eq!(progress.streak, 3);

    let again = apply_event(&progress, &ProgressEvent::DayCompleted { total_days: 3, at: at(4, 12) });
    assert_eq!(again.unwrap_err(), ProgressError::AlreadyCompleted);
}

#[test]
fn test_onboarding_answer_shapes() {
    let yes_no = question(QuestionKind::YesNo, None, &["leader"]);
    assert!(validate_answer(&yes_no, &json!(true)).is_ok());
    assert_eq!(validate_answer(&yes_no, &json!("yes")), Err(AnswerError::ExpectedBoolean));

    let choice = question(QuestionKind::MultiChoice, Some(vec!["Make it work", "Make it fun"]), &["builder"]);
    assert!(validate_answer(&choice, &json!("Make it fun")).is_ok());
    assert_eq!(validate_answer(&choice, &json!("Make it fast")), Err(AnswerError::UnknownOption));

    let scale = question(QuestionKind::Scale1To5, None, &["tech_comfort"]);
    assert!(validate_answer(&scale, &json!(5)).is_ok());
    assert_eq!(validate_answer(&scale, &json!(6)), Err(AnswerError::OutOfScale));
}

#[test]
fn test_skill_tags_from_answers() {
    let leader = question(QuestionKind::YesNo, None, &["leader"]);
    let organized = question(QuestionKind::YesNo, None, &["organized", "logical"]);
    let comfort = question(QuestionKind::Scale1To5, None, &["tech_comfort"]);
    let zone = question(QuestionKind::MultiChoice, Some(vec!["Analyzing data"]), &["data", "logical"]);

    let yes = json!(true);
    let no = json!(false);
    let four = json!(4);
    let pick = json!("Analyzing data");

    let tags = derive_skill_tags(vec![
        (&leader, &yes),
        (&organized, &no),
        (&comfort, &four),
        (&zone, &pick),
    ]);

    assert_eq!(tags, vec!["data", "leader", "logical", "tech_comfort"]);
}

#[test]
fn test_career_selection_limits() {
    let known: HashSet<i64> = (1..=13).collect();

    assert_eq!(validate_career_selection(&[3, 1, 3], &known).unwrap(), vec![3, 1]);
    assert_eq!(
        validate_career_selection(&[1, 2, 3, 4, 5], &known),
        Err(AnswerError::TooManyCareerPaths(4))
    );
    assert_eq!(
        validate_career_selection(&[1, 99], &known),
        Err(AnswerError::UnknownCareerTrack)
    );
    assert!(validate_career_selection(&[], &known).unwrap().is_empty());
}

#[test]
fn test_starter_page_sections_in_display_order() {
    let page = starter_page();
    let kinds: Vec<SectionType> = page.sections.iter().map(|s| s.section_type).collect();

    assert_eq!(page.page_number, 1);
    assert_eq!(kinds, SectionType::ALL.to_vec());
    assert_eq!(page.fun_facts.len(), 2);
    assert_eq!(page.scenarios.len(), 2);
    assert_eq!(page.reflections.len(), 1);
    assert!(page.day_in_life.is_some());
}

#[test]
fn test_password_and_token_round_trip() {
    let passwords = Passwords::new(1, 8).unwrap();
    let stored = passwords.hash("correct-horse").unwrap();
    assert!(verify_password("correct-horse", &stored).unwrap());
    assert!(!passwords.check("wrong-horse", Some(&stored)).unwrap());
    assert!(!passwords.check("correct-horse", None).unwrap());

    let tokens = TokenService::new("unit-secret", 60);
    let token = tokens.issue(42).unwrap();
    assert_eq!(tokens.verify(&token).unwrap(), 42);
    assert!(TokenService::new("other", 60).verify(&token).is_err());
}
