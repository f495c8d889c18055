use thiserror::Error;
use crate::models::{CareerTrack, ScoredTrack};
use crate::core::scoring::{interest_set, overlap_score};

/// Number of tracks returned by the top-N recommendation mode
pub const DEFAULT_TOP_N: usize = 4;

/// Errors raised while ranking career tracks
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecommendError {
    #[error("User has not selected interests.")]
    InterestsNotSet,
}

/// Ranking parameters
///
/// A track is kept when its overlap score is strictly greater than
/// `min_score`; the ranked list is truncated to `limit` when set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommendationConfig {
    pub limit: Option<usize>,
    pub min_score: u32,
}

impl RecommendationConfig {
    /// Every track sharing at least one interest, uncapped
    pub fn all_matches() -> Self {
        Self { limit: None, min_score: 0 }
    }

    /// The `n` best tracks sharing at least one interest
    pub fn top(n: usize) -> Self {
        Self { limit: Some(n), min_score: 0 }
    }
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self::all_matches()
    }
}

/// Rank career tracks by how many interests they share with the user
///
/// # Pipeline
/// 1. Overlap scoring against the user's interest set
/// 2. Minimum score filter
/// 3. Sort by score (descending), then track id (ascending)
/// 4. Optional truncation
///
/// # Errors
/// `RecommendError::InterestsNotSet` when the user has no interests. An
/// empty catalog or a catalog with no overlap yields an empty list.
pub fn rank_tracks<S: AsRef<str>>(
    user_interests: &[S],
    tracks: Vec<CareerTrack>,
    config: &RecommendationConfig,
) -> Result<Vec<ScoredTrack>, RecommendError> {
    if user_interests.is_empty() {
        return Err(RecommendError::InterestsNotSet);
    }

    let interests = interest_set(user_interests);

    let mut scored: Vec<ScoredTrack> = tracks
        .into_iter()
        .filter_map(|track| {
            let score = overlap_score(&interests, &track);
            (score > config.min_score).then_some(ScoredTrack { track, score })
        })
        .collect();

    scored.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| a.track.id.cmp(&b.track.id))
    });

    if let Some(limit) = config.limit {
        scored.truncate(limit);
    }

    Ok(scored)
}

/// Recommendation entry point holding the configured top-N mode
#[derive(Debug, Clone, Copy)]
pub struct Recommender {
    top_n: usize,
    min_score: u32,
}

impl Recommender {
    pub fn new(top_n: usize, min_score: u32) -> Self {
        Self { top_n, min_score }
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }

    /// All tracks with a positive score, best first
    pub fn all_matches<S: AsRef<str>>(
        &self,
        user_interests: &[S],
        tracks: Vec<CareerTrack>,
    ) -> Result<Vec<ScoredTrack>, RecommendError> {
        let config = RecommendationConfig {
            limit: None,
            min_score: self.min_score,
        };
        rank_tracks(user_interests, tracks, &config)
    }

    /// The configured number of best tracks
    pub fn top_matches<S: AsRef<str>>(
        &self,
        user_interests: &[S],
        tracks: Vec<CareerTrack>,
    ) -> Result<Vec<ScoredTrack>, RecommendError> {
        let config = RecommendationConfig {
            limit: Some(self.top_n),
            min_score: self.min_score,
        };
        rank_tracks(user_interests, tracks, &config)
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::new(DEFAULT_TOP_N, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Interest;

    fn create_track(id: i64, interests: &[&str]) -> CareerTrack {
        CareerTrack {
            id,
            slug: format!("track-{}", id),
            title: format!("Track {}", id),
            emoji: None,
            description: None,
            avg_salary: None,
            relevant_interests: interests
                .iter()
                .enumerate()
                .map(|(i, n)| Interest { id: i as i64, name: n.to_string(), emoji: None })
                .collect(),
            roadmap: vec![],
        }
    }

    fn example_catalog() -> Vec<CareerTrack> {
        vec![
            create_track(1, &["Python", "React"]),
            create_track(2, &["AI", "Python", "Data"]),
            create_track(3, &["Design"]),
        ]
    }

    fn ids(result: &[ScoredTrack]) -> Vec<i64> {
        result.iter().map(|s| s.track.id).collect()
    }

    #[test]
    fn test_all_matches_example() {
        let result = rank_tracks(
            &["Python", "AI"],
            example_catalog(),
            &RecommendationConfig::all_matches(),
        )
        .unwrap();

        assert_eq!(ids(&result), vec![2, 1]);
        assert_eq!(result[0].score, 2);
        assert_eq!(result[1].score, 1);
    }

    #[test]
    fn test_top_mode_example() {
        let result = rank_tracks(
            &["Python", "AI"],
            example_catalog(),
            &RecommendationConfig::top(4),
        )
        .unwrap();

        assert_eq!(ids(&result), vec![2, 1]);
    }

    #[test]
    fn test_empty_interests_is_an_error() {
        let empty: Vec<String> = vec![];
        let result = rank_tracks(&empty, example_catalog(), &RecommendationConfig::all_matches());

        assert_eq!(result.unwrap_err(), RecommendError::InterestsNotSet);
    }

    #[test]
    fn test_empty_catalog_is_empty_result() {
        let result = rank_tracks(&["Python"], vec![], &RecommendationConfig::all_matches()).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_no_overlap_is_empty_result() {
        let result = rank_tracks(&["Cooking"], example_catalog(), &RecommendationConfig::top(4)).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_ties_break_by_track_id() {
        let catalog = vec![
            create_track(9, &["Tech"]),
            create_track(3, &["Tech"]),
            create_track(5, &["Tech"]),
        ];

        let result = rank_tracks(&["Tech"], catalog, &RecommendationConfig::all_matches()).unwrap();

        assert_eq!(ids(&result), vec![3, 5, 9]);
    }

    #[test]
    fn test_top_mode_truncates() {
        let catalog: Vec<CareerTrack> = (1..=10).map(|id| create_track(id, &["Tech"])).collect();

        let result = rank_tracks(&["Tech"], catalog, &RecommendationConfig::top(4)).unwrap();

        assert_eq!(result.len(), 4);
        assert_eq!(ids(&result), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_min_score_threshold_is_exclusive() {
        let config = RecommendationConfig { limit: None, min_score: 1 };
        let result = rank_tracks(&["Python", "AI"], example_catalog(), &config).unwrap();

        assert_eq!(ids(&result), vec![2]);
    }

    #[test]
    fn test_recommender_modes() {
        let recommender = Recommender::default();
        let catalog: Vec<CareerTrack> = (1..=6).map(|id| create_track(id, &["Tech"])).collect();

        let all = recommender.all_matches(&["Tech"], catalog.clone()).unwrap();
        let top = recommender.top_matches(&["Tech"], catalog).unwrap();

        assert_eq!(all.len(), 6);
        assert_eq!(top.len(), DEFAULT_TOP_N);
    }

    #[test]
    fn test_ranking_is_idempotent() {
        let first = rank_tracks(&["Python", "AI"], example_catalog(), &RecommendationConfig::all_matches()).unwrap();
        let second = rank_tracks(&["Python", "AI"], example_catalog(), &RecommendationConfig::all_matches()).unwrap();

        let pairs = |r: &[ScoredTrack]| r.iter().map(|s| (s.track.id, s.score)).collect::<Vec<_>>();
        assert_eq!(pairs(&first), pairs(&second));
    }
}
