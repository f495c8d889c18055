use std::collections::HashSet;
use crate::models::CareerTrack;

/// Normalize a user's interest selection into a lookup set
///
/// Order is irrelevant and duplicates collapse, so the selection behaves
/// as a set for scoring.
pub fn interest_set<S: AsRef<str>>(interests: &[S]) -> HashSet<&str> {
    interests.iter().map(|i| i.as_ref()).collect()
}

/// Overlap score between a user's interests and a career track
///
/// score = |user_interests ∩ track_interests|, counting each distinct
/// interest name once.
#[inline]
pub fn overlap_score(user_interests: &HashSet<&str>, track: &CareerTrack) -> u32 {
    track
        .interest_names()
        .filter(|name| user_interests.contains(name))
        .collect::<HashSet<_>>()
        .len() as u32
}
