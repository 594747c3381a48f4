use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};

/// Read-only projection of another user, built fresh for every fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateProfile {
    pub id: String,
    pub name: String,
    /// Derived from the stored date of birth at read time; 0 when unknown.
    pub age: u32,
    /// Asset name of the avatar image.
    pub avatar: String,
    pub language: String,
    /// Transient ranking value, never persisted.
    pub match_score: u32,
}

/// Ordered candidates for the discovery feed.
///
/// The head is the card currently on screen. Ids are unique within a queue.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateQueue {
    candidates: VecDeque<CandidateProfile>,
}

impl CandidateQueue {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a queue keeping the given order; later duplicates of an id
    /// are dropped.
    pub fn from_candidates(candidates: impl IntoIterator<Item = CandidateProfile>) -> Self {
        let mut seen = HashSet::new();
        let candidates = candidates
            .into_iter()
            .filter(|candidate| seen.insert(candidate.id.clone()))
            .collect();
        Self { candidates }
    }

    pub fn head(&self) -> Option<&CandidateProfile> {
        self.candidates.front()
    }

    /// Removes and returns the head; the next candidate becomes the head.
    pub fn pop_head(&mut self) -> Option<CandidateProfile> {
        self.candidates.pop_front()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.candidates.iter().any(|candidate| candidate.id == id)
    }

    pub fn ids(&self) -> Vec<&str> {
        self.candidates.iter().map(|c| c.id.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CandidateProfile> {
        self.candidates.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(id: &str) -> CandidateProfile {
        CandidateProfile {
            id: id.to_string(),
            name: id.to_uppercase(),
            age: 25,
            avatar: "female_avatar1".to_string(),
            language: "Hindi".to_string(),
            match_score: 0,
        }
    }

    #[test]
    fn test_from_candidates_drops_duplicate_ids() {
        let queue = CandidateQueue::from_candidates(vec![
            candidate("a"),
            candidate("b"),
            candidate("a"),
        ]);
        assert_eq!(queue.ids(), vec!["a", "b"]);
    }

    #[test]
    fn test_pop_head_advances() {
        let mut queue = CandidateQueue::from_candidates(vec![candidate("a"), candidate("b")]);
        assert_eq!(queue.head().map(|c| c.id.as_str()), Some("a"));
        assert_eq!(queue.pop_head().map(|c| c.id), Some("a".to_string()));
        assert_eq!(queue.head().map(|c| c.id.as_str()), Some("b"));
        queue.pop_head();
        assert!(queue.is_empty());
        assert!(queue.pop_head().is_none());
    }
}
