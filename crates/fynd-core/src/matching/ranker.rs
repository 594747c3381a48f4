//! Candidate scoring and ordering.
//!
//! Score = shared interests × weight + uniform jitter in `[0, jitter_max]`.
//! After a descending sort the list is split at its midpoint and each half
//! is shuffled on its own: better matches still tend to surface first, but
//! two sessions rarely see the same order.

use super::{CandidateProfile, CandidateQueue};
use crate::account::{StoredUser, UserAccount, age_on, avatar::resolve_avatar_asset};
use crate::config::RankingSettings;
use chrono::NaiveDate;
use rand::Rng;
use rand::seq::SliceRandom;

#[derive(Debug, Clone, Default)]
pub struct Ranker {
    settings: RankingSettings,
}

impl Ranker {
    pub fn new(settings: RankingSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &RankingSettings {
        &self.settings
    }

    pub fn score<R: Rng + ?Sized>(&self, shared_interests: usize, rng: &mut R) -> u32 {
        let overlap = u32::try_from(shared_interests).unwrap_or(u32::MAX);
        overlap
            .saturating_mul(self.settings.interest_weight)
            .saturating_add(rng.gen_range(0..=self.settings.jitter_max))
    }

    /// Projects and scores `pool`, sorted by descending score.
    ///
    /// The requester's own id and repeated ids are skipped.
    pub fn score_candidates<R: Rng + ?Sized>(
        &self,
        requester: &UserAccount,
        pool: &[StoredUser],
        today: NaiveDate,
        rng: &mut R,
    ) -> Vec<CandidateProfile> {
        let mut scored: Vec<CandidateProfile> = Vec::with_capacity(pool.len());
        for stored in pool {
            if stored.id == requester.id || scored.iter().any(|c| c.id == stored.id) {
                continue;
            }
            let account = UserAccount::from_document(stored.id.clone(), &stored.document);
            let match_score = self.score(requester.shared_interests(&account), rng);
            scored.push(CandidateProfile {
                age: age_on(&account.dob, today),
                avatar: resolve_avatar_asset(stored.document.avatar.as_deref()).to_string(),
                id: account.id,
                name: account.name,
                language: account.language,
                match_score,
            });
        }

        scored.sort_by(|a, b| b.match_score.cmp(&a.match_score));
        scored
    }

    /// Full ranking pass: score, sort, shuffle each half.
    pub fn rank<R: Rng + ?Sized>(
        &self,
        requester: &UserAccount,
        pool: &[StoredUser],
        today: NaiveDate,
        rng: &mut R,
    ) -> CandidateQueue {
        let mut ordered = self.score_candidates(requester, pool, today, rng);
        shuffle_halves(&mut ordered, rng);
        CandidateQueue::from_candidates(ordered)
    }
}

/// Shuffles `items[..len/2]` and `items[len/2..]` independently.
pub fn shuffle_halves<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    let mid = items.len() / 2;
    let (top, bottom) = items.split_at_mut(mid);
    top.shuffle(rng);
    bottom.shuffle(rng);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::UserDocument;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    fn requester(interests: &[&str]) -> UserAccount {
        UserAccount::from_document(
            "me",
            &UserDocument {
                gender: Some("Male".to_string()),
                language: Some("Hindi".to_string()),
                interests: interests.iter().map(|s| s.to_string()).collect(),
                ..Default::default()
            },
        )
    }

    fn stored(id: &str, interests: &[&str]) -> StoredUser {
        StoredUser {
            id: id.to_string(),
            document: UserDocument {
                name: Some(id.to_uppercase()),
                dob: Some("15/1/2000".to_string()),
                gender: Some("Female".to_string()),
                language: Some("Hindi".to_string()),
                avatar: Some("female2".to_string()),
                interests: interests.iter().map(|s| s.to_string()).collect(),
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_score_bounds() {
        let ranker = Ranker::default();
        let mut rng = StdRng::seed_from_u64(1);
        for overlap in 0..4 {
            for _ in 0..200 {
                let score = ranker.score(overlap, &mut rng);
                let base = overlap as u32 * 10;
                assert!(score >= base && score <= base + 100, "score {score}");
            }
        }
    }

    #[test]
    fn test_zero_jitter_is_pure_relevance() {
        let ranker = Ranker::new(RankingSettings {
            interest_weight: 10,
            jitter_max: 0,
        });
        let mut rng = StdRng::seed_from_u64(3);
        let scored = ranker.score_candidates(
            &requester(&["music", "travel", "food"]),
            &[
                stored("one", &["music"]),
                stored("three", &["music", "travel", "food"]),
                stored("none", &[]),
                stored("two", &["travel", "food"]),
            ],
            today(),
            &mut rng,
        );
        let order: Vec<_> = scored.iter().map(|c| (c.id.as_str(), c.match_score)).collect();
        assert_eq!(
            order,
            vec![("three", 30), ("two", 20), ("one", 10), ("none", 0)]
        );
    }

    #[test]
    fn test_projection_fields() {
        let ranker = Ranker::default();
        let mut rng = StdRng::seed_from_u64(5);
        let scored =
            ranker.score_candidates(&requester(&[]), &[stored("b", &[])], today(), &mut rng);
        let b = &scored[0];
        assert_eq!(b.name, "B");
        assert_eq!(b.age, 25);
        assert_eq!(b.avatar, "female_avatar2");
        assert_eq!(b.language, "Hindi");
    }

    #[test]
    fn test_excludes_requester_and_duplicates() {
        let ranker = Ranker::default();
        let mut rng = StdRng::seed_from_u64(9);
        let queue = ranker.rank(
            &requester(&[]),
            &[stored("me", &[]), stored("x", &[]), stored("x", &[]), stored("y", &[])],
            today(),
            &mut rng,
        );
        let ids: HashSet<_> = queue.ids().into_iter().collect();
        assert_eq!(ids, HashSet::from(["x", "y"]));
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_top_half_stays_on_top() {
        let ranker = Ranker::new(RankingSettings {
            interest_weight: 10,
            jitter_max: 0,
        });
        let me = requester(&["a", "b", "c", "d", "e", "f"]);
        let pool = vec![
            stored("s6", &["a", "b", "c", "d", "e", "f"]),
            stored("s5", &["a", "b", "c", "d", "e"]),
            stored("s4", &["a", "b", "c", "d"]),
            stored("s3", &["a", "b", "c"]),
            stored("s2", &["a", "b"]),
            stored("s1", &["a"]),
        ];
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let queue = ranker.rank(&me, &pool, today(), &mut rng);
            let ids = queue.ids();
            let top: HashSet<_> = ids[..3].iter().copied().collect();
            assert_eq!(top, HashSet::from(["s6", "s5", "s4"]), "seed {seed}");
        }
    }

    #[test]
    fn test_shuffle_halves_keeps_odd_middle_in_bottom() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut items = vec![1, 2, 3, 4, 5];
        shuffle_halves(&mut items, &mut rng);
        let top: HashSet<_> = items[..2].iter().copied().collect();
        assert_eq!(top, HashSet::from([1, 2]));

        let mut single = vec![42];
        shuffle_halves(&mut single, &mut rng);
        assert_eq!(single, vec![42]);

        let mut empty: Vec<u8> = Vec::new();
        shuffle_halves(&mut empty, &mut rng);
        assert!(empty.is_empty());
    }
}
