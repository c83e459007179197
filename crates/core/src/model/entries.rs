use serde::{Deserialize, Serialize};

use crate::model::Skill;

/// A question raised about one skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doubt {
    pub skill: Skill,
    pub question: String,
}

/// A star rating plus free-form comments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackEntry {
    pub rating: u8,
    pub comments: String,
}

impl FeedbackEntry {
    pub const MIN_RATING: u8 = 1;
    pub const MAX_RATING: u8 = 5;

    #[must_use]
    pub fn is_valid_rating(rating: u8) -> bool {
        (Self::MIN_RATING..=Self::MAX_RATING).contains(&rating)
    }
}

/// Watched flag per skill video. Keys are fixed to the four skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VideoProgress {
    watched: [bool; 4],
}

impl VideoProgress {
    #[must_use]
    pub fn is_watched(&self, skill: Skill) -> bool {
        self.watched[skill.index()]
    }

    /// Flip the flag to watched. Returns `false` if it was already set.
    pub(crate) fn mark(&mut self, skill: Skill) -> bool {
        let slot = &mut self.watched[skill.index()];
        if *slot {
            return false;
        }
        *slot = true;
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = (Skill, bool)> + '_ {
        Skill::ALL.into_iter().map(|skill| (skill, self.is_watched(skill)))
    }

    #[must_use]
    pub fn watched_count(&self) -> usize {
        self.watched.iter().filter(|w| **w).count()
    }
}

/// Gamification score, always within 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct Momentum(u8);

impl Momentum {
    pub const MAX: u8 = 100;

    #[must_use]
    pub fn new(value: u8) -> Self {
        Self(value.min(Self::MAX))
    }

    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }

    /// Add `amount`, saturating at 100. Returns the points actually gained.
    pub(crate) fn raise(&mut self, amount: u8) -> u8 {
        let next = self.0.saturating_add(amount).min(Self::MAX);
        let gained = next - self.0;
        self.0 = next;
        gained
    }
}

impl From<u8> for Momentum {
    fn from(value: u8) -> Self {
        Self::new(value)
    }
}

impl From<Momentum> for u8 {
    fn from(value: Momentum) -> Self {
        value.0
    }
}

impl Default for Momentum {
    fn default() -> Self {
        Self(70)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn momentum_saturates_at_hundred() {
        let mut momentum = Momentum::new(98);
        assert_eq!(momentum.raise(5), 2);
        assert_eq!(momentum.get(), 100);
        assert_eq!(momentum.raise(5), 0);
        assert_eq!(momentum.get(), 100);
    }

    #[test]
    fn momentum_new_clamps() {
        assert_eq!(Momentum::new(250).get(), 100);
    }

    #[test]
    fn momentum_deserialize_clamps() {
        let momentum: Momentum = serde_json::from_str("180").unwrap();
        assert_eq!(momentum.get(), 100);
    }

    #[test]
    fn video_mark_is_one_shot() {
        let mut progress = VideoProgress::default();
        assert!(progress.mark(Skill::Writing));
        assert!(!progress.mark(Skill::Writing));
        assert!(progress.is_watched(Skill::Writing));
        assert_eq!(progress.watched_count(), 1);
    }

    #[test]
    fn rating_bounds() {
        assert!(!FeedbackEntry::is_valid_rating(0));
        assert!(FeedbackEntry::is_valid_rating(1));
        assert!(FeedbackEntry::is_valid_rating(5));
        assert!(!FeedbackEntry::is_valid_rating(6));
    }
}
