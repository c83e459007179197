use serde::{Deserialize, Serialize};

use crate::model::{Doubt, FeedbackEntry, SessionState};

/// Numbered entry of a most-recent-first feed. `position` starts at 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedItem<T> {
    pub position: usize,
    pub item: T,
}

fn newest_first<T: Clone>(items: &[T]) -> Vec<FeedItem<T>> {
    items
        .iter()
        .rev()
        .enumerate()
        .map(|(idx, item)| FeedItem {
            position: idx + 1,
            item: item.clone(),
        })
        .collect()
}

#[must_use]
pub fn doubt_feed(state: &SessionState) -> Vec<FeedItem<Doubt>> {
    newest_first(state.doubts())
}

#[must_use]
pub fn feedback_feed(state: &SessionState) -> Vec<FeedItem<FeedbackEntry>> {
    newest_first(state.feedback())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Skill;
    use crate::time::fixed_today;

    #[test]
    fn doubt_feed_is_newest_first() {
        let mut state = SessionState::new(fixed_today());
        state.submit_doubt(Skill::Reading, "first");
        state.submit_doubt(Skill::Writing, "second");

        let feed = doubt_feed(&state);
        assert_eq!(feed.len(), 2);
        assert_eq!(feed[0].position, 1);
        assert_eq!(feed[0].item.question, "second");
        assert_eq!(feed[1].item.skill, Skill::Reading);
        // Underlying storage keeps insertion order.
        assert_eq!(state.doubts()[0].question, "first");
    }

    #[test]
    fn feedback_feed_shows_latest_on_top() {
        let mut state = SessionState::new(fixed_today());
        state.submit_feedback(5, "great");
        state.submit_feedback(1, "ok");

        let feed = feedback_feed(&state);
        assert_eq!(feed[0].item.rating, 1);
        assert_eq!(feed[1].item.comments, "great");
    }

    #[test]
    fn empty_state_gives_empty_feeds() {
        let state = SessionState::new(fixed_today());
        assert!(doubt_feed(&state).is_empty());
        assert!(feedback_feed(&state).is_empty());
    }
}
