use serde::{Deserialize, Serialize};

use crate::catalog::{LEADERBOARD_PEERS, LEADERBOARD_SELF_NAME, LEADERBOARD_SELF_SLOT};
use crate::model::SessionState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub user: String,
    pub points: u32,
    pub is_self: bool,
}

/// Sample peers plus the current learner scored by momentum, highest first.
///
/// Ties keep listing order.
#[must_use]
pub fn leaderboard(state: &SessionState) -> Vec<LeaderboardEntry> {
    let mut rows: Vec<(&str, u32, bool)> = LEADERBOARD_PEERS
        .iter()
        .map(|(user, points)| (*user, *points, false))
        .collect();
    rows.insert(
        LEADERBOARD_SELF_SLOT,
        (LEADERBOARD_SELF_NAME, u32::from(state.momentum()), true),
    );
    rows.sort_by(|a, b| b.1.cmp(&a.1));

    rows.into_iter()
        .enumerate()
        .map(|(idx, (user, points, is_self))| LeaderboardEntry {
            rank: idx + 1,
            user: user.to_string(),
            points,
            is_self,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_today;

    #[test]
    fn fresh_learner_ranks_last() {
        let state = SessionState::new(fixed_today());
        let board = leaderboard(&state);
        let names: Vec<_> = board.iter().map(|e| e.user.as_str()).collect();
        assert_eq!(names, ["Alice", "Bob", "Charlie", "Eve", "You"]);
        assert_eq!(board[4].points, 70);
        assert!(board[4].is_self);
        assert_eq!(board[4].rank, 5);
    }

    #[test]
    fn tie_keeps_listing_order() {
        let mut state = SessionState::new(fixed_today());
        // 70 -> 90 ties with Eve; "You" is listed before Eve.
        for _ in 0..4 {
            state.complete_daily_goal();
        }
        let board = leaderboard(&state);
        assert_eq!(board[3].user, "You");
        assert_eq!(board[4].user, "Eve");
    }
}
