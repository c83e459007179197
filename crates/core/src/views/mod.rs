//! Read-only projections over `SessionState`. Nothing here mutates.

mod feed;
mod leaderboard;
mod progress;

pub use feed::{FeedItem, doubt_feed, feedback_feed};
pub use leaderboard::{LeaderboardEntry, leaderboard};
pub use progress::{
    MomentumBand, STREAK_BADGE, WeekBar, earned_badges, goal_counter_label, progress_tracker,
    weekly_completion_ratio, weeks_passed,
};
