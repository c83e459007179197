//! Fixed sample content shown alongside the session state.
//!
//! None of this changes during a session.

use crate::model::Skill;

/// Sample band score per skill, for the dashboard radar chart.
#[must_use]
pub fn skill_score(skill: Skill) -> u8 {
    match skill {
        Skill::Listening => 70,
        Skill::Reading => 65,
        Skill::Writing => 60,
        Skill::Speaking => 50,
    }
}

/// Goals completed in each of the last four weeks.
pub const WEEKLY_GOAL_HISTORY: [u32; 4] = [5, 6, 4, 7];

/// Micro-goal minutes per skill and the bar scale they are drawn against.
pub const MICRO_GOAL_MINUTES: u32 = 10;
pub const MICRO_GOAL_SCALE: u32 = 15;

/// Goals per week behind the "n/7" label.
pub const WEEKLY_GOAL_TARGET: u32 = 7;

#[must_use]
pub fn video_url(skill: Skill) -> &'static str {
    match skill {
        Skill::Listening => "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
        Skill::Reading => "https://www.youtube.com/watch?v=3JZ_D3ELwOQ",
        Skill::Writing => "https://www.youtube.com/watch?v=V-_O7nl0Ii0",
        Skill::Speaking => "https://www.youtube.com/watch?v=2Z4m4lnjxkY",
    }
}

pub const QUOTES: [&str; 5] = [
    "Consistency is the key to success! 🔑",
    "Small daily progress leads to big results. 💪",
    "Your future self will thank you! 🌟",
    "Focus on progress, not perfection. 🏆",
    "Every minute counts! Keep going. ⏱️",
];

/// Other learners on the leaderboard, in listing order.
pub const LEADERBOARD_PEERS: [(&str, u32); 4] =
    [("Alice", 120), ("Bob", 110), ("Charlie", 100), ("Eve", 90)];

/// Slot the current learner takes in the listing before sorting.
pub const LEADERBOARD_SELF_SLOT: usize = 3;
pub const LEADERBOARD_SELF_NAME: &str = "You";

pub const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
