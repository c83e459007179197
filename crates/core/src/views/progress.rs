use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::catalog::WEEKLY_GOAL_TARGET;
use crate::model::SessionState;

pub const STREAK_BADGE: &str = "3-Day Streak Badge";
const STREAK_BADGE_THRESHOLD: u32 = 3;

/// Share of the weekly goal target reached. Can exceed 1.0.
#[must_use]
pub fn weekly_completion_ratio(state: &SessionState) -> f64 {
    f64::from(state.completed_goals()) / f64::from(WEEKLY_GOAL_TARGET)
}

/// "n/7" label for the completed-goals metric.
#[must_use]
pub fn goal_counter_label(state: &SessionState) -> String {
    format!("{}/{}", state.completed_goals(), WEEKLY_GOAL_TARGET)
}

/// Badges the state currently qualifies for. Recomputed on every call.
#[must_use]
pub fn earned_badges(state: &SessionState) -> Vec<&'static str> {
    let mut badges = Vec::new();
    if state.streak() >= STREAK_BADGE_THRESHOLD {
        badges.push(STREAK_BADGE);
    }
    badges
}

/// Colour bucket of the momentum gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MomentumBand {
    Low,
    Steady,
    Strong,
}

impl MomentumBand {
    #[must_use]
    pub fn of(momentum: u8) -> Self {
        match momentum {
            0..50 => MomentumBand::Low,
            50..75 => MomentumBand::Steady,
            _ => MomentumBand::Strong,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekBar {
    pub label: String,
    pub goals_completed: u32,
}

/// Weeks of the current month elapsed so far, capped at four.
#[must_use]
pub fn weeks_passed(today: NaiveDate) -> u32 {
    ((today.day() - 1) / 7 + 1).min(4)
}

/// Progress tracker bars: one per elapsed week, each showing the current goal count.
#[must_use]
pub fn progress_tracker(state: &SessionState, today: NaiveDate) -> Vec<WeekBar> {
    (1..=weeks_passed(today))
        .map(|week| WeekBar {
            label: format!("Week {week}"),
            goals_completed: state.completed_goals(),
        })
        .collect()
}
