//! Serializable page view models handed to the shell.
//!
//! Each struct carries exactly what one page displays; the shell decides how.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use momentum_core::model::{Doubt, FeedbackEntry, PrepMode, Skill};
use momentum_core::views::{FeedItem, LeaderboardEntry, MomentumBand, WeekBar};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown page: {raw}")]
pub struct PageParseError {
    pub raw: String,
}

/// Pages the sidebar navigates between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Page {
    Dashboard,
    DailyGoals,
    WeeklySummary,
    Videos,
    Doubts,
    Feedback,
    ComebackMode,
    Setup,
}

impl Page {
    pub const ALL: [Page; 8] = [
        Page::Dashboard,
        Page::DailyGoals,
        Page::WeeklySummary,
        Page::Videos,
        Page::Doubts,
        Page::Feedback,
        Page::ComebackMode,
        Page::Setup,
    ];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::DailyGoals => "Daily Goals",
            Page::WeeklySummary => "Weekly Summary",
            Page::Videos => "Videos",
            Page::Doubts => "Doubts",
            Page::Feedback => "Feedback",
            Page::ComebackMode => "Comeback Mode",
            Page::Setup => "Calendar / Exam Setup",
        }
    }

    /// Short command-line name.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::DailyGoals => "goals",
            Page::WeeklySummary => "weekly",
            Page::Videos => "videos",
            Page::Doubts => "doubts",
            Page::Feedback => "feedback",
            Page::ComebackMode => "comeback",
            Page::Setup => "setup",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Page {
    type Err = PageParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Page::ALL
            .into_iter()
            .find(|page| {
                page.slug().eq_ignore_ascii_case(trimmed)
                    || page.title().eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| PageParseError { raw: s.to_string() })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillScore {
    pub skill: Skill,
    pub score: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub streak_days: u32,
    pub goals_label: String,
    pub momentum: u8,
    pub momentum_band: MomentumBand,
    pub skill_scores: Vec<SkillScore>,
    pub engagement_trend: Vec<WeekBar>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MicroGoal {
    pub skill: Skill,
    pub minutes: u32,
    /// Fill of the progress bar in 0.0..=1.0.
    pub fill: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyGoalsView {
    pub goals: Vec<MicroGoal>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekDay {
    pub day: &'static str,
    pub done: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklySummaryView {
    pub completed_goals: u32,
    pub target: u32,
    pub completion_ratio: f64,
    pub week: Vec<WeekDay>,
    pub badges: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoCard {
    pub skill: Skill,
    pub url: &'static str,
    pub watched: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideosView {
    pub filter: Option<Skill>,
    pub videos: Vec<VideoCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DoubtsView {
    pub skills: [Skill; 4],
    pub feed: Vec<FeedItem<Doubt>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackView {
    pub total_entries: usize,
    pub summary: Vec<FeedItem<FeedbackEntry>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComebackView {
    pub message: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetupView {
    pub exam_date: NaiveDate,
    pub earliest_exam_date: NaiveDate,
    pub prep_mode: PrepMode,
    pub prep_modes: [PrepMode; 3],
    pub daily_time: u32,
    pub quote: &'static str,
    pub progress: Vec<WeekBar>,
    pub leaderboard: Vec<LeaderboardEntry>,
}

/// Any page, tagged for JSON output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum PageView {
    Dashboard(DashboardView),
    DailyGoals(DailyGoalsView),
    WeeklySummary(WeeklySummaryView),
    Videos(VideosView),
    Doubts(DoubtsView),
    Feedback(FeedbackView),
    ComebackMode(ComebackView),
    Setup(SetupView),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_parses_slug_and_title() {
        assert_eq!("weekly".parse::<Page>().unwrap(), Page::WeeklySummary);
        assert_eq!("Comeback Mode".parse::<Page>().unwrap(), Page::ComebackMode);
        assert_eq!("SETUP".parse::<Page>().unwrap(), Page::Setup);
        assert!("settings-ish".parse::<Page>().is_err());
    }
}
