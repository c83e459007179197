use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown preparation mode: {raw}")]
pub struct PrepModeParseError {
    pub raw: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StudyPlanError {
    #[error("exam date {exam_date} is before today ({today})")]
    ExamDateInPast { exam_date: NaiveDate, today: NaiveDate },

    #[error("daily time must be between 10 and 300 minutes, got {0}")]
    DailyTimeOutOfRange(u32),

    #[error("daily time must be a multiple of 5 minutes, got {0}")]
    DailyTimeOffStep(u32),
}

//
// ─── PREP MODE ─────────────────────────────────────────────────────────────────
//

/// How intensely the learner plans to prepare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PrepMode {
    Intensive,
    #[default]
    Regular,
    Light,
}

impl PrepMode {
    pub const ALL: [PrepMode; 3] = [PrepMode::Intensive, PrepMode::Regular, PrepMode::Light];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            PrepMode::Intensive => "Intensive",
            PrepMode::Regular => "Regular",
            PrepMode::Light => "Light",
        }
    }

    /// Label shown on the setup page selector.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            PrepMode::Intensive => "Intensive (2+ hrs/day)",
            PrepMode::Regular => "Regular (1 hr/day)",
            PrepMode::Light => "Light (30 mins/day)",
        }
    }
}

impl fmt::Display for PrepMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PrepMode {
    type Err = PrepModeParseError;

    /// Accepts either the bare mode name (any case) or the full selector label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        PrepMode::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(trimmed) || mode.label() == trimmed)
            .ok_or_else(|| PrepModeParseError { raw: s.to_string() })
    }
}

//
// ─── DAILY MINUTES ─────────────────────────────────────────────────────────────
//

/// Daily study time in minutes: 10..=300 in steps of 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct DailyMinutes(u32);

impl DailyMinutes {
    pub const MIN: u32 = 10;
    pub const MAX: u32 = 300;
    pub const STEP: u32 = 5;

    /// # Errors
    ///
    /// Returns `StudyPlanError` if the value is outside 10..=300 or not a multiple of 5.
    pub fn new(minutes: u32) -> Result<Self, StudyPlanError> {
        if !(Self::MIN..=Self::MAX).contains(&minutes) {
            return Err(StudyPlanError::DailyTimeOutOfRange(minutes));
        }
        if minutes % Self::STEP != 0 {
            return Err(StudyPlanError::DailyTimeOffStep(minutes));
        }
        Ok(Self(minutes))
    }

    #[must_use]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for DailyMinutes {
    fn default() -> Self {
        Self(60)
    }
}

impl TryFrom<u32> for DailyMinutes {
    type Error = StudyPlanError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DailyMinutes> for u32 {
    fn from(value: DailyMinutes) -> Self {
        value.0
    }
}

//
// ─── STUDY PLAN ────────────────────────────────────────────────────────────────
//

/// Exam setup: the three settings replaced together by a save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyPlan {
    exam_date: NaiveDate,
    prep_mode: PrepMode,
    daily_time: DailyMinutes,
}

impl StudyPlan {
    /// Days between session start and the default exam date.
    pub const DEFAULT_LEAD_DAYS: i64 = 30;

    /// Plan a fresh session starts with: exam in 30 days, regular mode, one hour a day.
    #[must_use]
    pub fn default_for(today: NaiveDate) -> Self {
        Self {
            exam_date: today + Duration::days(Self::DEFAULT_LEAD_DAYS),
            prep_mode: PrepMode::default(),
            daily_time: DailyMinutes::default(),
        }
    }

    /// # Errors
    ///
    /// Returns `StudyPlanError` if the exam date is before `today` or the daily
    /// time is not a valid `DailyMinutes` value.
    pub fn new(
        exam_date: NaiveDate,
        prep_mode: PrepMode,
        daily_minutes: u32,
        today: NaiveDate,
    ) -> Result<Self, StudyPlanError> {
        if exam_date < today {
            return Err(StudyPlanError::ExamDateInPast { exam_date, today });
        }
        let daily_time = DailyMinutes::new(daily_minutes)?;
        Ok(Self {
            exam_date,
            prep_mode,
            daily_time,
        })
    }

    #[must_use]
    pub fn exam_date(&self) -> NaiveDate {
        self.exam_date
    }

    #[must_use]
    pub fn prep_mode(&self) -> PrepMode {
        self.prep_mode
    }

    #[must_use]
    pub fn daily_time(&self) -> DailyMinutes {
        self.daily_time
    }
}
