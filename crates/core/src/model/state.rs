use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::{
    Doubt, FeedbackEntry, Momentum, PrepMode, Skill, StudyPlan, StudyPlanError, VideoProgress,
};

//
// ─── OUTCOMES ──────────────────────────────────────────────────────────────────
//

/// Why a mutation left the state untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum IgnoreReason {
    VideoAlreadyWatched(Skill),
    EmptyQuestion,
    RatingOutOfRange(u8),
    InvalidSettings(StudyPlanError),
}

/// Result of a user-triggered mutation.
///
/// Never an error: guards turn into `Ignored`. `celebrate` is a presentation
/// hint for the shell and carries no state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    Applied { momentum_gained: u8, celebrate: bool },
    Ignored(IgnoreReason),
}

impl MutationOutcome {
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, MutationOutcome::Applied { .. })
    }

    #[must_use]
    pub fn celebrate(&self) -> bool {
        matches!(self, MutationOutcome::Applied { celebrate: true, .. })
    }

    fn applied(momentum_gained: u8) -> Self {
        Self::Applied {
            momentum_gained,
            celebrate: false,
        }
    }
}

//
// ─── SESSION STATE ─────────────────────────────────────────────────────────────
//

/// All progress for one interactive session.
///
/// Created with fixed defaults and changed only through the mutation methods
/// below. Counters never decrease, lists are append-only, and momentum stays
/// within 0..=100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    video_progress: VideoProgress,
    doubts: Vec<Doubt>,
    feedback: Vec<FeedbackEntry>,
    streak: u32,
    completed_goals: u32,
    momentum: Momentum,
    plan: StudyPlan,
}

impl SessionState {
    pub const DEFAULT_STREAK: u32 = 3;
    pub const DEFAULT_COMPLETED_GOALS: u32 = 6;

    pub const GOAL_MOMENTUM: u8 = 5;
    pub const VIDEO_MOMENTUM: u8 = 3;
    pub const DOUBT_MOMENTUM: u8 = 2;

    /// Fresh state for a session starting on `today`.
    #[must_use]
    pub fn new(today: NaiveDate) -> Self {
        Self {
            video_progress: VideoProgress::default(),
            doubts: Vec::new(),
            feedback: Vec::new(),
            streak: Self::DEFAULT_STREAK,
            completed_goals: Self::DEFAULT_COMPLETED_GOALS,
            momentum: Momentum::default(),
            plan: StudyPlan::default_for(today),
        }
    }

    // Accessors
    #[must_use]
    pub fn video_progress(&self) -> &VideoProgress {
        &self.video_progress
    }

    /// Doubts in insertion order.
    #[must_use]
    pub fn doubts(&self) -> &[Doubt] {
        &self.doubts
    }

    /// Feedback in insertion order.
    #[must_use]
    pub fn feedback(&self) -> &[FeedbackEntry] {
        &self.feedback
    }

    #[must_use]
    pub fn streak(&self) -> u32 {
        self.streak
    }

    #[must_use]
    pub fn completed_goals(&self) -> u32 {
        self.completed_goals
    }

    #[must_use]
    pub fn momentum(&self) -> u8 {
        self.momentum.get()
    }

    #[must_use]
    pub fn exam_date(&self) -> NaiveDate {
        self.plan.exam_date()
    }

    #[must_use]
    pub fn prep_mode(&self) -> PrepMode {
        self.plan.prep_mode()
    }

    #[must_use]
    pub fn daily_time(&self) -> u32 {
        self.plan.daily_time().get()
    }

    // Mutations

    /// Count one finished daily goal: goals and streak +1, momentum +5.
    ///
    /// The streak is bumped unconditionally; missed days are not detected.
    pub fn complete_daily_goal(&mut self) -> MutationOutcome {
        self.completed_goals = self.completed_goals.saturating_add(1);
        self.streak = self.streak.saturating_add(1);
        let momentum_gained = self.momentum.raise(Self::GOAL_MOMENTUM);
        MutationOutcome::Applied {
            momentum_gained,
            celebrate: true,
        }
    }

    /// Comeback-mode entry point. Same effect as [`Self::complete_daily_goal`].
    pub fn restart_comeback(&mut self) -> MutationOutcome {
        self.complete_daily_goal()
    }

    pub fn mark_video_watched(&mut self, skill: Skill) -> MutationOutcome {
        if !self.video_progress.mark(skill) {
            return MutationOutcome::Ignored(IgnoreReason::VideoAlreadyWatched(skill));
        }
        MutationOutcome::applied(self.momentum.raise(Self::VIDEO_MOMENTUM))
    }

    /// Append a doubt. Only the empty string is ignored; whitespace is kept as typed.
    pub fn submit_doubt(&mut self, skill: Skill, question: impl Into<String>) -> MutationOutcome {
        let question = question.into();
        if question.is_empty() {
            return MutationOutcome::Ignored(IgnoreReason::EmptyQuestion);
        }
        self.doubts.push(Doubt { skill, question });
        MutationOutcome::applied(self.momentum.raise(Self::DOUBT_MOMENTUM))
    }

    /// Append feedback. Momentum rises by the rating itself.
    pub fn submit_feedback(&mut self, rating: u8, comments: impl Into<String>) -> MutationOutcome {
        if !FeedbackEntry::is_valid_rating(rating) {
            return MutationOutcome::Ignored(IgnoreReason::RatingOutOfRange(rating));
        }
        self.feedback.push(FeedbackEntry {
            rating,
            comments: comments.into(),
        });
        MutationOutcome::applied(self.momentum.raise(rating))
    }

    /// Replace exam date, mode and daily time together, or not at all.
    pub fn save_settings(
        &mut self,
        exam_date: NaiveDate,
        prep_mode: PrepMode,
        daily_minutes: u32,
        today: NaiveDate,
    ) -> MutationOutcome {
        match StudyPlan::new(exam_date, prep_mode, daily_minutes, today) {
            Ok(plan) => {
                self.plan = plan;
                MutationOutcome::applied(0)
            }
            Err(err) => MutationOutcome::Ignored(IgnoreReason::InvalidSettings(err)),
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_today;
    use chrono::Duration;

    fn fresh() -> SessionState {
        SessionState::new(fixed_today())
    }

    #[test]
    fn fresh_state_has_defaults() {
        let state = fresh();
        assert_eq!(state.momentum(), 70);
        assert_eq!(state.streak(), 3);
        assert_eq!(state.completed_goals(), 6);
        assert!(state.doubts().is_empty());
        assert!(state.feedback().is_empty());
        assert_eq!(state.video_progress().watched_count(), 0);
        assert_eq!(state.exam_date(), fixed_today() + Duration::days(30));
        assert_eq!(state.prep_mode(), PrepMode::Regular);
        assert_eq!(state.daily_time(), 60);
    }

    #[test]
    fn three_goals_from_fresh() {
        let mut state = fresh();
        for _ in 0..3 {
            let outcome = state.complete_daily_goal();
            assert!(outcome.celebrate());
        }
        assert_eq!(state.momentum(), 85);
        assert_eq!(state.streak(), 6);
        assert_eq!(state.completed_goals(), 9);
    }

    #[test]
    fn goals_increase_by_exactly_one() {
        let mut state = fresh();
        for _ in 0..20 {
            let (goals, streak) = (state.completed_goals(), state.streak());
            state.complete_daily_goal();
            assert_eq!(state.completed_goals(), goals + 1);
            assert_eq!(state.streak(), streak + 1);
            assert!(state.momentum() <= 100);
        }
        assert_eq!(state.momentum(), 100);
    }

    #[test]
    fn comeback_matches_daily_goal() {
        let mut a = fresh();
        let mut b = fresh();
        assert_eq!(a.complete_daily_goal(), b.restart_comeback());
        assert_eq!(a, b);
    }

    #[test]
    fn watching_video_twice_is_noop() {
        let mut state = fresh();
        let first = state.mark_video_watched(Skill::Listening);
        assert_eq!(
            first,
            MutationOutcome::Applied {
                momentum_gained: 3,
                celebrate: false
            }
        );
        assert!(state.video_progress().is_watched(Skill::Listening));
        assert_eq!(state.momentum(), 73);

        let before = state.clone();
        let second = state.mark_video_watched(Skill::Listening);
        assert_eq!(
            second,
            MutationOutcome::Ignored(IgnoreReason::VideoAlreadyWatched(Skill::Listening))
        );
        assert_eq!(state, before);
    }

    #[test]
    fn empty_doubt_is_ignored() {
        let mut state = fresh();
        assert_eq!(
            state.submit_doubt(Skill::Writing, ""),
            MutationOutcome::Ignored(IgnoreReason::EmptyQuestion)
        );
        assert!(state.doubts().is_empty());
        assert_eq!(state.momentum(), 70);
    }

    #[test]
    fn whitespace_doubt_is_appended() {
        let mut state = fresh();
        assert!(state.submit_doubt(Skill::Reading, "   ").is_applied());
        assert_eq!(state.doubts().len(), 1);
        assert_eq!(state.doubts()[0].question, "   ");
        assert_eq!(state.momentum(), 72);
    }

    #[test]
    fn doubt_appends_and_raises_momentum() {
        let mut state = fresh();
        state.submit_doubt(Skill::Writing, "Task 2 structure?");
        state.submit_doubt(Skill::Speaking, "Part 3 timing?");
        assert_eq!(state.doubts().len(), 2);
        assert_eq!(state.doubts()[1].skill, Skill::Speaking);
        assert_eq!(state.momentum(), 74);
    }

    #[test]
    fn feedback_keeps_insertion_order_and_clamps() {
        let mut state = fresh();
        state.submit_feedback(5, "great");
        assert_eq!(state.momentum(), 75);
        state.submit_feedback(1, "ok");
        assert_eq!(state.momentum(), 76);
        assert_eq!(
            state.feedback(),
            &[
                FeedbackEntry {
                    rating: 5,
                    comments: "great".into()
                },
                FeedbackEntry {
                    rating: 1,
                    comments: "ok".into()
                },
            ]
        );

        for _ in 0..10 {
            state.submit_feedback(5, "");
        }
        assert_eq!(state.momentum(), 100);
        assert_eq!(state.feedback().len(), 12);
        assert_eq!(state.feedback().last().unwrap().rating, 5);
    }

    #[test]
    fn feedback_rating_out_of_range_is_ignored() {
        let mut state = fresh();
        assert_eq!(
            state.submit_feedback(0, "bad"),
            MutationOutcome::Ignored(IgnoreReason::RatingOutOfRange(0))
        );
        assert!(!state.submit_feedback(6, "too good").is_applied());
        assert!(state.feedback().is_empty());
    }

    #[test]
    fn settings_accept_today_and_reject_past() {
        let today = fixed_today();
        let mut state = fresh();

        let outcome = state.save_settings(today, PrepMode::Intensive, 120, today);
        assert!(outcome.is_applied());
        assert_eq!(state.exam_date(), today);
        assert_eq!(state.prep_mode(), PrepMode::Intensive);
        assert_eq!(state.daily_time(), 120);

        let before = state.clone();
        let outcome = state.save_settings(today - Duration::days(1), PrepMode::Light, 30, today);
        assert!(!outcome.is_applied());
        assert_eq!(state, before);
    }

    #[test]
    fn settings_are_all_or_nothing() {
        let today = fixed_today();
        let mut state = fresh();
        let before = state.clone();

        let outcome = state.save_settings(today + Duration::days(3), PrepMode::Light, 301, today);
        assert_eq!(
            outcome,
            MutationOutcome::Ignored(IgnoreReason::InvalidSettings(
                StudyPlanError::DailyTimeOutOfRange(301)
            ))
        );
        assert_eq!(state, before);
    }

    #[test]
    fn settings_do_not_touch_momentum() {
        let today = fixed_today();
        let mut state = fresh();
        state.save_settings(today, PrepMode::Light, 30, today);
        assert_eq!(state.momentum(), 70);
    }
}
