use std::sync::{Mutex, PoisonError};

use momentum_core::catalog::{
    MICRO_GOAL_MINUTES, MICRO_GOAL_SCALE, WEEKLY_GOAL_HISTORY, WEEKLY_GOAL_TARGET, skill_score,
    video_url,
};
use momentum_core::model::{PrepMode, SessionState, Skill};
use momentum_core::views::{
    MomentumBand, WeekBar, doubt_feed, earned_badges, feedback_feed, goal_counter_label,
    leaderboard, progress_tracker, weekly_completion_ratio,
};

use crate::Clock;
use crate::pages::{
    ComebackView, DailyGoalsView, DashboardView, DoubtsView, FeedbackView, MicroGoal, Page,
    PageView, SetupView, SkillScore, VideoCard, VideosView, WeekDay, WeeklySummaryView,
};
use crate::quotes::QuotePicker;

const COMEBACK_MESSAGE: &str = "Let's restart gently with today's micro-goal";

/// Builds page views from a session snapshot.
///
/// Holds the only randomness in the app (quotes, weekly grid); views are
/// otherwise pure functions of the state and the clock's today.
#[derive(Debug)]
pub struct DashboardService {
    clock: Clock,
    picker: Mutex<QuotePicker>,
}

impl DashboardService {
    #[must_use]
    pub fn new(clock: Clock, picker: QuotePicker) -> Self {
        Self {
            clock,
            picker: Mutex::new(picker),
        }
    }

    fn with_picker<R>(&self, f: impl FnOnce(&mut QuotePicker) -> R) -> R {
        let mut picker = self.picker.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut picker)
    }

    /// Render any page. `video_filter` only matters for `Page::Videos`.
    #[must_use]
    pub fn render(
        &self,
        page: Page,
        state: &SessionState,
        video_filter: Option<Skill>,
    ) -> PageView {
        match page {
            Page::Dashboard => PageView::Dashboard(self.dashboard(state)),
            Page::DailyGoals => PageView::DailyGoals(self.daily_goals()),
            Page::WeeklySummary => PageView::WeeklySummary(self.weekly_summary(state)),
            Page::Videos => PageView::Videos(self.videos(state, video_filter)),
            Page::Doubts => PageView::Doubts(self.doubts(state)),
            Page::Feedback => PageView::Feedback(self.feedback(state)),
            Page::ComebackMode => PageView::ComebackMode(self.comeback()),
            Page::Setup => PageView::Setup(self.setup(state)),
        }
    }

    #[must_use]
    pub fn dashboard(&self, state: &SessionState) -> DashboardView {
        DashboardView {
            streak_days: state.streak(),
            goals_label: goal_counter_label(state),
            momentum: state.momentum(),
            momentum_band: MomentumBand::of(state.momentum()),
            skill_scores: Skill::ALL
                .into_iter()
                .map(|skill| SkillScore {
                    skill,
                    score: skill_score(skill),
                })
                .collect(),
            engagement_trend: WEEKLY_GOAL_HISTORY
                .iter()
                .enumerate()
                .map(|(idx, goals)| WeekBar {
                    label: format!("Week {}", idx + 1),
                    goals_completed: *goals,
                })
                .collect(),
        }
    }

    #[must_use]
    pub fn daily_goals(&self) -> DailyGoalsView {
        DailyGoalsView {
            goals: Skill::ALL
                .into_iter()
                .map(|skill| MicroGoal {
                    skill,
                    minutes: MICRO_GOAL_MINUTES,
                    fill: f64::from(MICRO_GOAL_MINUTES) / f64::from(MICRO_GOAL_SCALE),
                })
                .collect(),
        }
    }

    #[must_use]
    pub fn weekly_summary(&self, state: &SessionState) -> WeeklySummaryView {
        let week = self.with_picker(QuotePicker::week_grid);
        WeeklySummaryView {
            completed_goals: state.completed_goals(),
            target: WEEKLY_GOAL_TARGET,
            completion_ratio: weekly_completion_ratio(state),
            week: week
                .into_iter()
                .map(|(day, done)| WeekDay { day, done })
                .collect(),
            badges: earned_badges(state),
        }
    }

    #[must_use]
    pub fn videos(&self, state: &SessionState, filter: Option<Skill>) -> VideosView {
        VideosView {
            filter,
            videos: Skill::ALL
                .into_iter()
                .filter(|skill| filter.is_none_or(|wanted| wanted == *skill))
                .map(|skill| VideoCard {
                    skill,
                    url: video_url(skill),
                    watched: state.video_progress().is_watched(skill),
                })
                .collect(),
        }
    }

    #[must_use]
    pub fn doubts(&self, state: &SessionState) -> DoubtsView {
        DoubtsView {
            skills: Skill::ALL,
            feed: doubt_feed(state),
        }
    }

    #[must_use]
    pub fn feedback(&self, state: &SessionState) -> FeedbackView {
        FeedbackView {
            total_entries: state.feedback().len(),
            summary: feedback_feed(state),
        }
    }

    #[must_use]
    pub fn comeback(&self) -> ComebackView {
        ComebackView {
            message: COMEBACK_MESSAGE,
        }
    }

    #[must_use]
    pub fn setup(&self, state: &SessionState) -> SetupView {
        let today = self.clock.today();
        SetupView {
            exam_date: state.exam_date(),
            earliest_exam_date: today,
            prep_mode: state.prep_mode(),
            prep_modes: PrepMode::ALL,
            daily_time: state.daily_time(),
            quote: self.with_picker(QuotePicker::quote),
            progress: progress_tracker(state, today),
            leaderboard: leaderboard(state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use momentum_core::time::{fixed_clock, fixed_today};

    fn service(seed: u64) -> DashboardService {
        DashboardService::new(fixed_clock(), QuotePicker::seeded(seed))
    }

    #[test]
    fn dashboard_reflects_state() {
        let svc = service(1);
        let mut state = SessionState::new(fixed_today());
        state.complete_daily_goal();

        let view = svc.dashboard(&state);
        assert_eq!(view.streak_days, 4);
        assert_eq!(view.goals_label, "7/7");
        assert_eq!(view.momentum, 75);
        assert_eq!(view.momentum_band, MomentumBand::Strong);
        assert_eq!(view.skill_scores[3].score, 50);
        assert_eq!(view.engagement_trend.len(), 4);
        assert_eq!(view.engagement_trend[3].goals_completed, 7);
    }

    #[test]
    fn video_filter_narrows_list() {
        let svc = service(1);
        let mut state = SessionState::new(fixed_today());
        state.mark_video_watched(Skill::Reading);

        let all = svc.videos(&state, None);
        assert_eq!(all.videos.len(), 4);

        let reading = svc.videos(&state, Some(Skill::Reading));
        assert_eq!(reading.videos.len(), 1);
        assert!(reading.videos[0].watched);
    }

    #[test]
    fn setup_quote_is_seeded() {
        let state = SessionState::new(fixed_today());
        let a = service(9).setup(&state);
        let b = service(9).setup(&state);
        assert_eq!(a.quote, b.quote);
        assert_eq!(a.earliest_exam_date, fixed_today());
        assert_eq!(a.leaderboard.len(), 5);
    }

    #[test]
    fn daily_goals_fill_is_two_thirds() {
        let view = service(1).daily_goals();
        assert_eq!(view.goals.len(), 4);
        assert!((view.goals[0].fill - 10.0 / 15.0).abs() < f64::EPSILON);
    }

    #[test]
    fn render_dispatches_by_page() {
        let svc = service(1);
        let state = SessionState::new(fixed_today());
        assert!(matches!(
            svc.render(Page::Feedback, &state, None),
            PageView::Feedback(FeedbackView {
                total_entries: 0,
                ..
            })
        ));
        assert!(matches!(
            svc.render(Page::WeeklySummary, &state, None),
            PageView::WeeklySummary(_)
        ));
    }
}
