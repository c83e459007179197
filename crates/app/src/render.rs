//! Plain-text rendering of page views and mutation outcomes.

use std::fmt::Write as _;

use momentum_core::model::{IgnoreReason, MutationOutcome, SessionState};
use momentum_core::views::{MomentumBand, WeekBar};
use services::PageView;
use services::pages::{
    ComebackView, DailyGoalsView, DashboardView, DoubtsView, FeedbackView, SetupView, VideosView,
    WeeklySummaryView,
};

const BAR_WIDTH: usize = 20;

fn bar(fill: f64) -> String {
    let fill = fill.clamp(0.0, 1.0);
    // Truncation is fine for a terminal bar.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let filled = (fill * BAR_WIDTH as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

fn band_name(band: MomentumBand) -> &'static str {
    match band {
        MomentumBand::Low => "low",
        MomentumBand::Steady => "steady",
        MomentumBand::Strong => "strong",
    }
}

fn week_bars(out: &mut String, bars: &[WeekBar]) {
    let max = bars.iter().map(|b| b.goals_completed).max().unwrap_or(0).max(1);
    for week in bars {
        let _ = writeln!(
            out,
            "  {:<7} {} {}",
            week.label,
            bar(f64::from(week.goals_completed) / f64::from(max)),
            week.goals_completed
        );
    }
}

#[must_use]
pub fn page(view: &PageView) -> String {
    match view {
        PageView::Dashboard(v) => dashboard(v),
        PageView::DailyGoals(v) => daily_goals(v),
        PageView::WeeklySummary(v) => weekly_summary(v),
        PageView::Videos(v) => videos(v),
        PageView::Doubts(v) => doubts(v),
        PageView::Feedback(v) => feedback(v),
        PageView::ComebackMode(v) => comeback(v),
        PageView::Setup(v) => setup(v),
    }
}

fn dashboard(v: &DashboardView) -> String {
    let mut out = String::from("== IELTS Momentum Path Dashboard ==\n");
    let _ = writeln!(out, "Weekly Streak:   {} days", v.streak_days);
    let _ = writeln!(out, "Completed Goals: {}", v.goals_label);
    let _ = writeln!(
        out,
        "Momentum Meter:  {} {} ({})",
        bar(f64::from(v.momentum) / 100.0),
        v.momentum,
        band_name(v.momentum_band)
    );
    out.push_str("Skills:\n");
    for s in &v.skill_scores {
        let _ = writeln!(
            out,
            "  {:<9} {} {}",
            s.skill.name(),
            bar(f64::from(s.score) / 100.0),
            s.score
        );
    }
    out.push_str("4-Week Engagement Trend:\n");
    week_bars(&mut out, &v.engagement_trend);
    out
}

fn daily_goals(v: &DailyGoalsView) -> String {
    let mut out = String::from("== Today's Micro Goals ==\n");
    for goal in &v.goals {
        let _ = writeln!(
            out,
            "  {:<9} {} minutes {}",
            goal.skill.name(),
            goal.minutes,
            bar(goal.fill)
        );
    }
    out.push_str("Keep up the momentum! (`goal` to complete today's goal)\n");
    out
}

fn weekly_summary(v: &WeeklySummaryView) -> String {
    let mut out = String::from("== Weekly Summary ==\n");
    let _ = writeln!(
        out,
        "Completed {} out of {} daily goals this week",
        v.completed_goals, v.target
    );
    let days: Vec<String> = v
        .week
        .iter()
        .map(|d| format!("{} {}", d.day, if d.done { "x" } else { "-" }))
        .collect();
    let _ = writeln!(out, "  {}", days.join("  "));
    out.push_str("Badges Earned:\n");
    if v.badges.is_empty() {
        out.push_str("  (none yet)\n");
    }
    for badge in &v.badges {
        let _ = writeln!(out, "  * {badge}");
    }
    out
}

fn videos(v: &VideosView) -> String {
    let mut out = String::from("== Video Lectures ==\n");
    if let Some(skill) = v.filter {
        let _ = writeln!(out, "Filter: {skill}");
    }
    for card in &v.videos {
        let status = if card.watched {
            "watched"
        } else {
            "not watched"
        };
        let _ = writeln!(out, "  {:<9} {} [{status}]", card.skill.name(), card.url);
    }
    out
}

fn doubts(v: &DoubtsView) -> String {
    let mut out = String::from("== Doubt Feed ==\n");
    if v.feed.is_empty() {
        out.push_str("  No doubts raised yet.\n");
    }
    for entry in &v.feed {
        let _ = writeln!(
            out,
            "  {}. [{}] {}",
            entry.position, entry.item.skill, entry.item.question
        );
    }
    out
}

fn feedback(v: &FeedbackView) -> String {
    let mut out = String::from("== Feedback Summary ==\n");
    let _ = writeln!(out, "Total entries: {}", v.total_entries);
    for entry in &v.summary {
        let _ = writeln!(
            out,
            "  {}. Rating: {} stars, Comment: {}",
            entry.position, entry.item.rating, entry.item.comments
        );
    }
    out
}

fn comeback(v: &ComebackView) -> String {
    format!("== Welcome Back! ==\n{}\n(`comeback` to start today's goal)\n", v.message)
}

fn setup(v: &SetupView) -> String {
    let mut out = String::from("== Setup Your IELTS Preparation ==\n");
    let _ = writeln!(
        out,
        "Exam date:  {} (earliest {})",
        v.exam_date, v.earliest_exam_date
    );
    let _ = writeln!(out, "Prep mode:  {}", v.prep_mode.label());
    let _ = writeln!(out, "Daily time: {} mins", v.daily_time);
    let _ = writeln!(out, "\n\"{}\"\n", v.quote);
    out.push_str("Progress Tracker:\n");
    week_bars(&mut out, &v.progress);
    out.push_str("Leaderboard:\n");
    for row in &v.leaderboard {
        let marker = if row.is_self { " <" } else { "" };
        let _ = writeln!(out, "  {}. {:<8} {}{marker}", row.rank, row.user, row.points);
    }
    out
}

/// One-line acknowledgement for a shell action.
#[must_use]
pub fn outcome(applied_message: &str, outcome: &MutationOutcome) -> String {
    match outcome {
        MutationOutcome::Applied {
            momentum_gained,
            celebrate,
        } => {
            let mut line = applied_message.to_string();
            if *momentum_gained > 0 {
                let _ = write!(line, " (+{momentum_gained} momentum)");
            }
            if *celebrate {
                line.push_str(" \\o/");
            }
            line
        }
        MutationOutcome::Ignored(reason) => format!("Nothing changed: {}.", ignored(reason)),
    }
}

fn ignored(reason: &IgnoreReason) -> String {
    match reason {
        IgnoreReason::VideoAlreadyWatched(skill) => {
            format!("the {skill} video is already marked as watched")
        }
        IgnoreReason::EmptyQuestion => "the question is empty".to_string(),
        IgnoreReason::RatingOutOfRange(rating) => {
            format!("rating {rating} is outside 1-5")
        }
        IgnoreReason::InvalidSettings(err) => err.to_string(),
        other => format!("{other:?}"),
    }
}

/// Compact dump of every state field.
#[must_use]
pub fn state(state: &SessionState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "streak:          {}", state.streak());
    let _ = writeln!(out, "completed_goals: {}", state.completed_goals());
    let _ = writeln!(out, "momentum:        {}", state.momentum());
    let videos: Vec<String> = state
        .video_progress()
        .iter()
        .map(|(skill, watched)| format!("{skill}={watched}"))
        .collect();
    let _ = writeln!(out, "video_progress:  {}", videos.join(", "));
    let _ = writeln!(out, "doubts:          {}", state.doubts().len());
    let _ = writeln!(out, "feedback:        {}", state.feedback().len());
    let _ = writeln!(out, "exam_date:       {}", state.exam_date());
    let _ = writeln!(out, "prep_mode:       {}", state.prep_mode().label());
    let _ = writeln!(out, "daily_time:      {}", state.daily_time());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use momentum_core::model::Skill;

    #[test]
    fn bar_is_fixed_width() {
        assert_eq!(bar(0.0).len(), BAR_WIDTH + 2);
        assert_eq!(bar(1.5), format!("[{}]", "#".repeat(BAR_WIDTH)));
    }

    #[test]
    fn applied_outcome_mentions_gain_and_celebration() {
        let line = outcome(
            "Daily goal completed!",
            &MutationOutcome::Applied {
                momentum_gained: 5,
                celebrate: true,
            },
        );
        assert_eq!(line, "Daily goal completed! (+5 momentum) \\o/");
    }

    #[test]
    fn ignored_outcome_explains_reason() {
        let line = outcome(
            "unused",
            &MutationOutcome::Ignored(IgnoreReason::VideoAlreadyWatched(Skill::Reading)),
        );
        assert_eq!(
            line,
            "Nothing changed: the Reading video is already marked as watched."
        );
    }
}
