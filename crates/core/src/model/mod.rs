mod entries;
mod plan;
mod skill;
mod state;

pub use entries::{Doubt, FeedbackEntry, Momentum, VideoProgress};
pub use plan::{DailyMinutes, PrepMode, PrepModeParseError, StudyPlan, StudyPlanError};
pub use skill::{Skill, SkillParseError};
pub use state::{IgnoreReason, MutationOutcome, SessionState};
