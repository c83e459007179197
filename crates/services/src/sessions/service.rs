use chrono::NaiveDate;
use momentum_core::model::{IgnoreReason, MutationOutcome, PrepMode, SessionState, Skill};

use super::registry::{SessionHandle, SessionId, SessionRegistry};
use crate::Clock;
use crate::error::ServiceError;

/// Named entry points the shell calls for user gestures on one session.
///
/// Wraps the session handle so every mutation runs under the session lock and
/// gets logged. Guards never surface as errors: ignored calls come back as
/// `MutationOutcome::Ignored` and are logged at debug level.
#[derive(Debug, Clone)]
pub struct SessionService {
    id: SessionId,
    handle: SessionHandle,
    clock: Clock,
}

impl SessionService {
    #[must_use]
    pub fn new(id: SessionId, handle: SessionHandle, clock: Clock) -> Self {
        Self { id, handle, clock }
    }

    /// Initialize (or rejoin) `id` in the registry.
    #[must_use]
    pub fn init(registry: &SessionRegistry, id: SessionId) -> Self {
        Self::new(id, registry.init(id), registry.clock())
    }

    /// # Errors
    ///
    /// Returns `ServiceError::UnknownSession` if `id` is not live.
    pub fn attach(registry: &SessionRegistry, id: SessionId) -> Result<Self, ServiceError> {
        Ok(Self::new(id, registry.get(id)?, registry.clock()))
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        self.handle.snapshot()
    }

    pub fn complete_daily_goal(&self) -> MutationOutcome {
        self.apply("complete_daily_goal", SessionState::complete_daily_goal)
    }

    pub fn restart_comeback(&self) -> MutationOutcome {
        self.apply("restart_comeback", SessionState::restart_comeback)
    }

    pub fn mark_video_watched(&self, skill: Skill) -> MutationOutcome {
        self.apply("mark_video_watched", |state| state.mark_video_watched(skill))
    }

    /// Same as [`Self::mark_video_watched`] for a skill given by name.
    ///
    /// Returns `None` when the name matches no skill; state is untouched.
    pub fn mark_video_watched_named(&self, skill: &str) -> Option<MutationOutcome> {
        match skill.parse::<Skill>() {
            Ok(skill) => Some(self.mark_video_watched(skill)),
            Err(err) => {
                tracing::debug!(session = %self.id, %err, "mark_video_watched ignored");
                None
            }
        }
    }

    pub fn submit_doubt(&self, skill: Skill, question: &str) -> MutationOutcome {
        self.apply("submit_doubt", |state| state.submit_doubt(skill, question))
    }

    pub fn submit_feedback(&self, rating: u8, comments: &str) -> MutationOutcome {
        self.apply("submit_feedback", |state| {
            state.submit_feedback(rating, comments)
        })
    }

    /// Save exam setup, checking the exam date against the session clock's today.
    pub fn save_settings(
        &self,
        exam_date: NaiveDate,
        prep_mode: PrepMode,
        daily_minutes: u32,
    ) -> MutationOutcome {
        let today = self.clock.today();
        self.apply("save_settings", |state| {
            state.save_settings(exam_date, prep_mode, daily_minutes, today)
        })
    }

    fn apply(
        &self,
        action: &'static str,
        f: impl FnOnce(&mut SessionState) -> MutationOutcome,
    ) -> MutationOutcome {
        let (outcome, momentum) = self.handle.with(|state| {
            let outcome = f(state);
            (outcome, state.momentum())
        });
        match &outcome {
            MutationOutcome::Applied {
                momentum_gained,
                celebrate,
            } => tracing::info!(
                session = %self.id,
                action,
                momentum_gained,
                momentum,
                celebrate,
                "mutation applied"
            ),
            MutationOutcome::Ignored(reason) => tracing::debug!(
                session = %self.id,
                action,
                reason = %describe(reason),
                "mutation ignored"
            ),
        }
        outcome
    }
}

fn describe(reason: &IgnoreReason) -> String {
    match reason {
        IgnoreReason::VideoAlreadyWatched(skill) => format!("{skill} video already watched"),
        IgnoreReason::EmptyQuestion => "empty question".to_string(),
        IgnoreReason::RatingOutOfRange(rating) => format!("rating {rating} out of range"),
        IgnoreReason::InvalidSettings(err) => err.to_string(),
        _ => format!("{reason:?}"),
    }
}
