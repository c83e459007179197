use thiserror::Error;

use crate::model::{PrepModeParseError, SkillParseError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Skill(#[from] SkillParseError),
    #[error(transparent)]
    PrepMode(#[from] PrepModeParseError),
}
