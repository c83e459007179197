use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown skill: {raw}")]
pub struct SkillParseError {
    pub raw: String,
}

/// One of the four IELTS skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Skill {
    Listening,
    Reading,
    Writing,
    Speaking,
}

impl Skill {
    /// All skills in display order.
    pub const ALL: [Skill; 4] = [
        Skill::Listening,
        Skill::Reading,
        Skill::Writing,
        Skill::Speaking,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Skill::Listening => "Listening",
            Skill::Reading => "Reading",
            Skill::Writing => "Writing",
            Skill::Speaking => "Speaking",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Skill::Listening => 0,
            Skill::Reading => 1,
            Skill::Writing => 2,
            Skill::Speaking => 3,
        }
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Skill {
    type Err = SkillParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Skill::ALL
            .into_iter()
            .find(|skill| skill.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| SkillParseError { raw: s.to_string() })
    }
}
