use chrono::NaiveDate;
use thiserror::Error;

use momentum_core::model::{PrepMode, PrepModeParseError, Skill, SkillParseError};
use services::{Page, PageParseError};

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("unknown command: {0} (try `help`)")]
    Unknown(String),
    #[error("`{command}` needs {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },
    #[error("rating must be a whole number, got {0}")]
    InvalidRating(String),
    #[error("exam date must look like YYYY-MM-DD, got {0}")]
    InvalidDate(String),
    #[error("daily time must be a whole number of minutes, got {0}")]
    InvalidMinutes(String),
    #[error(transparent)]
    Page(#[from] PageParseError),
    #[error(transparent)]
    Domain(#[from] momentum_core::Error),
}

impl From<SkillParseError> for CommandError {
    fn from(err: SkillParseError) -> Self {
        Self::Domain(err.into())
    }
}

impl From<PrepModeParseError> for CommandError {
    fn from(err: PrepModeParseError) -> Self {
        Self::Domain(err.into())
    }
}

/// One line of shell input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Show {
        page: Page,
        video_filter: Option<Skill>,
    },
    Goal,
    Comeback,
    /// Skill kept raw: unknown names are a silent no-op, not a parse error.
    Watch(String),
    Doubt {
        skill: Skill,
        question: String,
    },
    Feedback {
        rating: u8,
        comments: String,
    },
    Settings {
        exam_date: NaiveDate,
        prep_mode: PrepMode,
        daily_minutes: u32,
    },
    State,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line. Blank lines yield `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns `CommandError` for unknown verbs and malformed arguments.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (verb, rest) = split_word(line);

        let command = match verb.to_ascii_lowercase().as_str() {
            "page" | "show" => parse_show(rest)?,
            "goal" => Command::Goal,
            "comeback" => Command::Comeback,
            "watch" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument {
                        command: "watch",
                        what: "a skill",
                    });
                }
                Command::Watch(rest.to_string())
            }
            "doubt" => {
                let (skill, question) = split_word(rest);
                if skill.is_empty() {
                    return Err(CommandError::MissingArgument {
                        command: "doubt",
                        what: "a skill and a question",
                    });
                }
                Command::Doubt {
                    skill: skill.parse::<Skill>()?,
                    question: question.to_string(),
                }
            }
            "feedback" => {
                let (rating, comments) = split_word(rest);
                if rating.is_empty() {
                    return Err(CommandError::MissingArgument {
                        command: "feedback",
                        what: "a rating from 1 to 5",
                    });
                }
                let rating = rating
                    .parse::<u8>()
                    .map_err(|_| CommandError::InvalidRating(rating.to_string()))?;
                Command::Feedback {
                    rating,
                    comments: comments.to_string(),
                }
            }
            "settings" => parse_settings(rest)?,
            "state" => Command::State,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(Some(command))
    }
}

fn split_word(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (input, ""),
    }
}

fn parse_show(rest: &str) -> Result<Command, CommandError> {
    let (name, filter) = split_word(rest);
    if name.is_empty() {
        return Err(CommandError::MissingArgument {
            command: "page",
            what: "a page name",
        });
    }
    let page = name.parse::<Page>()?;
    let video_filter = match (page, filter) {
        (Page::Videos, f) if !f.is_empty() && !f.eq_ignore_ascii_case("all") => {
            Some(f.parse::<Skill>()?)
        }
        _ => None,
    };
    Ok(Command::Show { page, video_filter })
}

fn parse_settings(rest: &str) -> Result<Command, CommandError> {
    let missing = CommandError::MissingArgument {
        command: "settings",
        what: "<YYYY-MM-DD> <mode> <minutes>",
    };
    let (date, rest) = split_word(rest);
    // Minutes are the last word; the mode in between may be a multi-word label.
    let (mode, minutes) = rest
        .rsplit_once(char::is_whitespace)
        .map_or((rest, ""), |(mode, minutes)| (mode.trim(), minutes));
    if date.is_empty() || mode.is_empty() || minutes.is_empty() {
        return Err(missing);
    }

    let exam_date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| CommandError::InvalidDate(date.to_string()))?;
    let prep_mode = mode.parse::<PrepMode>()?;
    let daily_minutes = minutes
        .parse::<u32>()
        .map_err(|_| CommandError::InvalidMinutes(minutes.to_string()))?;

    Ok(Command::Settings {
        exam_date,
        prep_mode,
        daily_minutes,
    })
}

pub const HELP: &str = "\
Commands:
  page <name> [skill|all]   show a page: dashboard, goals, weekly, videos, doubts,
                            feedback, comeback, setup (videos takes a skill filter)
  goal                      complete today's daily goal
  comeback                  restart with today's micro-goal
  watch <skill>             mark a skill video as watched
  doubt <skill> <question>  raise a doubt
  feedback <1-5> [comments] leave feedback
  settings <YYYY-MM-DD> <mode> <minutes>
                            mode: intensive, regular, light or a full label
  state                     print the raw session state
  help                      this text
  quit                      end the session";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_line_is_nothing() {
        assert_eq!(Command::parse("   ").unwrap(), None);
    }

    #[test]
    fn parses_simple_verbs() {
        assert_eq!(Command::parse("goal").unwrap(), Some(Command::Goal));
        assert_eq!(Command::parse("COMEBACK").unwrap(), Some(Command::Comeback));
        assert_eq!(Command::parse("quit").unwrap(), Some(Command::Quit));
    }

    #[test]
    fn parses_doubt_with_multiword_question() {
        let cmd = Command::parse("doubt writing How do I  plan Task 2?").unwrap();
        assert_eq!(
            cmd,
            Some(Command::Doubt {
                skill: Skill::Writing,
                question: "How do I  plan Task 2?".into(),
            })
        );
    }

    #[test]
    fn doubt_without_question_still_parses() {
        let cmd = Command::parse("doubt reading").unwrap();
        assert_eq!(
            cmd,
            Some(Command::Doubt {
                skill: Skill::Reading,
                question: String::new(),
            })
        );
    }

    #[test]
    fn parses_feedback() {
        assert_eq!(
            Command::parse("feedback 4 pretty good").unwrap(),
            Some(Command::Feedback {
                rating: 4,
                comments: "pretty good".into()
            })
        );
        assert!(matches!(
            Command::parse("feedback five"),
            Err(CommandError::InvalidRating(_))
        ));
    }

    #[test]
    fn parses_video_page_filter() {
        assert_eq!(
            Command::parse("page videos speaking").unwrap(),
            Some(Command::Show {
                page: Page::Videos,
                video_filter: Some(Skill::Speaking)
            })
        );
        assert_eq!(
            Command::parse("show videos all").unwrap(),
            Some(Command::Show {
                page: Page::Videos,
                video_filter: None
            })
        );
    }

    #[test]
    fn parses_settings() {
        let cmd = Command::parse("settings 2030-01-02 light 30").unwrap();
        assert_eq!(
            cmd,
            Some(Command::Settings {
                exam_date: NaiveDate::from_ymd_opt(2030, 1, 2).unwrap(),
                prep_mode: PrepMode::Light,
                daily_minutes: 30,
            })
        );
        assert!(matches!(
            Command::parse("settings 02/01/2030 light 30"),
            Err(CommandError::InvalidDate(_))
        ));
        assert!(matches!(
            Command::parse("settings 2030-01-02 light"),
            Err(CommandError::MissingArgument { .. })
        ));
    }

    #[test]
    fn settings_accept_full_mode_label() {
        assert_eq!(
            Command::parse("settings 2030-01-02 Light (30 mins/day) 30").unwrap(),
            Some(Command::Settings {
                exam_date: NaiveDate::from_ymd_opt(2030, 1, 2).unwrap(),
                prep_mode: PrepMode::Light,
                daily_minutes: 30,
            })
        );
        assert_eq!(
            Command::parse("settings 2030-01-02   Intensive (2+ hrs/day)   120").unwrap(),
            Some(Command::Settings {
                exam_date: NaiveDate::from_ymd_opt(2030, 1, 2).unwrap(),
                prep_mode: PrepMode::Intensive,
                daily_minutes: 120,
            })
        );
    }

    #[test]
    fn unknown_skill_is_domain_error() {
        let err = Command::parse("doubt grammar why?").unwrap_err();
        assert_eq!(err.to_string(), "unknown skill: grammar");
    }

    #[test]
    fn unknown_verb_is_error() {
        assert!(matches!(
            Command::parse("dance"),
            Err(CommandError::Unknown(verb)) if verb == "dance"
        ));
    }
}
