use std::io::{self, BufRead, Write};

use services::{DashboardService, Page, PageView, SessionService};

use crate::commands::{Command, HELP};
use crate::render;

/// Line-oriented stand-in for the dashboard UI, driving one session.
pub struct Shell {
    session: SessionService,
    dashboards: DashboardService,
    json: bool,
}

impl Shell {
    #[must_use]
    pub fn new(session: SessionService, dashboards: DashboardService, json: bool) -> Self {
        Self {
            session,
            dashboards,
            json,
        }
    }

    #[must_use]
    pub fn session(&self) -> &SessionService {
        &self.session
    }

    /// Read commands until `quit` or end of input.
    ///
    /// Bad commands are reported on `out` and the loop continues.
    ///
    /// # Errors
    ///
    /// Returns I/O errors from `input` or `out`.
    pub fn run(&self, input: impl BufRead, mut out: impl Write) -> io::Result<()> {
        self.show(Page::Dashboard, None, &mut out)?;
        for line in input.lines() {
            let line = line?;
            match Command::parse(&line) {
                Ok(None) => {}
                Ok(Some(Command::Quit)) => break,
                Ok(Some(command)) => self.execute(command, &mut out)?,
                Err(err) => {
                    tracing::debug!(%err, line = %line, "rejected command");
                    writeln!(out, "{err}")?;
                }
            }
        }
        out.flush()
    }

    fn execute(&self, command: Command, out: &mut impl Write) -> io::Result<()> {
        let message = match command {
            Command::Show { page, video_filter } => return self.show(page, video_filter, out),
            Command::State => return self.print_state(out),
            Command::Help => return writeln!(out, "{HELP}"),
            Command::Quit => return Ok(()),
            Command::Goal => render::outcome(
                "Daily goal completed! Momentum increased.",
                &self.session.complete_daily_goal(),
            ),
            Command::Comeback => render::outcome(
                "Micro-goal restarted! Keep going!",
                &self.session.restart_comeback(),
            ),
            Command::Watch(skill) => match self.session.mark_video_watched_named(&skill) {
                Some(outcome) => render::outcome(&format!("{skill} video completed!"), &outcome),
                None => format!("Nothing changed: no video for '{skill}'."),
            },
            Command::Doubt { skill, question } => render::outcome(
                &format!("Doubt submitted for {skill}!"),
                &self.session.submit_doubt(skill, &question),
            ),
            Command::Feedback { rating, comments } => {
                let outcome = self.session.submit_feedback(rating, &comments);
                let total = self.session.snapshot().feedback().len();
                render::outcome(
                    &format!("Feedback submitted! Total entries: {total}"),
                    &outcome,
                )
            }
            Command::Settings {
                exam_date,
                prep_mode,
                daily_minutes,
            } => render::outcome(
                &format!(
                    "Settings saved! Exam on {exam_date}, Mode: {}, Daily Time: {daily_minutes} mins",
                    prep_mode.label()
                ),
                &self
                    .session
                    .save_settings(exam_date, prep_mode, daily_minutes),
            ),
        };
        writeln!(out, "{message}")
    }

    fn show(
        &self,
        page: Page,
        video_filter: Option<momentum_core::model::Skill>,
        out: &mut impl Write,
    ) -> io::Result<()> {
        let view = self
            .dashboards
            .render(page, &self.session.snapshot(), video_filter);
        if self.json {
            return self.write_json(&view, out);
        }
        write!(out, "{}", render::page(&view))
    }

    fn write_json(&self, view: &PageView, out: &mut impl Write) -> io::Result<()> {
        let json = serde_json::to_string_pretty(view).map_err(io::Error::other)?;
        writeln!(out, "{json}")
    }

    fn print_state(&self, out: &mut impl Write) -> io::Result<()> {
        let state = self.session.snapshot();
        if self.json {
            let json = serde_json::to_string_pretty(&state).map_err(io::Error::other)?;
            return writeln!(out, "{json}");
        }
        write!(out, "{}", render::state(&state))
    }
}
