use std::fmt;
use std::io;

use services::{Clock, DashboardService, QuotePicker, SessionRegistry, SessionService};
use tracing_subscriber::EnvFilter;

mod commands;
mod render;
mod shell;

use shell::Shell;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidSeed { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidSeed { raw } => write!(f, "invalid --seed value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn parse_seed(raw: String) -> Result<u64, ArgsError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| ArgsError::InvalidSeed { raw })
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    seed: Option<u64>,
    json: bool,
    help: bool,
}

impl Args {
    /// Flags win over `MOMENTUM_QUOTE_SEED`.
    fn parse(
        env_seed: Option<String>,
        args: &mut impl Iterator<Item = String>,
    ) -> Result<Self, ArgsError> {
        let mut parsed = Args {
            seed: env_seed.map(parse_seed).transpose()?,
            ..Args::default()
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--seed" => parsed.seed = Some(parse_seed(require_value(args, "--seed")?)?),
                "--json" => parsed.json = true,
                "--help" | "-h" => parsed.help = true,
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }
        Ok(parsed)
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  momentum [--seed <u64>] [--json]");
    eprintln!();
    eprintln!("Reads commands from stdin; type `help` once running.");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  MOMENTUM_QUOTE_SEED  seed for quote and weekly-grid picks");
    eprintln!("  MOMENTUM_LOG         log filter (falls back to RUST_LOG, then `info`)");
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("MOMENTUM_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"));
    // Logs go to stderr so page output on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let args = Args::parse(std::env::var("MOMENTUM_QUOTE_SEED").ok(), &mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    if args.help {
        print_usage();
        return Ok(());
    }

    init_logging();

    let clock = Clock::default_clock();
    let registry = SessionRegistry::new(clock);
    let (session_id, _) = registry.open();
    let session = SessionService::init(&registry, session_id);
    let picker = args.seed.map_or_else(QuotePicker::from_entropy, QuotePicker::seeded);
    tracing::info!(session = %session_id, seed = ?args.seed, json = args.json, "session started");

    let shell = Shell::new(session, DashboardService::new(clock, picker), args.json);
    shell.run(io::stdin().lock(), io::stdout().lock())?;

    let final_state = shell.session().snapshot();
    registry.end(session_id);
    tracing::info!(
        session = %session_id,
        momentum = final_state.momentum(),
        streak = final_state.streak(),
        completed_goals = final_state.completed_goals(),
        "session ended"
    );
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
