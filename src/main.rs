//! Josephus Circle entry point
//!
//! Parses the difficulty, sets up logging and runs the game in the terminal.

use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;

use josephus_circle::app::{self, Outcome};
use josephus_circle::renderer::TerminalRenderer;
use josephus_circle::sim::{GameSession, SeededCounts};
use josephus_circle::{Difficulty, Settings};

/// Environment variable naming an optional JSON settings file
const SETTINGS_ENV: &str = "JOSEPHUS_SETTINGS";

fn parse_difficulty(value: &str) -> Result<Difficulty, String> {
    Difficulty::from_str(value)
        .ok_or_else(|| format!("expected one of: easy, normal, hard (got '{value}')"))
}

/// Stand in a circle of doomed soldiers and pick the one spot that survives.
///
/// Every second soldier is killed by the one before them, starting from the
/// white soldier, until one is left.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Number of soldiers: easy 2-10, normal 11-25, hard 50-100
    #[arg(value_name = "easy|normal|hard", value_parser = parse_difficulty)]
    difficulty: Difficulty,
    /// Print details
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn seed_from_clock() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    let difficulty = args.difficulty;
    let settings_path = std::env::var_os(SETTINGS_ENV).map(PathBuf::from);
    let settings = Settings::load_or_default(settings_path.as_deref());
    let step_delay = Duration::from_millis(settings.animation_step_ms);

    let seed = seed_from_clock();
    log::debug!("Count seed: {}", seed);

    let mut session = GameSession::new(settings, difficulty, SeededCounts::new(seed))
        .context("failed to start a session")?;
    let mut renderer = TerminalRenderer::stdio(step_delay);

    match app::run(&mut session, &mut renderer)? {
        Outcome::Won { attempts } => println!("Congrats, you win! (retries: {})", attempts),
        Outcome::Quit { attempts } => println!("Game over after {} retries.", attempts),
        Outcome::Abandoned { .. } => println!("Bye."),
    }
    Ok(())
}
