//! SKOOLACH: a text adventure about rebuilding a broken language model.

mod text;
mod tui;

use std::process;

use clap::{Parser, ValueEnum};
use sk_fiction::{GameConfig, GameSession};

#[derive(Parser)]
#[command(
    name = "skoolach",
    about = "SKOOLACH - a digital archaeology adventure",
    version
)]
struct Cli {
    /// Front end to play with
    #[arg(short, long, value_enum, default_value_t = Mode::Text)]
    mode: Mode,

    /// RNG seed for reproducible combat
    #[arg(short, long)]
    seed: Option<u64>,

    /// Log engine activity to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Line-by-line play on stdin/stdout
    Text,
    /// Full-screen terminal interface
    Visual,
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let mut config = GameConfig::default();
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    let result = GameSession::standard(config)
        .map_err(|e| format!("failed to start game: {e}"))
        .and_then(|session| match cli.mode {
            Mode::Text => text::run(session),
            Mode::Visual => tui::run(session),
        });

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
