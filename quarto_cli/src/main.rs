//! Command-line interface for the Quarto engine: parses options,
//! starts the logger, and runs the interactive game driver.

mod driver;

use clap::Parser;
use flexi_logger::Logger;
use quarto_core::{Board, QuartoRng};

/// Play a game of Quarto against the built-in search, or watch it
/// play itself.
#[derive(Parser, Debug)]
#[command(name = "quarto", version, about)]
struct Cli {
    /// Enable the advanced rule: a filled 2x2 block also wins.
    #[arg(long, default_value_t = false)]
    advanced: bool,

    /// Seed the search's RNG for reproducible play. Omit for a random seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Player 1 is a human, prompted on stdin.
    #[arg(long, default_value_t = false)]
    human1: bool,

    /// Player 2 is a human, prompted on stdin.
    #[arg(long, default_value_t = false)]
    human2: bool,

    /// Log level: error, warn, info, debug, or trace.
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    Logger::try_with_str(&cli.log_level)?.log_to_stderr().start()?;

    let board = Board::with_advanced(cli.advanced);
    let rng = match cli.seed {
        Some(seed) => QuartoRng::with_seed(seed),
        None => QuartoRng::new(),
    };
    let is_human = [cli.human1, cli.human2];

    let mut game = driver::GameDriver::new(board, rng, is_human);
    game.run()
}
