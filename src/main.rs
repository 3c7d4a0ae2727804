use std::io;

use anyhow::{Context, Result};
use blackjack_table::{config::GameConfig, console::Console, session::Session};
use clap::Parser;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(author, version, about = "Play Blackjack against the dealer")]
struct Args {
    /// Decks in the shoe
    #[arg(short, long, default_value = "1")]
    decks: u8,

    /// Shuffle seed, for replaying a session
    #[arg(short, long)]
    seed: Option<u64>,

    /// Log shoe and dealer activity to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = GameConfig {
        num_decks: args.decks,
        seed: args.seed,
    };
    let mut session = Session::from_config(&config).context("failed to start session")?;

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    session
        .run(&mut console)
        .context("game session ended unexpectedly")?;
    Ok(())
}
