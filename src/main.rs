//! Command-line entry point: plays tic-tac-toe on stdin/stdout.

use std::io;

use clap::Parser;
use noughts::Engine;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

/// Plays tic-tac-toe against you, choosing its moves with exhaustive minimax
/// search.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Config {
    /// Print the score of every candidate move and search statistics after
    /// each computer move.
    #[arg(short, long)]
    debug: bool,
    /// Seed for the coin flip deciding who plays first. Drawn from the OS
    /// when not set.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    init_logging(config.debug);
    tracing::debug!(?config, version = %noughts::engine_version(), "starting");

    if config.debug {
        noughts::print_engine_info();
    }
    let rng = config
        .seed
        .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
    let mut engine = Engine::new(config.debug, rng);
    engine.run(&mut io::stdin().lock(), &mut io::stdout().lock())
}

/// Logs go to stderr so that they do not mix with the game transcript.
/// `RUST_LOG` takes precedence over the default level.
fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();
}
