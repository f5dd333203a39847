//! Console frontend for the Wickfield adventure game.

mod play;

use std::process;

use clap::Parser;
use rand::Rng;

#[derive(Parser)]
#[command(
    name = "wickfield",
    about = "Wickfield — a tiny scored text adventure",
    version
)]
struct Cli {
    /// RNG seed for a reproducible enemy draw (default: random)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Skip the cosmetic narration pauses
    #[arg(long)]
    fast: bool,
}

fn main() {
    let cli = Cli::parse();
    let seed = cli.seed.unwrap_or_else(|| rand::rng().random());

    if let Err(e) = play::run(seed, cli.fast) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
