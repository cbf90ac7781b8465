//! Blobwar CLI - Command-line interface
//!
//! Commands:
//! - play: run a match between two strategies
//! - bench: time each strategy over a range of depths

mod bench_cmd;
mod match_cmd;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "blobwar")]
#[command(about = "Blobwar strategy match runner")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a match between two strategies
    Play(match_cmd::PlayArgs),
    /// Time each strategy over a range of depths
    Bench(bench_cmd::BenchArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => match_cmd::run(args),
        Commands::Bench(args) => bench_cmd::run(args),
    }
}
