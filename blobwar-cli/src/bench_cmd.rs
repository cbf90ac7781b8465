//! Bench command - time each strategy over a range of depths

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Args;

use blobwar_core::{GameSetup, Player, Strategy};

/// Unpruned minmax is impractical past this depth at an open position
const MINMAX_DEPTH_CAP: u8 = 4;

#[derive(Args)]
pub struct BenchArgs {
    /// Deepest ply budget to time
    #[arg(long, default_value = "5")]
    pub max_depth: u8,

    /// Setup JSON file (defaults to the classic corner opening)
    #[arg(long, value_name = "FILE")]
    pub setup: Option<PathBuf>,
}

pub fn run(args: BenchArgs) -> Result<()> {
    let setup = match &args.setup {
        Some(path) => GameSetup::load(path)
            .with_context(|| format!("Failed to load setup: {}", path.display()))?,
        None => GameSetup::default(),
    };
    let (board, holes) = setup.build()?;

    println!("Benchmarking on '{}', blue to move\n", setup.name);

    let start = Instant::now();
    let mv = Strategy::Greedy.best_move(&board, &holes, Player::Blue);
    println!("greedy:             {:>12?} -> {:?}", start.elapsed(), mv);

    for depth in 1..=args.max_depth {
        if depth <= MINMAX_DEPTH_CAP {
            let strategy = Strategy::MinMax { depth };
            let start = Instant::now();
            let mv = strategy.best_move(&board, &holes, Player::Blue);
            println!("minmax depth {}:     {:>12?} -> {:?}", depth, start.elapsed(), mv);
        }

        let strategy = Strategy::AlphaBeta { depth };
        let start = Instant::now();
        let mv = strategy.best_move(&board, &holes, Player::Blue);
        println!("alphabeta depth {}:  {:>12?} -> {:?}", depth, start.elapsed(), mv);
    }

    Ok(())
}
