//! Play command - run a match between two strategies
//!
//! The CLI is the controller the core leaves external: it owns the board and
//! the hole mask, alternates turns, commits chosen moves, and treats a
//! strategy returning no move as a pass. Two consecutive passes end a game.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use blobwar_core::{
    apply_move, estimate_score, GameSetup, Player, Strategy, DEFAULT_ALPHA_BETA_DEPTH,
    DEFAULT_MINMAX_DEPTH,
};

// ============================================================================
// COMMAND ARGUMENTS
// ============================================================================

/// Strategy selector on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StrategyKind {
    Greedy,
    Minmax,
    Alphabeta,
}

impl StrategyKind {
    fn to_strategy(self, depth: Option<u8>) -> Strategy {
        match self {
            StrategyKind::Greedy => Strategy::Greedy,
            StrategyKind::Minmax => Strategy::MinMax {
                depth: depth.unwrap_or(DEFAULT_MINMAX_DEPTH),
            },
            StrategyKind::Alphabeta => Strategy::AlphaBeta {
                depth: depth.unwrap_or(DEFAULT_ALPHA_BETA_DEPTH),
            },
        }
    }
}

#[derive(Args)]
pub struct PlayArgs {
    /// Strategy for the blue side
    #[arg(long, value_enum, default_value = "alphabeta")]
    pub blue: StrategyKind,

    /// Strategy for the red side
    #[arg(long, value_enum, default_value = "greedy")]
    pub red: StrategyKind,

    /// Search depth override for blue
    #[arg(long)]
    pub blue_depth: Option<u8>,

    /// Search depth override for red
    #[arg(long)]
    pub red_depth: Option<u8>,

    /// Setup JSON file (defaults to the classic corner opening)
    #[arg(long, value_name = "FILE")]
    pub setup: Option<PathBuf>,

    /// Generate this many mirrored hole pairs instead of loading a setup
    #[arg(long, default_value = "0")]
    pub hole_pairs: usize,

    /// RNG seed for hole generation
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of games to play (colors alternate)
    #[arg(long, default_value = "2")]
    pub games: usize,

    /// Maximum half-moves per game
    #[arg(long, default_value = "200")]
    pub max_turns: u32,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Result of a single game
#[derive(Clone, Debug)]
struct GameRecord {
    game_number: usize,
    winner: Option<Player>,
    turns: u32,
    blue_score: i32,
    blue_strategy: Strategy,
    red_strategy: Strategy,
}

/// Aggregated match results
#[derive(Clone, Debug)]
struct MatchResults {
    games: Vec<GameRecord>,
    blue_wins: usize,
    red_wins: usize,
    draws: usize,
    avg_turns: f32,
}

// ============================================================================
// ORCHESTRATION
// ============================================================================

/// Run the play command: load the setup, play the games, report
pub fn run(args: PlayArgs) -> Result<()> {
    let setup = load_setup(&args)?;

    let first = args.blue.to_strategy(args.blue_depth);
    let second = args.red.to_strategy(args.red_depth);

    tracing::info!(
        "Starting match on '{}': {:?} vs {:?} ({} games)",
        setup.name,
        first,
        second,
        args.games
    );

    let results = play_match(&setup, first, second, &args)?;

    report_results(&results, &args);

    Ok(())
}

// ============================================================================
// PHASES
// ============================================================================

/// Resolve the starting position from the arguments
fn load_setup(args: &PlayArgs) -> Result<GameSetup> {
    if let Some(path) = &args.setup {
        return GameSetup::load(path)
            .with_context(|| format!("Failed to load setup: {}", path.display()));
    }

    if args.hole_pairs > 0 {
        let mut rng = match args.seed {
            Some(s) => ChaCha8Rng::seed_from_u64(s),
            None => ChaCha8Rng::from_entropy(),
        };
        return Ok(GameSetup::random_symmetric(
            &mut rng,
            "random",
            args.hole_pairs,
        ));
    }

    Ok(GameSetup::default())
}

/// Play all games of the match in parallel
///
/// Games are independent: each one owns its board copy, so they map cleanly
/// onto worker threads. Colors alternate by game parity for fairness.
fn play_match(
    setup: &GameSetup,
    first: Strategy,
    second: Strategy,
    args: &PlayArgs,
) -> Result<MatchResults> {
    // validate once up front; per-game builds cannot fail after this
    setup.build()?;

    let games: Vec<GameRecord> = (0..args.games)
        .into_par_iter()
        .map(|index| {
            let (blue, red) = if index % 2 == 0 {
                (first, second)
            } else {
                (second, first)
            };
            let record = play_single_game(setup, blue, red, index + 1, args.max_turns);

            tracing::info!(
                "Game {}: {:?} in {} turns (blue score {})",
                record.game_number,
                record.winner,
                record.turns,
                record.blue_score
            );

            record
        })
        .collect();

    Ok(compute_match_statistics(games))
}

/// Report match results
fn report_results(results: &MatchResults, args: &PlayArgs) {
    if args.json {
        print_json_results(results);
    } else {
        print_text_results(results);
    }
}

// ============================================================================
// GAME LOOP
// ============================================================================

/// Play one game to the end
///
/// A side with no legal move passes; two consecutive passes (or the turn
/// cap) end the game. The winner is whoever holds more blobs at the end.
fn play_single_game(
    setup: &GameSetup,
    blue: Strategy,
    red: Strategy,
    game_number: usize,
    max_turns: u32,
) -> GameRecord {
    let (mut board, holes) = setup
        .build()
        .expect("setup validated before the match started");

    let mut current = Player::Blue;
    let mut turns = 0;
    let mut consecutive_passes = 0;

    while turns < max_turns && consecutive_passes < 2 {
        let strategy = match current {
            Player::Blue => blue,
            Player::Red => red,
        };

        match strategy.best_move(&board, &holes, current) {
            Some(mv) => {
                apply_move(&mut board, &holes, mv, current);
                consecutive_passes = 0;
            }
            None => consecutive_passes += 1,
        }

        current = current.opponent();
        turns += 1;
    }

    let blue_score = estimate_score(&board, Player::Blue);
    let winner = match blue_score {
        s if s > 0 => Some(Player::Blue),
        s if s < 0 => Some(Player::Red),
        _ => None,
    };

    GameRecord {
        game_number,
        winner,
        turns,
        blue_score,
        blue_strategy: blue,
        red_strategy: red,
    }
}

/// Compute aggregate statistics from game records
fn compute_match_statistics(games: Vec<GameRecord>) -> MatchResults {
    let blue_wins = games
        .iter()
        .filter(|g| g.winner == Some(Player::Blue))
        .count();
    let red_wins = games
        .iter()
        .filter(|g| g.winner == Some(Player::Red))
        .count();
    let draws = games.iter().filter(|g| g.winner.is_none()).count();

    let total_turns: u32 = games.iter().map(|g| g.turns).sum();
    let avg_turns = if games.is_empty() {
        0.0
    } else {
        total_turns as f32 / games.len() as f32
    };

    MatchResults {
        games,
        blue_wins,
        red_wins,
        draws,
        avg_turns,
    }
}

// ============================================================================
// REPORTING
// ============================================================================

/// Print results as JSON
fn print_json_results(results: &MatchResults) {
    #[derive(serde::Serialize)]
    struct JsonGame {
        game_number: usize,
        winner: Option<String>,
        turns: u32,
        blue_score: i32,
        blue_strategy: String,
        red_strategy: String,
    }

    #[derive(serde::Serialize)]
    struct JsonOutput {
        total_games: usize,
        blue_wins: usize,
        red_wins: usize,
        draws: usize,
        avg_turns: f32,
        games: Vec<JsonGame>,
    }

    let output = JsonOutput {
        total_games: results.games.len(),
        blue_wins: results.blue_wins,
        red_wins: results.red_wins,
        draws: results.draws,
        avg_turns: results.avg_turns,
        games: results
            .games
            .iter()
            .map(|g| JsonGame {
                game_number: g.game_number,
                winner: g.winner.map(|w| format!("{w:?}")),
                turns: g.turns,
                blue_score: g.blue_score,
                blue_strategy: format!("{:?}", g.blue_strategy),
                red_strategy: format!("{:?}", g.red_strategy),
            })
            .collect(),
    };

    if let Ok(json) = serde_json::to_string_pretty(&output) {
        println!("{}", json);
    }
}

/// Print results as text
fn print_text_results(results: &MatchResults) {
    let total = results.games.len();
    let pct = |n: usize| {
        if total > 0 {
            n as f32 / total as f32 * 100.0
        } else {
            0.0
        }
    };

    println!("\n=== Match Results ===");
    println!("Total games: {}", total);
    println!("Blue wins:   {} ({:.1}%)", results.blue_wins, pct(results.blue_wins));
    println!("Red wins:    {} ({:.1}%)", results.red_wins, pct(results.red_wins));
    println!("Draws:       {} ({:.1}%)", results.draws, pct(results.draws));
    println!("Avg turns:   {:.1}", results.avg_turns);

    println!("\nGame details:");
    for game in &results.games {
        println!(
            "  Game {}: {:?} in {} turns ({:?} vs {:?}, blue score {})",
            game.game_number,
            game.winner,
            game.turns,
            game.blue_strategy,
            game.red_strategy,
            game.blue_score
        );
    }
}

// ============================================================================
// TESTS
// ============================================================================
