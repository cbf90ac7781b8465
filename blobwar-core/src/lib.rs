//! Blobwar Core - Game engine and AI
//!
//! This crate provides the core logic for Blobwar:
//! - Board geometry (8x8 grid with a fixed hole mask)
//! - Move generation and application with the infection rule
//! - Blob-count position evaluation
//! - Greedy, minmax and alpha-beta move-selection strategies
//! - Serializable starting-position setups

pub mod board;
pub mod game;
pub mod eval;
pub mod ai;
pub mod setup;

// Re-exports for convenient access
pub use board::{HoleMask, Pos, BOARD_SIZE, NEIGHBOR_OFFSETS};
pub use game::{apply_move, valid_moves, Board, Move, MoveKind, Player};
pub use eval::{estimate_score, SCORE_MAX, SCORE_MIN};
pub use ai::{Strategy, DEFAULT_ALPHA_BETA_DEPTH, DEFAULT_MINMAX_DEPTH};
pub use setup::{GameSetup, SetupError};
