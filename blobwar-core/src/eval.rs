//! Position evaluation

use crate::game::{Board, Player};

/// Lower bound for search scores
///
/// A blob-count differential on an 8x8 board never leaves the i8 range,
/// so the alpha/beta window opens at the i8 extremes.
pub const SCORE_MIN: i32 = i8::MIN as i32;

/// Upper bound for search scores
pub const SCORE_MAX: i32 = i8::MAX as i32;

/// Blob-count differential from `player`'s perspective
///
/// Counts the player's blobs minus the opponent's over all 64 cells. Empty
/// cells and holes contribute nothing, so the result is antisymmetric in
/// the player argument.
pub fn estimate_score(board: &Board, player: Player) -> i32 {
    let mut score = 0;

    for pos in Board::positions() {
        match board.get(pos) {
            Some(owner) if owner == player => score += 1,
            Some(_) => score -= 1,
            None => {}
        }
    }

    score
}
