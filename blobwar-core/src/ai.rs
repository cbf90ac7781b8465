//! Move-selection strategies: greedy, minmax and alpha-beta

use crate::board::{HoleMask, Pos};
use crate::eval::{estimate_score, SCORE_MAX, SCORE_MIN};
use crate::game::{apply_move, valid_moves, Board, Move, MoveKind, Player};
use serde::{Deserialize, Serialize};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Default ply budget for minmax
pub const DEFAULT_MINMAX_DEPTH: u8 = 4;

/// Default ply budget for alpha-beta
pub const DEFAULT_ALPHA_BETA_DEPTH: u8 = 5;

// ============================================================================
// STRATEGY
// ============================================================================

/// A move-selection strategy
///
/// All three variants share one capability: given the board, the hole mask
/// and the side to move, pick a move. `None` means the side has no legal
/// move; the caller must treat that as a forced pass, it is not an error.
///
/// MinMax and AlphaBeta always evaluate from the root player's perspective;
/// inside the search a side with no moves terminates the line with the
/// static score rather than passing to the other side. Changing that rule
/// changes search results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    /// Pick the move with the most adjacent enemies, no look-ahead
    Greedy,
    /// Fixed-depth minimax on the full game tree
    MinMax { depth: u8 },
    /// Minimax with alpha-beta pruning; same value, fewer nodes
    AlphaBeta { depth: u8 },
}

impl Strategy {
    /// MinMax at its default depth
    pub fn minmax() -> Self {
        Strategy::MinMax {
            depth: DEFAULT_MINMAX_DEPTH,
        }
    }

    /// AlphaBeta at its default depth
    pub fn alpha_beta() -> Self {
        Strategy::AlphaBeta {
            depth: DEFAULT_ALPHA_BETA_DEPTH,
        }
    }

    /// Pick the best move for `player` on `board`
    pub fn best_move(&self, board: &Board, holes: &HoleMask, player: Player) -> Option<Move> {
        match *self {
            Strategy::Greedy => greedy_move(board, holes, player),
            Strategy::MinMax { depth } => {
                let mut best = None;
                minmax(board, holes, player, depth, depth, true, &mut best);
                best
            }
            Strategy::AlphaBeta { depth } => {
                let mut best = None;
                alphabeta(
                    board, holes, player, depth, depth, SCORE_MIN, SCORE_MAX, true, &mut best,
                );
                best
            }
        }
    }
}

// ============================================================================
// GREEDY
// ============================================================================

/// Enemy blobs adjacent to `to`, counted without applying any move
fn count_enemies(board: &Board, holes: &HoleMask, to: Pos, player: Player) -> u32 {
    let mut count = 0;

    for neighbor in to.neighbors() {
        if holes.is_hole(neighbor) {
            continue;
        }
        if board.get(neighbor) == Some(player.opponent()) {
            count += 1;
        }
    }

    count
}

fn greedy_move(board: &Board, holes: &HoleMask, player: Player) -> Option<Move> {
    let moves = valid_moves(board, holes, player);

    let mut best = *moves.first()?;
    let mut best_score = 0;

    for &mv in &moves {
        let score = count_enemies(board, holes, mv.to, player);
        if score > best_score {
            best_score = score;
            best = mv;
        } else if score == best_score && mv.kind() == MoveKind::Clone {
            // a tying clone replaces the incumbent (it keeps the origin
            // blob); a tying jump never does
            best = mv;
        }
    }

    Some(best)
}

// ============================================================================
// MINMAX
// ============================================================================

/// Depth-limited minimax, always scoring from `player`'s perspective
///
/// `budget` is the root depth; the best root move is written through `best`
/// on every strict improvement, so the last write wins. Deeper layers only
/// propagate scores.
fn minmax(
    board: &Board,
    holes: &HoleMask,
    player: Player,
    depth: u8,
    budget: u8,
    maximizing: bool,
    best: &mut Option<Move>,
) -> i32 {
    if depth == 0 {
        return estimate_score(board, player);
    }

    let mover = if maximizing { player } else { player.opponent() };
    let moves = valid_moves(board, holes, mover);
    if moves.is_empty() {
        // a blocked side ends the line here; it does not pass
        return estimate_score(board, player);
    }

    if maximizing {
        let mut best_score = SCORE_MIN;
        for mv in moves {
            let mut child = *board;
            apply_move(&mut child, holes, mv, mover);
            let score = minmax(&child, holes, player, depth - 1, budget, false, best);

            if score > best_score {
                best_score = score;
                if depth == budget {
                    *best = Some(mv);
                }
            }
        }
        best_score
    } else {
        let mut best_score = SCORE_MAX;
        for mv in moves {
            let mut child = *board;
            apply_move(&mut child, holes, mv, mover);
            best_score = best_score.min(minmax(&child, holes, player, depth - 1, budget, true, best));
        }
        best_score
    }
}

// ============================================================================
// ALPHA-BETA
// ============================================================================

/// Minimax with alpha-beta pruning
///
/// Returns the same value as [`minmax`] for equal inputs; pruning only
/// changes the number of nodes visited. Pruned branches never write a root
/// move.
#[allow(clippy::too_many_arguments)]
fn alphabeta(
    board: &Board,
    holes: &HoleMask,
    player: Player,
    depth: u8,
    budget: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    best: &mut Option<Move>,
) -> i32 {
    if depth == 0 {
        return estimate_score(board, player);
    }

    let mover = if maximizing { player } else { player.opponent() };
    let moves = valid_moves(board, holes, mover);
    if moves.is_empty() {
        return estimate_score(board, player);
    }

    if maximizing {
        let mut m = SCORE_MIN;
        for mv in moves {
            let mut child = *board;
            apply_move(&mut child, holes, mv, mover);
            let score = alphabeta(&child, holes, player, depth - 1, budget, alpha, beta, false, best);

            if score > m {
                if depth == budget {
                    *best = Some(mv);
                }
                m = score;
            }
            if m >= beta {
                return m; // beta cutoff
            }
            alpha = alpha.max(m);
        }
        m
    } else {
        let mut m = SCORE_MAX;
        for mv in moves {
            let mut child = *board;
            apply_move(&mut child, holes, mv, mover);
            let score = alphabeta(&child, holes, player, depth - 1, budget, alpha, beta, true, best);

            if score < m {
                m = score;
            }
            if m <= alpha {
                return m; // alpha cutoff
            }
            beta = beta.min(m);
        }
        m
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Blue at (0,0), red at (1,1), no holes
    fn corner_duel() -> (Board, HoleMask) {
        let mut board = Board::empty();
        board.set(Pos::new(0, 0), Some(Player::Blue));
        board.set(Pos::new(1, 1), Some(Player::Red));
        (board, HoleMask::new())
    }

    /// Midgame position with holes, uneven material
    fn midgame() -> (Board, HoleMask) {
        let mut board = Board::empty();
        let mut holes = HoleMask::new();
        for pos in [(0, 0), (1, 2), (3, 3), (6, 5)] {
            board.set(Pos::new(pos.0, pos.1), Some(Player::Blue));
        }
        for pos in [(2, 1), (4, 4), (7, 7)] {
            board.set(Pos::new(pos.0, pos.1), Some(Player::Red));
        }
        holes.set_hole(Pos::new(3, 4));
        holes.set_hole(Pos::new(4, 3));
        (board, holes)
    }

    /// Board where blue has exactly one legal move
    ///
    /// Blue sits in the corner; every reachable cell but one is a hole.
    fn single_move_board() -> (Board, HoleMask, Move) {
        let mut board = Board::empty();
        let mut holes = HoleMask::new();
        board.set(Pos::new(0, 0), Some(Player::Blue));
        board.set(Pos::new(7, 7), Some(Player::Red));
        for pos in (0..3).flat_map(|r| (0..3).map(move |c| Pos::new(r, c))) {
            if pos != Pos::new(0, 0) && pos != Pos::new(2, 2) {
                holes.set_hole(pos);
            }
        }
        (board, holes, Move::new(Pos::new(0, 0), Pos::new(2, 2)))
    }

    #[test]
    fn test_greedy_takes_biggest_infection() {
        let mut board = Board::empty();
        let holes = HoleMask::new();
        board.set(Pos::new(0, 0), Some(Player::Blue));
        // cluster of three red blobs around (2,2), one lone red at (0,3)
        board.set(Pos::new(2, 3), Some(Player::Red));
        board.set(Pos::new(3, 2), Some(Player::Red));
        board.set(Pos::new(3, 3), Some(Player::Red));
        board.set(Pos::new(0, 4), Some(Player::Red));

        let mv = Strategy::Greedy.best_move(&board, &holes, Player::Blue).unwrap();
        assert_eq!(mv.to, Pos::new(2, 2));
    }

    #[test]
    fn test_greedy_tie_prefers_last_clone() {
        let (board, holes) = corner_duel();
        let mut board = board;
        // move the red blob out of reach so every destination scores zero
        board.set(Pos::new(1, 1), None);
        board.set(Pos::new(7, 7), Some(Player::Red));

        // all ties: the last clone in generator order wins, later jumps
        // never displace it
        let mv = Strategy::Greedy.best_move(&board, &holes, Player::Blue).unwrap();
        assert_eq!(mv, Move::new(Pos::new(0, 0), Pos::new(1, 1)));
        assert_eq!(mv.kind(), MoveKind::Clone);
    }

    #[test]
    fn test_greedy_reports_only_generated_moves() {
        let (board, holes) = midgame();
        let moves = valid_moves(&board, &holes, Player::Red);
        let mv = Strategy::Greedy.best_move(&board, &holes, Player::Red).unwrap();
        assert!(moves.contains(&mv));
    }

    #[test]
    fn test_no_blobs_means_no_move() {
        let board = Board::empty();
        let holes = HoleMask::new();
        for strategy in [Strategy::Greedy, Strategy::minmax(), Strategy::alpha_beta()] {
            assert_eq!(strategy.best_move(&board, &holes, Player::Blue), None);
        }
    }

    #[test]
    fn test_minmax_depth_zero_is_static_score() {
        let (board, holes) = midgame();
        for player in [Player::Blue, Player::Red] {
            let score = minmax(&board, &holes, player, 0, 0, true, &mut None);
            assert_eq!(score, estimate_score(&board, player));
        }
    }

    #[test]
    fn test_minmax_depth_one_maximizes_immediate_score() {
        let (board, holes) = midgame();

        let mv = Strategy::MinMax { depth: 1 }
            .best_move(&board, &holes, Player::Blue)
            .unwrap();

        let mut best = SCORE_MIN;
        for candidate in valid_moves(&board, &holes, Player::Blue) {
            let mut child = board;
            apply_move(&mut child, &holes, candidate, Player::Blue);
            best = best.max(estimate_score(&child, Player::Blue));
        }

        let mut chosen = board;
        apply_move(&mut chosen, &holes, mv, Player::Blue);
        assert_eq!(estimate_score(&chosen, Player::Blue), best);
    }

    #[test]
    fn test_alphabeta_matches_minmax_value() {
        // depths kept small: minmax is unpruned and these boards branch wide
        let (board, holes) = midgame();
        for depth in 1..=2 {
            for player in [Player::Blue, Player::Red] {
                let mm = minmax(&board, &holes, player, depth, depth, true, &mut None);
                let ab = alphabeta(
                    &board, &holes, player, depth, depth, SCORE_MIN, SCORE_MAX, true, &mut None,
                );
                assert_eq!(mm, ab, "value mismatch at depth {depth} for {player:?}");
            }
        }

        let (board, holes) = corner_duel();
        for depth in 1..=3 {
            let mm = minmax(&board, &holes, Player::Blue, depth, depth, true, &mut None);
            let ab = alphabeta(
                &board, &holes, Player::Blue, depth, depth, SCORE_MIN, SCORE_MAX, true, &mut None,
            );
            assert_eq!(mm, ab, "value mismatch at depth {depth}");
        }
    }

    #[test]
    fn test_alphabeta_matches_minmax_move() {
        let (board, holes) = midgame();
        for depth in 1..=2 {
            let mm = Strategy::MinMax { depth }.best_move(&board, &holes, Player::Blue);
            let ab = Strategy::AlphaBeta { depth }.best_move(&board, &holes, Player::Blue);
            assert_eq!(mm, ab, "move mismatch at depth {depth}");
        }
    }

    #[test]
    fn test_single_legal_move_is_forced() {
        let (board, holes, forced) = single_move_board();
        assert_eq!(valid_moves(&board, &holes, Player::Blue), vec![forced]);

        for strategy in [Strategy::Greedy, Strategy::minmax(), Strategy::alpha_beta()] {
            assert_eq!(
                strategy.best_move(&board, &holes, Player::Blue),
                Some(forced),
                "{strategy:?} must report the only legal move"
            );
        }
    }

    #[test]
    fn test_blocked_side_scores_statically_instead_of_passing() {
        // Red is walled in: inside the search a moveless node returns the
        // static score, so a depth-2 search from blue equals depth-1 when
        // red can never answer.
        let (board, holes, _) = single_move_board();
        let mut holes = holes;
        // wall red into its corner with holes so no blue move can free it
        for pos in (5..8).flat_map(|r| (5..8).map(move |c| Pos::new(r, c))) {
            if pos != Pos::new(7, 7) {
                holes.set_hole(pos);
            }
        }
        assert!(valid_moves(&board, &holes, Player::Red).is_empty());

        let d1 = minmax(&board, &holes, Player::Blue, 1, 1, true, &mut None);
        let d2 = minmax(&board, &holes, Player::Blue, 2, 2, true, &mut None);
        assert_eq!(d1, d2);
    }

    #[test]
    fn test_default_depths() {
        assert_eq!(Strategy::minmax(), Strategy::MinMax { depth: 4 });
        assert_eq!(Strategy::alpha_beta(), Strategy::AlphaBeta { depth: 5 });
    }
}
