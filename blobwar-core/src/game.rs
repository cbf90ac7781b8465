//! Board occupancy, move generation and move application

use crate::board::{HoleMask, Pos, BOARD_SIZE};
use serde::{Deserialize, Serialize};

// ============================================================================
// CORE TYPES
// ============================================================================

/// Player color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Blue = 0,
    Red = 1,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::Blue => Player::Red,
            Player::Red => Player::Blue,
        }
    }
}

/// A relocation of one blob
///
/// The move kind is derived from the Chebyshev distance, never stored:
/// distance <= 1 clones the origin blob, distance 2 jumps it. The generator
/// never emits a larger distance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Pos,
    pub to: Pos,
}

/// Kind of a move, derived from its distance
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveKind {
    /// Distance <= 1: the origin blob stays
    Clone,
    /// Distance 2: the origin blob leaves
    Jump,
}

impl Move {
    pub const fn new(from: Pos, to: Pos) -> Self {
        Self { from, to }
    }

    pub fn distance(&self) -> i8 {
        self.from.chebyshev_to(self.to)
    }

    pub fn kind(&self) -> MoveKind {
        if self.distance() <= 1 {
            MoveKind::Clone
        } else {
            MoveKind::Jump
        }
    }
}

// ============================================================================
// BOARD
// ============================================================================

/// Board occupancy (copy to mutate during search)
///
/// A dense 8x8 grid of cells; `None` is an empty cell. Search makes one copy
/// per explored node so sibling lines never observe each other's mutations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Option<Player>; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl Board {
    /// Board with every cell empty
    pub fn empty() -> Self {
        Self {
            cells: [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize],
        }
    }

    pub fn get(&self, pos: Pos) -> Option<Player> {
        self.cells[pos.row as usize][pos.col as usize]
    }

    pub fn set(&mut self, pos: Pos, cell: Option<Player>) {
        self.cells[pos.row as usize][pos.col as usize] = cell;
    }

    /// All board positions in row-major order
    pub fn positions() -> impl Iterator<Item = Pos> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Pos::new(row, col)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

// ============================================================================
// MOVE GENERATION
// ============================================================================

/// Every legal move for `player`
///
/// Origins are scanned row-major; destinations row-major within Chebyshev
/// distance 2, clamped to the board edge. A destination qualifies when it is
/// not a hole and currently empty. The enumeration order is a contract:
/// every strategy's tie-breaking depends on it.
pub fn valid_moves(board: &Board, holes: &HoleMask, player: Player) -> Vec<Move> {
    let mut moves = Vec::new();

    for from in Board::positions() {
        if board.get(from) != Some(player) {
            continue;
        }

        for row in (from.row - 2).max(0)..=(from.row + 2).min(BOARD_SIZE - 1) {
            for col in (from.col - 2).max(0)..=(from.col + 2).min(BOARD_SIZE - 1) {
                let to = Pos::new(row, col);
                if holes.is_hole(to) {
                    continue;
                }
                if board.get(to).is_none() {
                    moves.push(Move::new(from, to));
                }
            }
        }
    }

    moves
}

// ============================================================================
// MOVE APPLICATION
// ============================================================================

/// Apply a valid move in place
///
/// Places the mover on the destination, vacates the origin on a jump, then
/// infects every grid-adjacent enemy blob around the destination. Holes are
/// never written. Assumes the move came from [`valid_moves`].
pub fn apply_move(board: &mut Board, holes: &HoleMask, mv: Move, player: Player) {
    board.set(mv.to, Some(player));

    if mv.kind() == MoveKind::Jump {
        board.set(mv.from, None);
    }

    for neighbor in mv.to.neighbors() {
        if holes.is_hole(neighbor) {
            continue;
        }
        if board.get(neighbor) == Some(player.opponent()) {
            board.set(neighbor, Some(player));
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
