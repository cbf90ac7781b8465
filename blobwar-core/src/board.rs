//! Board geometry: positions, neighbor offsets and the hole mask

use serde::{Deserialize, Serialize};

/// Board edge length (the grid is BOARD_SIZE x BOARD_SIZE)
pub const BOARD_SIZE: i8 = 8;

/// Grid position (row, col)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub row: i8,
    pub col: i8,
}

impl Pos {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Check if this position is on the board
    pub fn is_valid(&self) -> bool {
        self.row >= 0 && self.row < BOARD_SIZE && self.col >= 0 && self.col < BOARD_SIZE
    }

    /// Chebyshev distance to another position
    pub fn chebyshev_to(&self, other: Pos) -> i8 {
        (self.row - other.row)
            .abs()
            .max((self.col - other.col).abs())
    }

    /// In-bounds grid-adjacent neighbors, in [`NEIGHBOR_OFFSETS`] order
    pub fn neighbors(self) -> impl Iterator<Item = Pos> {
        NEIGHBOR_OFFSETS
            .iter()
            .map(move |&(dr, dc)| Pos::new(self.row + dr, self.col + dc))
            .filter(Pos::is_valid)
    }
}

/// The 8 grid-adjacent neighbor offsets (dr, dc), starting north and
/// going clockwise
pub const NEIGHBOR_OFFSETS: [(i8, i8); 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

/// Blocked cells, fixed for the lifetime of a game
///
/// Owned by the controller; strategies only ever borrow it. A hole cell is
/// never occupied and never written by move application.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoleMask {
    holes: [[bool; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl HoleMask {
    /// Mask with no holes
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_hole(&self, pos: Pos) -> bool {
        self.holes[pos.row as usize][pos.col as usize]
    }

    pub fn set_hole(&mut self, pos: Pos) {
        self.holes[pos.row as usize][pos.col as usize] = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pos_validity() {
        assert!(Pos::new(0, 0).is_valid());
        assert!(Pos::new(7, 7).is_valid());
        assert!(!Pos::new(-1, 0).is_valid());
        assert!(!Pos::new(0, 8).is_valid());
        assert!(!Pos::new(8, 3).is_valid());
    }

    #[test]
    fn test_chebyshev_distance() {
        assert_eq!(Pos::new(0, 0).chebyshev_to(Pos::new(0, 0)), 0);
        assert_eq!(Pos::new(0, 0).chebyshev_to(Pos::new(0, 1)), 1);
        assert_eq!(Pos::new(0, 0).chebyshev_to(Pos::new(1, 1)), 1);
        assert_eq!(Pos::new(0, 0).chebyshev_to(Pos::new(2, 1)), 2);
        assert_eq!(Pos::new(3, 3).chebyshev_to(Pos::new(1, 5)), 2);
    }

    #[test]
    fn test_neighbors_clipped_at_edges() {
        assert_eq!(Pos::new(3, 3).neighbors().count(), 8);
        assert_eq!(Pos::new(0, 0).neighbors().count(), 3);
        assert_eq!(Pos::new(0, 3).neighbors().count(), 5);
        assert_eq!(Pos::new(7, 7).neighbors().count(), 3);
        assert!(Pos::new(0, 0).neighbors().all(|p| p.is_valid()));
    }

    #[test]
    fn test_hole_mask() {
        let mut mask = HoleMask::new();
        assert!(!mask.is_hole(Pos::new(2, 5)));
        mask.set_hole(Pos::new(2, 5));
        assert!(mask.is_hole(Pos::new(2, 5)));
        assert!(!mask.is_hole(Pos::new(5, 2)));
    }
}
