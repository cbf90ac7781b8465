//! GameSetup - starting position definition
//!
//! A setup names the holes and each side's starting blobs. Setups travel as
//! JSON files; the CLI loads one (or generates a random symmetric one) and
//! materializes the board plus hole mask from it.

use crate::board::{HoleMask, Pos, BOARD_SIZE};
use crate::game::{Board, Player};
use anyhow::Context;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Setup validation failure
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SetupError {
    #[error("position ({0}, {1}) is off the board")]
    OutOfBounds(i8, i8),
    #[error("blob placed on a hole at ({0}, {1})")]
    BlobOnHole(i8, i8),
    #[error("two blobs share the cell ({0}, {1})")]
    Overlap(i8, i8),
}

/// Starting position for a game
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameSetup {
    pub name: String,
    pub holes: Vec<Pos>,
    pub blue: Vec<Pos>,
    pub red: Vec<Pos>,
}

impl GameSetup {
    /// Materialize the board and hole mask, validating the placement
    pub fn build(&self) -> Result<(Board, HoleMask), SetupError> {
        let mut mask = HoleMask::new();
        for &pos in &self.holes {
            if !pos.is_valid() {
                return Err(SetupError::OutOfBounds(pos.row, pos.col));
            }
            mask.set_hole(pos);
        }

        let mut board = Board::empty();
        let sides = [(Player::Blue, &self.blue), (Player::Red, &self.red)];
        for (player, positions) in sides {
            for &pos in positions {
                if !pos.is_valid() {
                    return Err(SetupError::OutOfBounds(pos.row, pos.col));
                }
                if mask.is_hole(pos) {
                    return Err(SetupError::BlobOnHole(pos.row, pos.col));
                }
                if board.get(pos).is_some() {
                    return Err(SetupError::Overlap(pos.row, pos.col));
                }
                board.set(pos, Some(player));
            }
        }

        Ok((board, mask))
    }

    /// Load from a JSON file, rejecting invalid placements up front
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read setup: {}", path.display()))?;
        let setup: GameSetup = serde_json::from_str(&content)
            .with_context(|| format!("Invalid setup JSON: {}", path.display()))?;
        setup
            .build()
            .with_context(|| format!("Invalid setup: {}", path.display()))?;
        Ok(setup)
    }

    /// Save to a JSON file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write setup: {}", path.display()))?;
        Ok(())
    }

    /// Random setup with centrally symmetric holes
    ///
    /// Both sides keep the classic corner blobs; `hole_pairs` hole pairs are
    /// drawn mirrored through the board center so neither side is favored.
    /// Corners always stay open, and the pair count is clamped to the 30
    /// mirrorable non-corner pairs the board has.
    pub fn random_symmetric<R: Rng>(rng: &mut R, name: &str, hole_pairs: usize) -> Self {
        let mut setup = Self {
            name: name.to_string(),
            ..Self::default()
        };

        let target = hole_pairs.min(30) * 2;
        let mut mask = HoleMask::new();
        while setup.holes.len() < target {
            let pos = Pos::new(rng.gen_range(0..BOARD_SIZE), rng.gen_range(0..BOARD_SIZE));
            let mirror = Pos::new(BOARD_SIZE - 1 - pos.row, BOARD_SIZE - 1 - pos.col);

            // holes come in mirrored pairs, so checking one side covers both
            if is_corner(pos) || mask.is_hole(pos) {
                continue;
            }

            mask.set_hole(pos);
            mask.set_hole(mirror);
            setup.holes.push(pos);
            setup.holes.push(mirror);
        }

        setup
    }
}

impl Default for GameSetup {
    /// The classic opening: two blobs per side on opposite corners, no holes
    fn default() -> Self {
        let last = BOARD_SIZE - 1;
        Self {
            name: "default".to_string(),
            holes: vec![],
            blue: vec![Pos::new(0, 0), Pos::new(last, last)],
            red: vec![Pos::new(0, last), Pos::new(last, 0)],
        }
    }
}

fn is_corner(pos: Pos) -> bool {
    let last = BOARD_SIZE - 1;
    (pos.row == 0 || pos.row == last) && (pos.col == 0 || pos.col == last)
}
