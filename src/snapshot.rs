//! Plain-text board snapshots.
//!
//! Layout: the grid size, the score, then `size * size` cell values in
//! row-major order, all whitespace separated. [`BoardState`]'s `Display`
//! writes one row per line with a space after every value; parsing only
//! cares about token order.

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::common::{Score, SnapshotError, Tile};
use crate::config::MIN_BOARD_SIZE;

/// Serializable board state for saving and restoring games.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardState {
    pub size: usize,
    pub score: Score,
    /// Row-major tile values, 0 for empty.
    pub cells: Vec<Tile>,
}

impl BoardState {
    /// Check the invariants a loadable board needs: playable size, a cell
    /// count of `size * size`, and every cell 0 or a power of two >= 2.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        if self.size < MIN_BOARD_SIZE {
            return Err(SnapshotError::SizeTooSmall { size: self.size });
        }
        let expected = self.size.checked_mul(self.size).unwrap_or(usize::MAX);
        if self.cells.len() != expected {
            return Err(SnapshotError::CellCountMismatch {
                expected,
                found: self.cells.len(),
            });
        }
        for (i, &value) in self.cells.iter().enumerate() {
            if value != 0 && (value < 2 || !value.is_power_of_two()) {
                return Err(SnapshotError::InvalidTile {
                    row: i / self.size,
                    col: i % self.size,
                    value,
                });
            }
        }
        Ok(())
    }
}

impl FromStr for BoardState {
    type Err = SnapshotError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut tokens = text.split_whitespace().enumerate();
        let size = match tokens.next() {
            Some((pos, tok)) => parse_token::<usize>(pos, tok)?,
            None => return Err(SnapshotError::MissingSize),
        };
        let score = match tokens.next() {
            Some((pos, tok)) => parse_token::<Score>(pos, tok)?,
            None => return Err(SnapshotError::MissingScore),
        };
        let cells = tokens
            .map(|(pos, tok)| parse_token::<Tile>(pos, tok))
            .collect::<Result<Vec<_>, _>>()?;
        let state = BoardState { size, score, cells };
        state.validate()?;
        Ok(state)
    }
}

fn parse_token<T: FromStr>(position: usize, token: &str) -> Result<T, SnapshotError> {
    token
        .parse()
        .map_err(|_| SnapshotError::InvalidToken { position })
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.size)?;
        writeln!(f, "{}", self.score)?;
        for row in self.cells.chunks(self.size.max(1)) {
            for v in row {
                write!(f, "{} ", v)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Whether `text` parses as a loadable snapshot.
pub fn is_valid_snapshot(text: &str) -> bool {
    text.parse::<BoardState>().is_ok()
}
