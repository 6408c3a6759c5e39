//! Common types for 2048: move directions, cell annotations and errors.

use core::fmt;
use core::str::FromStr;

/// Tile value stored in a cell. `0` marks an empty cell.
pub type Tile = u64;

/// Running score of a game.
pub type Score = u64;

/// A direction to slide and merge tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in the order game-over detection checks them.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// `true` for moves that operate on columns.
    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    /// Accepts direction names plus `wasd` and vi-style `hjkl` keys.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let matches_any = |names: &[&str]| names.iter().any(|n| s.eq_ignore_ascii_case(n));
        let dir = if matches_any(&["up", "w", "k"]) {
            Direction::Up
        } else if matches_any(&["down", "s", "j"]) {
            Direction::Down
        } else if matches_any(&["left", "a", "h"]) {
            Direction::Left
        } else if matches_any(&["right", "d", "l"]) {
            Direction::Right
        } else {
            return Err(ParseDirectionError);
        };
        Ok(dir)
    }
}

/// Input did not name a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseDirectionError;

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("expected one of up/down/left/right (or w/a/s/d, h/j/k/l)")
    }
}

/// Outcome of the most recent move or spawn for a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellTag {
    #[default]
    None,
    /// A tile was spawned here.
    New,
    /// Two tiles merged into the tile here.
    Merged,
}

/// Errors returned by grid coordinate access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Row or column index is out of bounds [0..N).
    IndexOutOfBounds { row: usize, col: usize },
    /// Cell buffer length does not match N*N.
    LengthMismatch { expected: usize, found: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::IndexOutOfBounds { row, col } => {
                write!(f, "IndexOutOfBounds: row={}, col={}", row, col)
            }
            GridError::LengthMismatch { expected, found } => {
                write!(f, "LengthMismatch: expected {} cells, found {}", expected, found)
            }
        }
    }
}

/// Reasons a snapshot text is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    /// No size token at all.
    MissingSize,
    /// Size present but no score token.
    MissingScore,
    /// A token is not a non-negative integer. `position` counts tokens from 0.
    InvalidToken { position: usize },
    /// Declared size is below the playable minimum.
    SizeTooSmall { size: usize },
    /// Number of cell values differs from size*size.
    CellCountMismatch { expected: usize, found: usize },
    /// A cell value is neither 0 nor a power of two >= 2.
    InvalidTile { row: usize, col: usize, value: Tile },
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::MissingSize => write!(f, "snapshot is empty, expected grid size"),
            SnapshotError::MissingScore => write!(f, "snapshot has no score"),
            SnapshotError::InvalidToken { position } => {
                write!(f, "token {} is not a non-negative integer", position)
            }
            SnapshotError::SizeTooSmall { size } => write!(f, "grid size {} is too small", size),
            SnapshotError::CellCountMismatch { expected, found } => {
                write!(f, "expected {} cell values, found {}", expected, found)
            }
            SnapshotError::InvalidTile { row, col, value } => {
                write!(f, "cell ({}, {}) holds {}, not a tile value", row, col, value)
            }
        }
    }
}

/// Errors returned by engine construction and coordinate access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Board size below the minimum of 2.
    InvalidSize { size: usize },
    /// Persisted snapshot could not be used.
    MalformedSnapshot(SnapshotError),
    /// Underlying grid error.
    Grid(GridError),
}

impl From<GridError> for EngineError {
    fn from(err: GridError) -> Self {
        EngineError::Grid(err)
    }
}

impl From<SnapshotError> for EngineError {
    fn from(err: SnapshotError) -> Self {
        EngineError::MalformedSnapshot(err)
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidSize { size } => {
                write!(f, "Invalid board size {} (minimum is 2)", size)
            }
            EngineError::MalformedSnapshot(e) => write!(f, "Malformed snapshot: {}", e),
            EngineError::Grid(e) => write!(f, "Grid error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GridError {}
#[cfg(feature = "std")]
impl std::error::Error for SnapshotError {}
#[cfg(feature = "std")]
impl std::error::Error for EngineError {}
#[cfg(feature = "std")]
impl std::error::Error for ParseDirectionError {}
