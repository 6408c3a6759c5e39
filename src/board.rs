//! Board state: tile grid, score and per-cell annotations.

use core::fmt;

use crate::common::{CellTag, Direction, EngineError, Score, Tile};
use crate::config::MIN_BOARD_SIZE;
use crate::grid::Grid;
use crate::line::{self, LineShift};
use crate::snapshot::BoardState;

/// Tiles, score and the annotations of the last move or spawn.
///
/// `Board` is deterministic; randomness lives in [`crate::GameEngine`].
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    tiles: Grid<Tile>,
    tags: Grid<CellTag>,
    score: Score,
}

impl Board {
    /// Create an empty `size × size` board with score 0.
    pub fn new(size: usize) -> Result<Self, EngineError> {
        if size < MIN_BOARD_SIZE || Grid::<Tile>::cell_count(size).is_none() {
            return Err(EngineError::InvalidSize { size });
        }
        Ok(Board {
            tiles: Grid::new(size),
            tags: Grid::new(size),
            score: 0,
        })
    }

    /// Build a board from an existing grid and score, with no annotations.
    pub fn from_grid(tiles: Grid<Tile>, score: Score) -> Result<Self, EngineError> {
        let size = tiles.size();
        if size < MIN_BOARD_SIZE {
            return Err(EngineError::InvalidSize { size });
        }
        Ok(Board {
            tiles,
            tags: Grid::new(size),
            score,
        })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.tiles.size()
    }

    #[inline]
    pub fn score(&self) -> Score {
        self.score
    }

    /// Read-only view of tile values.
    #[inline]
    pub fn tiles(&self) -> &Grid<Tile> {
        &self.tiles
    }

    /// Read-only view of the annotations left by the last move or spawn.
    #[inline]
    pub fn annotations(&self) -> &Grid<CellTag> {
        &self.tags
    }

    /// Tile value at (row, col), 0 when empty.
    pub fn tile(&self, row: usize, col: usize) -> Result<Tile, EngineError> {
        Ok(self.tiles.get(row, col)?)
    }

    pub fn empty_count(&self) -> usize {
        self.tiles.cells().iter().filter(|&&v| v == 0).count()
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.tiles
            .iter()
            .filter(|&(_, _, v)| v == 0)
            .map(|(r, c, _)| (r, c))
    }

    pub fn max_tile(&self) -> Tile {
        self.tiles.cells().iter().copied().max().unwrap_or(0)
    }

    /// Spawn `value` into the `n`-th empty cell in row-major order, tagged
    /// `New`. Returns its (row, col), or `None` when fewer than `n + 1`
    /// cells are empty.
    pub fn place_in_empty(&mut self, n: usize, value: Tile) -> Option<(usize, usize)> {
        let (row, col) = self.empty_cells().nth(n)?;
        let idx = row * self.size() + col;
        self.tiles.cells_mut()[idx] = value;
        self.tags.cells_mut()[idx] = CellTag::New;
        Some((row, col))
    }

    /// Reset every annotation to [`CellTag::None`].
    pub fn clear_annotations(&mut self) {
        self.tags.clear_all();
    }

    /// Whether a move in `dir` would change the board.
    pub fn can_move(&self, dir: Direction) -> bool {
        let cells = self.tiles.cells();
        line::lines(self.size(), dir).any(|l| line::can_shift(cells, &l))
    }

    /// `true` once no direction can move.
    pub fn is_game_over(&self) -> bool {
        Direction::ALL.iter().all(|&d| !self.can_move(d))
    }

    /// Slide and merge every line toward `dir`. Annotations are cleared
    /// first. Returns `false` without touching tiles when nothing can move.
    pub fn shift(&mut self, dir: Direction) -> bool {
        self.clear_annotations();
        if !self.can_move(dir) {
            return false;
        }
        let size = self.size();
        let mut total = LineShift::default();
        for l in line::lines(size, dir) {
            let res = line::shift_line(self.tiles.cells_mut(), self.tags.cells_mut(), &l);
            log::trace!("line {:?} toward {}: {:?}", l, dir, res);
            total.moved |= res.moved;
            total.gained = total.gained.saturating_add(res.gained);
        }
        self.score = self.score.saturating_add(total.gained);
        total.moved
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  score: {},\n  tiles: {:?},\n  tags: {:?}\n}}",
            self.score, self.tiles, self.tags
        )
    }
}

/// `Score: N` followed by one line per row, five columns per cell.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Score: {}", self.score)?;
        for row in self.tiles.rows() {
            for &v in row {
                if v == 0 {
                    write!(f, "    -")?;
                } else {
                    write!(f, "{:5}", v)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl From<&Board> for BoardState {
    fn from(b: &Board) -> Self {
        BoardState {
            size: b.size(),
            score: b.score,
            cells: b.tiles.cells().to_vec(),
        }
    }
}

impl TryFrom<BoardState> for Board {
    type Error = EngineError;

    fn try_from(state: BoardState) -> Result<Self, Self::Error> {
        state.validate()?;
        let tiles = Grid::from_cells(state.size, state.cells)?;
        Board::from_grid(tiles, state.score)
    }
}
