use alloc::string::{String, ToString};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::{
    board::Board,
    common::{CellTag, Direction, EngineError, Score, Tile},
    config::{spawn_value, NUM_START_TILES, SPAWN_ROLL_RANGE},
    grid::Grid,
    random::RandomSource,
    snapshot::BoardState,
};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Over,
}

/// Core game logic: a [`Board`] plus the random source that spawns tiles.
pub struct GameEngine<R: RandomSource = SmallRng> {
    board: Board,
    rng: R,
}

impl GameEngine<SmallRng> {
    /// Start a new `size × size` game seeded with `seed`.
    pub fn new_game(size: usize, seed: u64) -> Result<Self, EngineError> {
        Self::with_source(size, SmallRng::seed_from_u64(seed))
    }
}

impl<R: RandomSource> GameEngine<R> {
    /// Start a new game drawing from `rng`: empty board, then the start tiles.
    pub fn with_source(size: usize, rng: R) -> Result<Self, EngineError> {
        let mut engine = Self {
            board: Board::new(size)?,
            rng,
        };
        for _ in 0..NUM_START_TILES {
            engine.spawn_random_tile();
        }
        log::debug!("new {}x{} game", size, size);
        Ok(engine)
    }

    /// Restore an engine from a previously saved state.
    pub fn from_state(state: BoardState, rng: R) -> Result<Self, EngineError> {
        let board = Board::try_from(state)?;
        Ok(Self { board, rng })
    }

    /// Restore an engine from snapshot text.
    pub fn load_game(text: &str, rng: R) -> Result<Self, EngineError> {
        let state: BoardState = text.parse()?;
        Self::from_state(state, rng)
    }

    /// Snapshot text for [`GameEngine::load_game`].
    pub fn save_game(&self) -> String {
        self.state().to_string()
    }

    /// Generate a serializable snapshot of the current state.
    pub fn state(&self) -> BoardState {
        BoardState::from(&self.board)
    }

    /// Immutable reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn grid(&self) -> &Grid<Tile> {
        self.board.tiles()
    }

    pub fn annotations(&self) -> &Grid<CellTag> {
        self.board.annotations()
    }

    pub fn score(&self) -> Score {
        self.board.score()
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn max_tile(&self) -> Tile {
        self.board.max_tile()
    }

    pub fn empty_count(&self) -> usize {
        self.board.empty_count()
    }

    /// Place a 2 (90%) or 4 (10%) at a uniformly chosen empty cell, counted
    /// in row-major order. Returns the cell used, or `None` on a full board
    /// without drawing from the source.
    pub fn spawn_random_tile(&mut self) -> Option<(usize, usize)> {
        let count = self.board.empty_count();
        if count == 0 {
            return None;
        }
        let location = self.rng.next_below(count);
        let value = spawn_value(self.rng.next_below(SPAWN_ROLL_RANGE));
        debug_assert!(location < count, "random source broke its bound");
        let (row, col) = self.board.place_in_empty(location, value)?;
        log::debug!("spawned {} at ({}, {})", value, row, col);
        Some((row, col))
    }

    /// Whether a move in `dir` would change the board.
    pub fn can_move(&self, dir: Direction) -> bool {
        self.board.can_move(dir)
    }

    /// Slide and merge toward `dir`, then spawn a tile if anything moved.
    /// Returns whether the board changed.
    pub fn make_move(&mut self, dir: Direction) -> bool {
        let before = self.board.score();
        if !self.board.shift(dir) {
            log::debug!("move {} rejected", dir);
            return false;
        }
        log::debug!("move {}: +{} points", dir, self.board.score() - before);
        self.spawn_random_tile();
        true
    }

    pub fn clear_annotations(&mut self) {
        self.board.clear_annotations();
    }

    pub fn is_game_over(&self) -> bool {
        self.board.is_game_over()
    }

    /// Evaluate the current game status.
    pub fn status(&self) -> GameStatus {
        if self.is_game_over() {
            GameStatus::Over
        } else {
            GameStatus::InProgress
        }
    }

    /// The injected random source.
    pub fn source(&self) -> &R {
        &self.rng
    }
}
