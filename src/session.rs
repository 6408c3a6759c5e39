#![cfg(feature = "std")]

use std::boxed::Box;

use crate::{
    common::{Score, Tile},
    game::{GameEngine, GameStatus},
    player::{Command, Player},
    random::RandomSource,
    storage,
};

/// How a session finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionSummary {
    pub status: GameStatus,
    pub score: Score,
    pub max_tile: Tile,
    /// Moves that changed the board.
    pub moves: usize,
}

/// Drives one player against one engine until the game ends, the player
/// quits, or the move cap is reached.
pub struct Session<R: RandomSource> {
    player: Box<dyn Player>,
    engine: GameEngine<R>,
    moves: usize,
}

impl<R: RandomSource> Session<R> {
    pub fn new(player: Box<dyn Player>, engine: GameEngine<R>) -> Self {
        Self {
            player,
            engine,
            moves: 0,
        }
    }

    pub fn engine(&self) -> &GameEngine<R> {
        &self.engine
    }

    pub fn into_engine(self) -> GameEngine<R> {
        self.engine
    }

    /// Number of moves that changed the board so far.
    pub fn move_count(&self) -> usize {
        self.moves
    }

    /// Run until done. `max_moves` caps the number of board-changing moves.
    pub fn run(&mut self, max_moves: Option<usize>) -> anyhow::Result<SessionSummary> {
        while !self.engine.is_game_over() {
            if max_moves.is_some_and(|cap| self.moves >= cap) {
                log::info!("move cap of {} reached", self.moves);
                break;
            }
            match self.player.next_command(self.engine.board()) {
                Command::Move(dir) => {
                    let moved = self.engine.make_move(dir);
                    if moved {
                        self.moves += 1;
                    }
                    self.player.handle_move_result(dir, moved);
                }
                Command::Save(path) => {
                    storage::save_to_path(&path, &self.engine)
                        .map_err(|e| anyhow::anyhow!("saving to {}: {}", path, e))?;
                }
                Command::Quit => break,
            }
        }
        Ok(self.summary())
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            status: self.engine.status(),
            score: self.engine.score(),
            max_tile: self.engine.max_tile(),
            moves: self.moves,
        }
    }
}
