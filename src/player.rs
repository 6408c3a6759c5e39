use alloc::string::String;

use crate::{board::Board, common::Direction};

/// What an input layer asks the session to do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    /// Write a snapshot to the given path and keep playing.
    Save(String),
    Quit,
}

/// Interface implemented by different player types.
pub trait Player {
    /// Choose the next command given the current board.
    fn next_command(&mut self, board: &Board) -> Command;

    /// Inform the player whether its last move changed the board.
    fn handle_move_result(&mut self, _dir: Direction, _moved: bool) {}
}
