use crate::{
    board::Board,
    common::{Direction, Score},
    player::{Command, Player},
};

/// One-ply greedy player: takes the legal move with the largest immediate
/// score gain, preferring more empty cells on ties.
pub struct GreedyPlayer;

impl GreedyPlayer {
    pub fn new() -> Self {
        Self
    }

    /// Best legal direction for `board`, or `None` when the game is over.
    pub fn best_move(board: &Board) -> Option<Direction> {
        let mut best: Option<(Direction, (Score, usize))> = None;
        for dir in Direction::ALL {
            let mut trial = board.clone();
            if !trial.shift(dir) {
                continue;
            }
            let key = (trial.score() - board.score(), trial.empty_count());
            if best.map_or(true, |(_, k)| key > k) {
                best = Some((dir, key));
            }
        }
        best.map(|(dir, _)| dir)
    }
}

impl Default for GreedyPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for GreedyPlayer {
    fn next_command(&mut self, board: &Board) -> Command {
        match Self::best_move(board) {
            Some(dir) => Command::Move(dir),
            None => Command::Quit,
        }
    }
}
