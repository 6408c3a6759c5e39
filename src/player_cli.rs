#![cfg(feature = "std")]

use std::io::{self, BufRead, StdinLock, Write};
use std::string::String;

use crate::{
    board::Board,
    common::Direction,
    player::{Command, Player},
};

/// Human player typing commands, one per line.
pub struct CliPlayer<I: BufRead> {
    input: I,
}

impl CliPlayer<StdinLock<'static>> {
    pub fn new() -> Self {
        Self::from_reader(io::stdin().lock())
    }
}

impl<I: BufRead> CliPlayer<I> {
    pub fn from_reader(input: I) -> Self {
        Self { input }
    }
}

/// Parse one input line into a command.
pub fn parse_command(input: &str) -> Result<Command, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    let mut parts = input.split_whitespace();
    let head = parts.next().unwrap_or_default();
    if head.eq_ignore_ascii_case("q") || head.eq_ignore_ascii_case("quit") {
        return Ok(Command::Quit);
    }
    if head.eq_ignore_ascii_case("save") {
        return match parts.next() {
            Some(path) => Ok(Command::Save(path.to_string())),
            None => Err("save needs a file name (e.g., save game.board)".to_string()),
        };
    }
    head.parse::<Direction>()
        .map(Command::Move)
        .map_err(|e| format!("Invalid command '{}' - {}", head, e))
}

impl<I: BufRead> Player for CliPlayer<I> {
    fn next_command(&mut self, board: &Board) -> Command {
        loop {
            println!("\n{}", board);
            print!("Move [w/a/s/d, save <file>, q]: ");
            let _ = io::stdout().flush();
            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) => return Command::Quit,
                Ok(_) => {}
                Err(e) => {
                    log::warn!("failed to read input: {}", e);
                    return Command::Quit;
                }
            }
            match parse_command(&line) {
                Ok(cmd) => return cmd,
                Err(msg) => println!("{}", msg),
            }
        }
    }

    fn handle_move_result(&mut self, dir: Direction, moved: bool) {
        if !moved {
            println!("Cannot move {}", dir);
        }
    }
}
