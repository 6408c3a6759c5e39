#![cfg(feature = "std")]

use std::io::Cursor;

use twenty48::{
    parse_command, Board, CliPlayer, Command, Direction, GameEngine, GameStatus, Grid,
    GreedyPlayer, Player, ScriptedSource, Session,
};

#[test]
fn test_parse_command() {
    assert_eq!(parse_command("w").unwrap(), Command::Move(Direction::Up));
    assert_eq!(parse_command(" LEFT \n").unwrap(), Command::Move(Direction::Left));
    assert_eq!(parse_command("j").unwrap(), Command::Move(Direction::Down));
    assert_eq!(parse_command("d").unwrap(), Command::Move(Direction::Right));
    assert_eq!(parse_command("q").unwrap(), Command::Quit);
    assert_eq!(
        parse_command("save game.board").unwrap(),
        Command::Save("game.board".to_string())
    );
    assert!(parse_command("save").is_err());
    assert!(parse_command("").is_err());
    assert!(parse_command("jump").is_err());
}

#[test]
fn test_cli_player_skips_invalid_lines() {
    let board = Board::new(2).unwrap();
    let mut player = CliPlayer::from_reader(Cursor::new("nope\n\nd\n"));
    assert_eq!(player.next_command(&board), Command::Move(Direction::Right));
    // end of input quits
    assert_eq!(player.next_command(&board), Command::Quit);
}

#[test]
fn test_cli_session() {
    let engine = GameEngine::load_game("2 0 2 2 0 0", ScriptedSource::new(vec![0, 0])).unwrap();
    let player = CliPlayer::from_reader(Cursor::new("a\na\nq\n"));
    let mut session = Session::new(Box::new(player), engine);
    let summary = session.run(None).unwrap();
    // second "a" cannot move: [4,2 / 0,0]
    assert_eq!(summary.moves, 1);
    assert_eq!(summary.score, 4);
    assert_eq!(summary.max_tile, 4);
    assert_eq!(summary.status, GameStatus::InProgress);
    assert_eq!(session.engine().grid().cells(), &[4, 2, 0, 0]);
}

#[test]
fn test_greedy_prefers_scoring_move() {
    let grid = Grid::from_cells(4, vec![2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]).unwrap();
    let board = Board::from_grid(grid, 0).unwrap();
    assert_eq!(GreedyPlayer::best_move(&board), Some(Direction::Left));

    let stuck = Board::from_grid(Grid::from_cells(2, vec![2, 4, 4, 2]).unwrap(), 0).unwrap();
    assert_eq!(GreedyPlayer::best_move(&stuck), None);
    assert_eq!(GreedyPlayer::new().next_command(&stuck), Command::Quit);
}

#[test]
fn test_greedy_session_reaches_game_over() {
    let engine = GameEngine::new_game(3, 5).unwrap();
    let mut session = Session::new(Box::new(GreedyPlayer::new()), engine);
    let summary = session.run(None).unwrap();
    assert_eq!(summary.status, GameStatus::Over);
    assert!(summary.moves > 0);
    assert_eq!(summary.moves, session.move_count());
}

#[test]
fn test_move_cap() {
    let engine = GameEngine::new_game(4, 9).unwrap();
    let mut session = Session::new(Box::new(GreedyPlayer::new()), engine);
    let summary = session.run(Some(5)).unwrap();
    assert_eq!(summary.moves, 5);
    assert_eq!(summary.status, GameStatus::InProgress);
}
