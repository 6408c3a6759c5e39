#![cfg(feature = "std")]

use std::path::PathBuf;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use twenty48::{storage, Direction, EngineError, GameEngine, SnapshotError, StorageError};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("twenty48-{}-{}.board", std::process::id(), name))
}

#[test]
fn test_save_and_load_file() {
    let path = temp_path("roundtrip");
    let mut engine = GameEngine::new_game(4, 3).unwrap();
    for dir in [Direction::Left, Direction::Up, Direction::Right, Direction::Down] {
        engine.make_move(dir);
    }
    storage::save_to_path(&path, &engine).unwrap();

    let loaded = storage::load_from_path(&path, SmallRng::seed_from_u64(3)).unwrap();
    assert_eq!(loaded.state(), engine.state());
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_load_missing_file() {
    let path = temp_path("missing");
    let err = storage::load_from_path(&path, SmallRng::seed_from_u64(0)).err().unwrap();
    assert!(matches!(err, StorageError::Io(_)));
}

#[test]
fn test_load_malformed_file() {
    let path = temp_path("malformed");
    std::fs::write(&path, "4\n0\n2 2 2\n").unwrap();
    let err = storage::read_state(&path).unwrap_err();
    assert!(matches!(
        err,
        StorageError::Engine(EngineError::MalformedSnapshot(
            SnapshotError::CellCountMismatch { expected: 16, found: 3 }
        ))
    ));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_session_save_command() {
    use std::io::Cursor;
    use twenty48::{CliPlayer, Session};

    let path = temp_path("session");
    let input = format!("save {}\nq\n", path.display());
    let engine = GameEngine::new_game(3, 21).unwrap();
    let expected = engine.state();
    let mut session = Session::new(Box::new(CliPlayer::from_reader(Cursor::new(input))), engine);
    session.run(None).unwrap();

    let state = storage::read_state(&path).unwrap();
    assert_eq!(state, expected);
    let _ = std::fs::remove_file(&path);
}
