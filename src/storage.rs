#![cfg(feature = "std")]
//! Saving and loading snapshots on disk.

use std::fs;
use std::io;
use std::path::Path;

use crate::{
    common::{EngineError, SnapshotError},
    game::GameEngine,
    random::RandomSource,
    snapshot::BoardState,
};

/// Errors from file persistence.
#[derive(Debug)]
pub enum StorageError {
    /// Reading or writing the file failed.
    Io(io::Error),
    /// The file content could not become an engine.
    Engine(EngineError),
}

impl From<io::Error> for StorageError {
    fn from(err: io::Error) -> Self {
        StorageError::Io(err)
    }
}

impl From<EngineError> for StorageError {
    fn from(err: EngineError) -> Self {
        StorageError::Engine(err)
    }
}

impl From<SnapshotError> for StorageError {
    fn from(err: SnapshotError) -> Self {
        StorageError::Engine(EngineError::MalformedSnapshot(err))
    }
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(e) => write!(f, "I/O error: {}", e),
            StorageError::Engine(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::Io(e) => Some(e),
            StorageError::Engine(e) => Some(e),
        }
    }
}

/// Write the engine's snapshot to `path`, replacing any existing file.
pub fn save_to_path<R: RandomSource>(
    path: impl AsRef<Path>,
    engine: &GameEngine<R>,
) -> Result<(), StorageError> {
    let path = path.as_ref();
    fs::write(path, engine.save_game())?;
    log::info!("saved game to {}", path.display());
    Ok(())
}

/// Read and validate a snapshot file without building an engine.
pub fn read_state(path: impl AsRef<Path>) -> Result<BoardState, StorageError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    text.parse::<BoardState>().map_err(|e| {
        log::warn!("rejected snapshot {}: {}", path.display(), e);
        StorageError::from(e)
    })
}

/// Load a game from `path`, drawing future spawns from `rng`.
pub fn load_from_path<R: RandomSource>(
    path: impl AsRef<Path>,
    rng: R,
) -> Result<GameEngine<R>, StorageError> {
    let path = path.as_ref();
    let state = read_state(path)?;
    let engine = GameEngine::from_state(state, rng)?;
    log::info!("loaded {}x{} game from {}", engine.size(), engine.size(), path.display());
    Ok(engine)
}
