#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod board;
mod common;
mod config;
mod game;
mod grid;
pub mod line;
mod player;
mod player_ai;
mod random;
mod snapshot;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
mod player_cli;
#[cfg(feature = "std")]
pub mod session;
#[cfg(feature = "std")]
pub mod storage;

pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use grid::Grid;
pub use player::*;
pub use player_ai::*;
pub use random::{RandomSource, ScriptedSource};
pub use snapshot::{is_valid_snapshot, BoardState};
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use player_cli::*;
#[cfg(feature = "std")]
pub use session::{Session, SessionSummary};
#[cfg(feature = "std")]
pub use storage::StorageError;
