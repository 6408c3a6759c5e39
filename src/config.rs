/// Number of tiles spawned onto a fresh board.
pub const NUM_START_TILES: usize = 2;

/// Percent chance that a spawned tile is a 2 rather than a 4.
pub const TWO_PROBABILITY: usize = 90;

/// Exclusive upper bound of the roll compared against [`TWO_PROBABILITY`].
pub const SPAWN_ROLL_RANGE: usize = 100;

/// Smallest playable board edge.
pub const MIN_BOARD_SIZE: usize = 2;

/// Board edge used when a host does not ask for one.
pub const DEFAULT_BOARD_SIZE: usize = 4;

/// Largest tile value a board can hold. Two of these never merge.
pub const MAX_TILE: crate::common::Tile = 1 << 63;

/// Environment variable read by `init_logging`.
pub const LOG_ENV_VAR: &str = "TWENTY48_LOG";

/// Pick the tile value for a spawn roll in `[0, SPAWN_ROLL_RANGE)`.
pub const fn spawn_value(roll: usize) -> crate::common::Tile {
    if roll < TWO_PROBABILITY {
        2
    } else {
        4
    }
}
