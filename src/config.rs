/// Side length of the square grid.
pub const GRID_SIZE: usize = 4;

/// Number of tiles spawned when a new game starts.
pub const INITIAL_TILES: usize = 2;

/// Probability that a freshly spawned tile is a 4 rather than a 2.
pub const FOUR_TILE_PROBABILITY: f64 = 0.1;
