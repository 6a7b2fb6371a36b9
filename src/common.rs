//! Common types for the 2048 engine: directions, move outcomes and board errors.

/// A direction in which the tiles can be slid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in a fixed order. Handy for exhaustive sweeps.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

/// Result of a move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Whether the grid changed as a result of the move. A `true` here
    /// means a new tile was spawned before the call returned.
    pub moved: bool,
}

/// Current status of a game, as reported to the host loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Over,
}

/// Errors returned by Board operations.
#[derive(Debug, PartialEq, Eq)]
pub enum BoardError {
    /// A nonzero cell value that is not a power of two >= 2.
    InvalidTileValue {
        row: usize,
        col: usize,
        value: u32,
    },
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::InvalidTileValue { row, col, value } => write!(
                f,
                "cell ({}, {}) holds {}, which is not a power of two",
                row, col, value
            ),
        }
    }
}
