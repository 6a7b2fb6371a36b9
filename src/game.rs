use crate::{
    board::Board,
    common::{Direction, GameStatus, MoveOutcome},
    config::{GRID_SIZE, INITIAL_TILES},
};
use rand::Rng;

/// Read-only snapshot of a game for rendering: grid contents plus score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub cells: [[u32; GRID_SIZE]; GRID_SIZE],
    pub score: u32,
}

/// Core game logic holding the grid and the running score.
///
/// The engine never seeds or owns an RNG; every operation that spawns a
/// tile takes one, so callers control reproducibility.
pub struct GameEngine {
    board: Board,
    score: u32,
}

impl GameEngine {
    /// Start a new game: empty grid, score zero, then the two initial
    /// tiles, each independently a 2 (90%) or a 4 (10%).
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut board = Board::new();
        for _ in 0..INITIAL_TILES {
            board.spawn_tile(rng);
        }
        Self { board, score: 0 }
    }

    /// Resume from an exact position. Mostly useful for tests and tools
    /// that need a specific grid rather than a random start.
    pub fn from_position(board: Board, score: u32) -> Self {
        Self { board, score }
    }

    /// Immutable reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Slide the tiles toward `dir`, crediting every merge to the score.
    /// When the grid changed, exactly one new tile is spawned before
    /// returning; otherwise the grid is left untouched.
    pub fn apply_move<R: Rng + ?Sized>(&mut self, dir: Direction, rng: &mut R) -> MoveOutcome {
        let (moved, gained) = self.board.slide(dir);
        self.score += gained;
        if moved {
            self.board.spawn_tile(rng);
        }
        MoveOutcome { moved }
    }

    /// True when no move in any direction can change the grid. Read-only;
    /// the caller decides when to stop issuing moves.
    pub fn is_terminal(&self) -> bool {
        self.board.is_stuck()
    }

    /// Evaluate the current game status.
    pub fn status(&self) -> GameStatus {
        if self.is_terminal() {
            GameStatus::Over
        } else {
            GameStatus::InProgress
        }
    }

    /// Generate a renderable snapshot of the current state.
    pub fn state(&self) -> GameState {
        GameState {
            cells: *self.board.cells(),
            score: self.score,
        }
    }
}
