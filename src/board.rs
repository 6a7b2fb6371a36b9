//! Grid state and the slide/merge/spawn rules that operate on it.

use crate::common::{BoardError, Direction};
use crate::config::{FOUR_TILE_PROBABILITY, GRID_SIZE};
use rand::Rng;

/// One row or column of the grid, ordered toward the edge a slide moves to.
pub type Line = [u32; GRID_SIZE];

/// The square tile grid. `0` marks an empty cell; every nonzero cell holds
/// a power of two.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[u32; GRID_SIZE]; GRID_SIZE],
}

/// Merge a single line in slide order (index 0 is the edge being slid
/// toward). Zeros are compacted out, then each adjacent equal pair merges
/// into one doubled tile, front to back. A tile produced by a merge never
/// merges again in the same pass, so `[2, 2, 2, 2]` yields `[4, 4, 0, 0]`.
///
/// Returns the resolved line, padded with zeros, and the sum of the merged
/// tile values (the score gained by this line).
pub fn merge_line(line: &Line) -> (Line, u32) {
    let mut out = [0u32; GRID_SIZE];
    let mut fresh = [false; GRID_SIZE];
    let mut len = 0;
    let mut gained = 0;
    for &value in line.iter().filter(|&&v| v != 0) {
        if len > 0 && out[len - 1] == value && !fresh[len - 1] {
            out[len - 1] *= 2;
            fresh[len - 1] = true;
            gained += out[len - 1];
        } else {
            out[len] = value;
            len += 1;
        }
    }
    (out, gained)
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Board {
            cells: [[0; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Build a board from explicit cell values, validating that every
    /// nonzero cell holds a power of two >= 2.
    pub fn from_cells(cells: [[u32; GRID_SIZE]; GRID_SIZE]) -> Result<Self, BoardError> {
        for (row, line) in cells.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                if value != 0 && (value < 2 || !value.is_power_of_two()) {
                    return Err(BoardError::InvalidTileValue { row, col, value });
                }
            }
        }
        Ok(Board { cells })
    }

    /// Immutable view of the grid contents.
    pub fn cells(&self) -> &[[u32; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }

    /// Value at (row, col); `0` means empty.
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.cells[row][col]
    }

    /// Number of empty cells.
    pub fn count_empty(&self) -> usize {
        self.cells.iter().flatten().filter(|&&v| v == 0).count()
    }

    /// Number of occupied cells.
    pub fn count_nonzero(&self) -> usize {
        GRID_SIZE * GRID_SIZE - self.count_empty()
    }

    /// Largest tile currently on the board, or `0` for an empty board.
    pub fn max_tile(&self) -> u32 {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Map (line, k) to grid coordinates for a slide in `dir`. `line` picks
    /// the row or column; `k` counts cells outward from the edge the tiles
    /// travel toward, so the slide itself is always "toward index 0".
    fn cell_at(dir: Direction, line: usize, k: usize) -> (usize, usize) {
        match dir {
            Direction::Left => (line, k),
            Direction::Right => (line, GRID_SIZE - 1 - k),
            Direction::Up => (k, line),
            Direction::Down => (GRID_SIZE - 1 - k, line),
        }
    }

    /// Slide and merge every line toward `dir`. No randomness. Returns
    /// whether any cell changed and the score gained by merges.
    pub fn slide(&mut self, dir: Direction) -> (bool, u32) {
        let mut changed = false;
        let mut gained = 0;
        for line in 0..GRID_SIZE {
            let mut values = [0u32; GRID_SIZE];
            for (k, value) in values.iter_mut().enumerate() {
                let (r, c) = Self::cell_at(dir, line, k);
                *value = self.cells[r][c];
            }
            let (merged, delta) = merge_line(&values);
            gained += delta;
            for (k, &value) in merged.iter().enumerate() {
                let (r, c) = Self::cell_at(dir, line, k);
                if self.cells[r][c] != value {
                    self.cells[r][c] = value;
                    changed = true;
                }
            }
        }
        (changed, gained)
    }

    /// Write a 2 (or, rarely, a 4) into a uniformly chosen empty cell.
    /// Returns `false` without touching the grid when the board is full.
    pub fn spawn_tile<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        let empty = self.count_empty();
        if empty == 0 {
            return false;
        }
        let mut target = rng.random_range(0..empty);
        let value = if rng.random_bool(FOUR_TILE_PROBABILITY) {
            4
        } else {
            2
        };
        for row in self.cells.iter_mut() {
            for cell in row.iter_mut() {
                if *cell == 0 {
                    if target == 0 {
                        *cell = value;
                        return true;
                    }
                    target -= 1;
                }
            }
        }
        false
    }

    /// True when no move can change the grid: every cell is occupied and no
    /// two horizontal or vertical neighbors are equal.
    pub fn is_stuck(&self) -> bool {
        if self.count_empty() > 0 {
            return false;
        }
        for r in 0..GRID_SIZE {
            for c in 0..GRID_SIZE {
                if c + 1 < GRID_SIZE && self.cells[r][c] == self.cells[r][c + 1] {
                    return false;
                }
                if r + 1 < GRID_SIZE && self.cells[r][c] == self.cells[r + 1][c] {
                    return false;
                }
            }
        }
        true
    }
}
