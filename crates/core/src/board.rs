//! Board module - manages the settled grid
//!
//! The board is a 10x20 grid of cell values (`0` empty, `1..=7` shape id).
//! Uses a flat array for cache locality and zero-allocation row shifting.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)

use arrayvec::ArrayVec;

use crate::scoring::line_clear_score;
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH, EMPTY};

/// Total number of cells on the board
const BOARD_SIZE: usize = BOARD_WIDTH * BOARD_HEIGHT;

/// Row indices, bottom-most first. Sized for the whole board.
pub type RowList = ArrayVec<usize, BOARD_HEIGHT>;

/// Result of scanning the board for completed rows
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilledRows {
    /// Completed row indices in descending order
    pub rows: RowList,
    /// Points awarded for clearing exactly these rows
    pub score: u32,
}

impl FilledRows {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// The settled grid - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [EMPTY; BOARD_SIZE],
        }
    }

    /// Build a board from rows (row 0 first)
    pub fn from_rows(rows: [[Cell; BOARD_WIDTH]; BOARD_HEIGHT]) -> Self {
        let mut board = Self::new();
        for (y, row) in rows.iter().enumerate() {
            board.row_mut(y).copy_from_slice(row);
        }
        board
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * BOARD_WIDTH + (x as usize))
    }

    pub fn width(&self) -> usize {
        BOARD_WIDTH
    }

    pub fn height(&self) -> usize {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// In bounds and holding a settled cell
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(v) if v != EMPTY)
    }

    pub fn is_out_of_bounds(&self, x: i8, y: i8) -> bool {
        !Self::contains(x, y)
    }

    /// (x, y) lies on the 10x20 grid
    pub fn contains(x: i8, y: i8) -> bool {
        Self::index(x, y).is_some()
    }

    /// Cells of row `y`
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * BOARD_WIDTH;
        &self.cells[start..start + BOARD_WIDTH]
    }

    fn row_mut(&mut self, y: usize) -> &mut [Cell] {
        let start = y * BOARD_WIDTH;
        &mut self.cells[start..start + BOARD_WIDTH]
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(BOARD_WIDTH)
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT {
            return false;
        }
        self.row(y).iter().all(|&cell| cell != EMPTY)
    }

    /// Find every completed row, bottom-most first, and the points they are worth.
    pub fn check_filled_rows(&self) -> FilledRows {
        let rows: RowList = (0..BOARD_HEIGHT)
            .rev()
            .filter(|&y| self.is_row_full(y))
            .collect();
        let score = line_clear_score(rows.len());
        FilledRows { rows, score }
    }

    /// Remove the given rows and let everything above fall into the gaps.
    ///
    /// Rows are compacted bottom to top with a read and a write cursor, so the
    /// result is the same as deleting each listed row and inserting an empty row
    /// at the top, whatever the order or adjacency of `rows`. Indices outside the
    /// board are ignored.
    pub fn remove_rows(&mut self, rows: &[usize]) {
        let mut write_y = BOARD_HEIGHT;

        for read_y in (0..BOARD_HEIGHT).rev() {
            if rows.contains(&read_y) {
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src = read_y * BOARD_WIDTH;
                self.cells
                    .copy_within(src..src + BOARD_WIDTH, write_y * BOARD_WIDTH);
            }
        }

        // Everything above the write cursor is fresh empty space.
        for y in 0..write_y {
            self.row_mut(y).fill(EMPTY);
        }
    }

    /// A settled cell in the top row ends the game
    pub fn is_lost(&self) -> bool {
        self.row(0).iter().any(|&cell| cell != EMPTY)
    }

    /// Copy the grid into a 2D array (render snapshots)
    pub fn write_grid(&self, out: &mut [[Cell; BOARD_WIDTH]; BOARD_HEIGHT]) {
        for (dst, src) in out.iter_mut().zip(self.rows()) {
            dst.copy_from_slice(src);
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
