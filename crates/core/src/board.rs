//! Board module - manages the play area grid
//!
//! The board is a 12x18 grid of empty, filled or marked cells.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..11 (left to right), y ranges 0..17 (top to bottom)
//!
//! Clearing is split in two steps so the caller can show completed rows
//! before they disappear: [`Board::detect_full_rows`] marks them and
//! [`Board::compact`] removes them later.

use arrayvec::ArrayVec;

use crate::pieces::{Piece, PIECE_BOX};
use crate::types::{Cell, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Rows a single piece can complete at once
pub const MAX_ROWS_PER_LOCK: usize = PIECE_BOX as usize;

/// The play area - 12 columns x 18 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
    /// Topmost row holding a block; `BOARD_HEIGHT` when the board is empty
    highest_block: u8,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_SIZE],
            highest_block: BOARD_HEIGHT,
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
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
                if cell.is_occupied() {
                    self.highest_block = self.highest_block.min(y as u8);
                }
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and empty
    pub fn is_free(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Cell::Empty))
    }

    /// Check if position is within bounds and filled or marked
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(cell) if cell.is_occupied())
    }

    /// Whether `piece`, turned to `rotation` and shifted by (dx, dy), lies
    /// entirely inside the board on empty cells
    pub fn fits(&self, piece: &Piece, rotation: Rotation, dx: i8, dy: i8) -> bool {
        for y in 0..PIECE_BOX {
            for x in 0..PIECE_BOX {
                if piece.occupies(x, y, rotation)
                    && !self.is_free(piece.x + dx + x, piece.y + dy + y)
                {
                    return false;
                }
            }
        }
        true
    }

    /// Commit the piece's cells at its current pose
    ///
    /// Callers must have fit-checked the pose; out-of-bounds cells are skipped.
    pub fn lock(&mut self, piece: &Piece) {
        for (x, y) in piece.board_cells() {
            self.set(x, y, Cell::Filled);
        }
    }

    /// Check if a row is completely occupied
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .map(|row| row.iter().all(|cell| cell.is_occupied()))
            .unwrap_or(false)
    }

    /// Check if a row has been marked for clearing
    pub fn is_row_marked(&self, y: usize) -> bool {
        self.row(y)
            .map(|row| row.iter().all(|cell| *cell == Cell::Marked))
            .unwrap_or(false)
    }

    /// Mark every full row among the four starting at `from_y`
    ///
    /// A single piece spans at most four rows, so rows outside that window
    /// cannot have been completed by the last lock. Returns the marked rows
    /// from top to bottom.
    pub fn detect_full_rows(&mut self, from_y: i8) -> ArrayVec<u8, MAX_ROWS_PER_LOCK> {
        let mut marked = ArrayVec::new();
        let start = from_y.max(0) as usize;
        let end = (start + MAX_ROWS_PER_LOCK).min(BOARD_HEIGHT as usize);
        let width = BOARD_WIDTH as usize;

        for y in start..end {
            if self.is_row_full(y) && !self.is_row_marked(y) {
                let row_start = y * width;
                self.cells[row_start..row_start + width].fill(Cell::Marked);
                marked.push(y as u8);
            }
        }
        marked
    }

    /// Remove every marked row, shifting the rows above down
    ///
    /// Returns the number of rows removed; zero means the board is unchanged.
    pub fn compact(&mut self) -> usize {
        let width = BOARD_WIDTH as usize;
        let mut removed = 0;
        let mut y = BOARD_HEIGHT as usize;

        // The same index is examined again after a shift, since a new row
        // slid into it.
        while y > 0 {
            let row = y - 1;
            if self.is_row_marked(row) {
                self.cells.copy_within(0..row * width, width);
                self.cells[..width].fill(Cell::Empty);
                removed += 1;
            } else {
                y -= 1;
            }
        }

        if removed > 0 {
            let lowered = self.highest_block as usize + removed;
            self.highest_block = lowered.min(BOARD_HEIGHT as usize) as u8;
        }
        removed
    }

    /// Topmost row holding a block, or the board height when empty
    pub fn highest_block(&self) -> u8 {
        self.highest_block
    }

    /// Number of occupied (filled or marked) cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_occupied()).count()
    }

    /// Borrow one row of cells
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= BOARD_HEIGHT as usize {
            return None;
        }
        let width = BOARD_WIDTH as usize;
        Some(&self.cells[y * width..(y + 1) * width])
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Write the board as numeric cell codes (0 empty, 1 filled, 2 marked)
    pub fn write_u8_grid(&self, out: &mut [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        for (y, row) in out.iter_mut().enumerate() {
            for (x, code) in row.iter_mut().enumerate() {
                *code = self.cells[y * BOARD_WIDTH as usize + x].code();
            }
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
        self.highest_block = BOARD_HEIGHT;
    }

    /// Fill a whole row, for building test positions
    pub fn fill_row(&mut self, y: i8) {
        for x in 0..BOARD_WIDTH as i8 {
            self.set(x, y, Cell::Filled);
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
