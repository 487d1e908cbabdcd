//! Board module - manages the game grid and the score counters
//!
//! The board is a `width x height` grid where each cell is empty or locked by
//! a piece kind. Cells live in a flat row-major vector for cache locality.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom;
//! row 0 is the top visible row. Negative rows exist only for falling pieces:
//! they are above the board, never block and are dropped when a piece locks.

use log::debug;

use crate::config::validate_dimensions;
use crate::error::Result;
use crate::piece::Piece;
use crate::scoring::{calculate_line_score, level_for_lines};
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// The game board plus score, cleared lines and level
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    width: u16,
    height: u16,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
    score: u32,
    lines: u32,
    level: u32,
}

impl Board {
    /// Create an empty board
    ///
    /// Fails if either dimension is outside `4..=255`.
    pub fn new(width: u16, height: u16) -> Result<Self> {
        validate_dimensions(width, height)?;
        Ok(Self::empty(width, height))
    }

    /// Create an empty 10x20 board
    pub fn standard() -> Self {
        Self::empty(BOARD_WIDTH, BOARD_HEIGHT)
    }

    pub(crate) fn empty(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
            score: 0,
            lines: 0,
            level: 1,
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i16, y: i16) -> Option<usize> {
        if x < 0 || x >= self.width as i16 || y < 0 || y >= self.height as i16 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i16, y: i16) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Lock a single cell (puzzle setup and tests)
    ///
    /// Returns false if out of bounds. Cells can only be emptied by line clears.
    pub fn fill(&mut self, x: i16, y: i16, kind: PieceKind) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = Some(kind);
                true
            }
            None => false,
        }
    }

    /// Check if position is inside the board and locked
    pub fn is_occupied(&self, x: i16, y: i16) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Whether a piece cell at (x, y) would be illegal
    ///
    /// Columns outside the board and rows at or below the floor always block.
    /// Rows above the board never block.
    pub fn is_blocked(&self, x: i16, y: i16) -> bool {
        if x < 0 || x >= self.width as i16 || y >= self.height as i16 {
            return true;
        }
        y >= 0 && self.is_occupied(x, y)
    }

    /// Check that every cell of `piece` is in bounds and free
    pub fn is_valid(&self, piece: &Piece) -> bool {
        piece
            .occupied_cells()
            .iter()
            .all(|&(x, y)| !self.is_blocked(x, y))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.height as usize {
            return false;
        }
        let width = self.width as usize;
        let start = y * width;
        self.cells[start..start + width].iter().all(|cell| cell.is_some())
    }

    /// Clear all full rows and return how many were cleared
    ///
    /// Single bottom-to-top pass with a write cursor: surviving rows are copied
    /// down over the cleared ones, then the vacated rows at the top are emptied.
    pub fn clear_lines(&mut self) -> usize {
        let width = self.width as usize;
        let height = self.height as usize;
        let mut write_y = height;
        let mut cleared = 0;

        for read_y in (0..height).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src_start = read_y * width;
                self.cells
                    .copy_within(src_start..src_start + width, write_y * width);
            }
        }

        self.cells[..write_y * width].fill(None);
        cleared
    }

    /// Lock a piece into the grid, clear lines and update the counters
    ///
    /// Cells above the board are dropped. Returns the number of cleared rows.
    pub fn lock(&mut self, piece: &Piece) -> usize {
        for (x, y) in piece.occupied_cells() {
            if let Some(idx) = self.index(x, y) {
                self.cells[idx] = Some(piece.kind);
            }
        }

        let cleared = self.clear_lines();
        if cleared > 0 {
            let points = calculate_line_score(cleared, self.level);
            self.score = self.score.saturating_add(points);
            self.lines = self.lines.saturating_add(cleared as u32);
            self.level = level_for_lines(self.lines);
            debug!(
                "cleared {} line(s) for {} points, lines={} level={}",
                cleared, points, self.lines, self.level
            );
        }
        cleared
    }

    /// Award points that do not come from line clears (drop bonuses)
    pub fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// The spawn row is permanently blocked once anything locks in row 0
    pub fn is_game_over(&self) -> bool {
        self.cells[..self.width as usize]
            .iter()
            .any(|cell| cell.is_some())
    }

    /// How many rows `piece` can fall before landing
    pub fn hard_drop_distance(&self, piece: &Piece) -> i16 {
        let mut distance = 0;
        while self.is_valid(&piece.moved(0, distance + 1)) {
            distance += 1;
        }
        distance
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width as usize)
    }

    /// Create from rows of text for tests: `#` locked, anything else empty
    ///
    /// Rows are bottom-aligned; missing rows at the top are empty.
    #[cfg(test)]
    pub fn from_ascii(width: u16, height: u16, rows: &[&str]) -> Self {
        let mut board = Self::new(width, height).unwrap();
        let offset = height as usize - rows.len();
        for (i, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                if ch == '#' {
                    board.fill(x as i16, (offset + i) as i16, PieceKind::I);
                }
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::types::Rotation;

    #[test]
    fn test_board_index_calculation() {
        let board = Board::standard();
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(9, 0), Some(9));
        assert_eq!(board.index(0, 1), Some(10));
        assert_eq!(board.index(9, 19), Some(199));
        assert_eq!(board.index(-1, 0), None);
        assert_eq!(board.index(10, 0), None);
        assert_eq!(board.index(0, 20), None);
    }

    #[test]
    fn test_new_rejects_bad_dimensions() {
        assert!(matches!(
            Board::new(0, 20),
            Err(EngineError::InvalidDimensions { .. })
        ));
        assert!(Board::new(10, 300).is_err());
        let board = Board::new(6, 8).unwrap();
        assert_eq!((board.width(), board.height()), (6, 8));
        assert_eq!(board.cells().len(), 48);
    }

    #[test]
    fn test_blocked_rules() {
        let mut board = Board::standard();
        board.fill(4, 5, PieceKind::T);

        assert!(board.is_blocked(-1, 5));
        assert!(board.is_blocked(10, 5));
        assert!(board.is_blocked(3, 20));
        assert!(board.is_blocked(4, 5));
        assert!(!board.is_blocked(3, 5));
        // Above the board only the columns are checked.
        assert!(!board.is_blocked(4, -3));
        assert!(board.is_blocked(-1, -3));
    }

    #[test]
    fn test_clear_lines_single_pass_non_adjacent() {
        let mut board = Board::from_ascii(
            4,
            6,
            &[
                "#...", // row 1
                "####", // row 2 (full)
                ".#..", // row 3
                "####", // row 4 (full)
                "..#.", // row 5
            ],
        );

        assert_eq!(board.clear_lines(), 2);
        let expected = Board::from_ascii(4, 6, &["#...", ".#..", "..#."]);
        assert_eq!(board.cells(), expected.cells());
        assert_eq!(board.clear_lines(), 0);
    }

    #[test]
    fn test_lock_drops_cells_above_board() {
        let mut board = Board::standard();
        // Vertical I with its top two cells above the board.
        let piece = Piece::new(PieceKind::I, Rotation::East, 0, -2);
        assert!(board.is_valid(&piece));

        assert_eq!(board.lock(&piece), 0);
        let locked = board.cells().iter().filter(|c| c.is_some()).count();
        assert_eq!(locked, 2);
        assert!(board.is_occupied(2, 0));
        assert!(board.is_occupied(2, 1));
        assert!(board.is_game_over());
    }

    #[test]
    fn test_hard_drop_distance_on_empty_board() {
        let board = Board::standard();
        let piece = Piece::spawn(PieceKind::O, 10);
        // O occupies rows 0-1 of its box: anchor can reach y = 18.
        assert_eq!(board.hard_drop_distance(&piece), 18 - piece.y);
    }

    #[test]
    fn test_rows_iterates_top_to_bottom() {
        let mut board = Board::standard();
        board.fill(0, 19, PieceKind::L);
        let last = board.rows().last().unwrap();
        assert_eq!(last[0], Some(PieceKind::L));
        assert_eq!(board.rows().count(), 20);
    }
}
