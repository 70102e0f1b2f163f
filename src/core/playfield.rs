//! Playfield grid and row compaction
//!
//! The playfield is a flat row-major buffer of cells sized once at session
//! start. Each cell is either empty or holds the kind of the piece locked
//! into it; the kind only matters for rendering, the simulation itself cares
//! about occupancy.
//!
//! Piece coordinates are signed: pieces spawn with negative row offsets and
//! slide into view, so placement tests accept rows above the top edge while
//! columns and the bottom edge stay hard bounds.

use crate::core::pieces::PieceMatrix;
use crate::types::{Cell, PieceKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playfield {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Playfield {
    /// Create an all-empty playfield. Dimensions are fixed for its lifetime.
    pub fn new(rows: usize, cols: usize) -> Self {
        debug_assert!(rows > 0 && cols > 0);
        Playfield {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Flat index for in-bounds coordinates
    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.rows && col < self.cols {
            Some(row * self.cols + col)
        } else {
            None
        }
    }

    /// Cell at (row, col); None when out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Write a cell. Returns false (and writes nothing) when out of bounds.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// Raw cell buffer, row-major
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Placement test for a piece matrix at (row, col), top-left anchored.
    ///
    /// Every occupied matrix cell must land in a column inside `[0, cols)`
    /// and in a row above `rows`; rows above the field (negative) are fine.
    /// Cells that land inside the field must be empty. No side effects.
    pub fn fits(&self, matrix: &PieceMatrix, row: i16, col: i16) -> bool {
        matrix.occupied().all(|(r, c)| {
            let abs_row = row + r as i16;
            let abs_col = col + c as i16;
            if abs_col < 0 || abs_col >= self.cols as i16 {
                return false;
            }
            if abs_row >= self.rows as i16 {
                return false;
            }
            abs_row < 0 || self.cells[abs_row as usize * self.cols + abs_col as usize].is_none()
        })
    }

    /// Commit a piece into the grid.
    ///
    /// Refused (returns false, writes nothing) when any occupied cell is
    /// still above the top row: a piece that never fully entered the field
    /// ends the game instead of locking. The caller is expected to pass a
    /// position that already passed `fits`.
    pub fn lock(&mut self, kind: PieceKind, matrix: &PieceMatrix, row: i16, col: i16) -> bool {
        if matrix.occupied().any(|(r, _)| row + (r as i16) < 0) {
            return false;
        }
        for (r, c) in matrix.occupied() {
            let abs_row = (row + r as i16) as usize;
            let abs_col = (col + c as i16) as usize;
            self.cells[abs_row * self.cols + abs_col] = Some(kind);
        }
        true
    }

    /// True when every cell of `row` is occupied
    pub fn is_row_complete(&self, row: usize) -> bool {
        if row >= self.rows {
            return false;
        }
        let start = row * self.cols;
        self.cells[start..start + self.cols]
            .iter()
            .all(|cell| cell.is_some())
    }

    /// Remove every complete row, compacting the rows above downward.
    ///
    /// Scans bottom to top. Each removal slides all rows above down by one
    /// and rechecks the same index, because a complete row may have slid
    /// into it; stacked complete rows therefore cascade in a single call.
    /// Returns the number of rows removed.
    pub fn clear_completed_rows(&mut self) -> u32 {
        let mut cleared = 0;
        let mut cursor = self.rows;
        while cursor > 0 {
            let row = cursor - 1;
            if self.is_row_complete(row) {
                self.shift_down_into(row);
                cleared += 1;
            } else {
                cursor -= 1;
            }
        }
        cleared
    }

    /// Overwrite `row` by sliding every row above it down one step.
    /// Row 0 becomes empty.
    fn shift_down_into(&mut self, row: usize) {
        for r in (1..=row).rev() {
            let src = (r - 1) * self.cols;
            let dst = r * self.cols;
            self.cells.copy_within(src..src + self.cols, dst);
        }
        for cell in &mut self.cells[..self.cols] {
            *cell = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pieces::matrix_for;

    fn small() -> Playfield {
        Playfield::new(4, 3)
    }

    #[test]
    fn new_field_is_empty() {
        let field = Playfield::new(20, 10);
        assert_eq!(field.rows(), 20);
        assert_eq!(field.cols(), 10);
        assert!(field.cells().iter().all(|cell| cell.is_none()));
    }

    #[test]
    fn set_and_get_roundtrip() {
        let mut field = small();
        assert!(field.set(2, 1, Some(PieceKind::T)));
        assert_eq!(field.get(2, 1), Some(Some(PieceKind::T)));
        assert_eq!(field.get(0, 0), Some(None));
    }

    #[test]
    fn out_of_bounds_access() {
        let mut field = small();
        assert_eq!(field.get(4, 0), None);
        assert_eq!(field.get(0, 3), None);
        assert!(!field.set(9, 9, Some(PieceKind::I)));
    }

    #[test]
    fn fits_inside_empty_field() {
        let field = Playfield::new(20, 10);
        let t = matrix_for(PieceKind::T);
        assert!(field.fits(&t, 0, 0));
    }

    #[test]
    fn fits_rejects_left_and_right_walls() {
        let field = Playfield::new(20, 10);
        let o = matrix_for(PieceKind::O);
        assert!(field.fits(&o, 0, 0));
        assert!(!field.fits(&o, 0, -1));
        assert!(field.fits(&o, 0, 8));
        assert!(!field.fits(&o, 0, 9));
        assert!(!field.fits(&o, 0, 10));
    }

    #[test]
    fn fits_rejects_the_floor_exactly() {
        let field = Playfield::new(20, 10);
        let o = matrix_for(PieceKind::O);
        assert!(field.fits(&o, 18, 4));
        assert!(!field.fits(&o, 19, 4));
    }

    #[test]
    fn fits_allows_rows_above_the_field() {
        let mut field = Playfield::new(20, 10);
        // Fill the whole top row; a piece hovering above it still fits
        for col in 0..10 {
            field.set(0, col, Some(PieceKind::Z));
        }
        let o = matrix_for(PieceKind::O);
        assert!(field.fits(&o, -2, 4));
        assert!(!field.fits(&o, -1, 4));
    }

    #[test]
    fn fits_rejects_occupied_cells() {
        let mut field = Playfield::new(20, 10);
        field.set(1, 1, Some(PieceKind::S));
        let o = matrix_for(PieceKind::O);
        assert!(!field.fits(&o, 0, 0));
        assert!(field.fits(&o, 0, 2));
    }

    #[test]
    fn lock_writes_piece_cells() {
        let mut field = Playfield::new(20, 10);
        let o = matrix_for(PieceKind::O);
        assert!(field.lock(PieceKind::O, &o, 18, 4));
        for (row, col) in [(18, 4), (18, 5), (19, 4), (19, 5)] {
            assert_eq!(field.get(row, col), Some(Some(PieceKind::O)));
        }
    }

    #[test]
    fn lock_refuses_pieces_above_the_top() {
        let mut field = Playfield::new(20, 10);
        let o = matrix_for(PieceKind::O);
        assert!(!field.lock(PieceKind::O, &o, -1, 4));
        assert!(field.cells().iter().all(|cell| cell.is_none()));
    }

    #[test]
    fn lock_ignores_padding_rows() {
        let mut field = Playfield::new(20, 10);
        // The I matrix has an empty first row, so row -1 puts only padding
        // above the field and the lock goes through.
        let i = matrix_for(PieceKind::I);
        assert!(field.lock(PieceKind::I, &i, -1, 3));
        for col in 3..7 {
            assert_eq!(field.get(0, col), Some(Some(PieceKind::I)));
        }
    }

    #[test]
    fn complete_row_detection() {
        let mut field = small();
        assert!(!field.is_row_complete(3));
        for col in 0..3 {
            field.set(3, col, Some(PieceKind::J));
        }
        assert!(field.is_row_complete(3));
        field.set(3, 1, None);
        assert!(!field.is_row_complete(3));
        assert!(!field.is_row_complete(7));
    }

    #[test]
    fn clear_single_row() {
        let mut field = small();
        field.set(2, 0, Some(PieceKind::L));
        for col in 0..3 {
            field.set(3, col, Some(PieceKind::J));
        }
        assert_eq!(field.clear_completed_rows(), 1);
        // The lone cell above slides down one row
        assert_eq!(field.get(3, 0), Some(Some(PieceKind::L)));
        assert_eq!(field.get(2, 0), Some(None));
    }

    #[test]
    fn clear_cascades_two_full_rows() {
        let mut field = Playfield::new(2, 3);
        for row in 0..2 {
            for col in 0..3 {
                field.set(row, col, Some(PieceKind::T));
            }
        }
        assert_eq!(field.clear_completed_rows(), 2);
        assert!(field.cells().iter().all(|cell| cell.is_none()));
    }

    #[test]
    fn clear_shifts_contents_down() {
        let mut field = Playfield::new(3, 3);
        field.set(0, 0, Some(PieceKind::I));
        for row in 1..3 {
            for col in 0..3 {
                field.set(row, col, Some(PieceKind::S));
            }
        }
        assert_eq!(field.clear_completed_rows(), 2);
        assert_eq!(field.get(2, 0), Some(Some(PieceKind::I)));
        assert_eq!(field.get(2, 1), Some(None));
        for col in 0..3 {
            assert_eq!(field.get(0, col), Some(None));
            assert_eq!(field.get(1, col), Some(None));
        }
    }

    #[test]
    fn clear_handles_sandwiched_partial_row() {
        let mut field = Playfield::new(4, 2);
        field.set(1, 0, Some(PieceKind::J));
        field.set(1, 1, Some(PieceKind::J));
        field.set(2, 0, Some(PieceKind::T));
        field.set(3, 0, Some(PieceKind::Z));
        field.set(3, 1, Some(PieceKind::Z));
        assert_eq!(field.clear_completed_rows(), 2);
        // Only the partial row survives, landed on the floor
        assert_eq!(field.get(3, 0), Some(Some(PieceKind::T)));
        assert_eq!(field.get(3, 1), Some(None));
        for row in 0..3 {
            for col in 0..2 {
                assert_eq!(field.get(row, col), Some(None));
            }
        }
    }

    #[test]
    fn clear_on_clean_field_is_a_noop() {
        let mut field = Playfield::new(20, 10);
        assert_eq!(field.clear_completed_rows(), 0);
    }
}
