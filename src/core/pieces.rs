//! Tetromino shape library
//!
//! Each of the seven kinds is defined once, in its spawn orientation, as a
//! square boolean matrix. The matrices carry their empty padding rows and
//! columns on purpose: padding determines where a piece sits inside its
//! bounding box, which feeds both the spawn column and the rotation pivot.

use crate::types::PieceKind;

/// Square occupancy matrix for one piece orientation.
///
/// Backed by a fixed 4x4 array so values are `Copy` and allocation-free;
/// `size` gives the logical dimension (2 for O, 4 for I, 3 otherwise).
/// Cells outside the logical size are always false.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceMatrix {
    size: usize,
    cells: [[bool; 4]; 4],
}

impl PieceMatrix {
    /// Build a matrix from row patterns (non-zero = occupied).
    /// The slice length sets the logical dimension.
    pub const fn from_rows(rows: &[&[u8]]) -> Self {
        let size = rows.len();
        let mut cells = [[false; 4]; 4];
        let mut r = 0;
        while r < size {
            let mut c = 0;
            while c < size {
                cells[r][c] = rows[r][c] != 0;
                c += 1;
            }
            r += 1;
        }
        PieceMatrix { size, cells }
    }

    /// Logical dimension (2, 3 or 4)
    pub fn size(&self) -> usize {
        self.size
    }

    /// True when the cell at (row, col) is occupied. Out-of-range is false.
    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size && self.cells[row][col]
    }

    /// Quarter-turn clockwise: `result[i][j] = self[size-1-j][i]`.
    ///
    /// Pure; the receiver is untouched. Applying it four times returns the
    /// original matrix.
    pub fn rotated(&self) -> Self {
        let n = self.size;
        let mut cells = [[false; 4]; 4];
        for i in 0..n {
            for j in 0..n {
                cells[i][j] = self.cells[n - 1 - j][i];
            }
        }
        PieceMatrix { size: n, cells }
    }

    /// Iterate the occupied (row, col) positions in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let size = self.size;
        (0..size)
            .flat_map(move |r| (0..size).map(move |c| (r, c)))
            .filter(move |&(r, c)| self.cells[r][c])
    }
}

const I_SHAPE: PieceMatrix = PieceMatrix::from_rows(&[
    &[0, 0, 0, 0],
    &[1, 1, 1, 1],
    &[0, 0, 0, 0],
    &[0, 0, 0, 0],
]);

const J_SHAPE: PieceMatrix = PieceMatrix::from_rows(&[
    &[1, 0, 0],
    &[1, 1, 1],
    &[0, 0, 0],
]);

const L_SHAPE: PieceMatrix = PieceMatrix::from_rows(&[
    &[0, 0, 1],
    &[1, 1, 1],
    &[0, 0, 0],
]);

const O_SHAPE: PieceMatrix = PieceMatrix::from_rows(&[
    &[1, 1],
    &[1, 1],
]);

const S_SHAPE: PieceMatrix = PieceMatrix::from_rows(&[
    &[0, 1, 1],
    &[1, 1, 0],
    &[0, 0, 0],
]);

const T_SHAPE: PieceMatrix = PieceMatrix::from_rows(&[
    &[0, 1, 0],
    &[1, 1, 1],
    &[0, 0, 0],
]);

const Z_SHAPE: PieceMatrix = PieceMatrix::from_rows(&[
    &[1, 1, 0],
    &[0, 1, 1],
    &[0, 0, 0],
]);

/// Spawn-orientation matrix for a piece kind
pub fn matrix_for(kind: PieceKind) -> PieceMatrix {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::L => L_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::Z => Z_SHAPE,
    }
}
