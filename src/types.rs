//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Default playfield dimensions (rows x columns)
pub const PLAYFIELD_ROWS: usize = 20;
pub const PLAYFIELD_COLS: usize = 10;

/// Default gravity interval in milliseconds
pub const DEFAULT_DROP_MS: u64 = 500;

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All seven kinds, in the canonical definition order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];
}

/// Player actions understood by the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    MoveDown,
    Rotate,
}

/// Cell on the playfield (None = empty, Some = locked piece kind)
pub type Cell = Option<PieceKind>;
