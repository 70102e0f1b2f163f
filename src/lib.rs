//! blockfall: a terminal falling-block puzzle game.
//!
//! The crate splits into a pure simulation core and thin I/O layers:
//! - `core`: shapes, sequencing, playfield, session state machine
//! - `term`: framebuffer rendering over crossterm
//! - `input`: key-to-action mapping
//! - `config`: command-line options
//!
//! The binary in `main.rs` wires these into a timed loop; everything it
//! uses is public here so integration tests drive the same surface.

pub mod config;
pub mod core;
pub mod input;
pub mod term;
pub mod types;

pub use crate::core::{GameSession, PieceBag, PieceMatrix, Playfield, Tetromino};
pub use crate::types::{Cell, GameAction, PieceKind};
