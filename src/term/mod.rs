//! Terminal rendering layer
//!
//! `fb` holds the styled character grid, `game_view` lays a session out
//! into it, `renderer` flushes buffers to the terminal. Only `renderer`
//! touches I/O.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{piece_color, GameView, Viewport};
pub use renderer::TerminalRenderer;
