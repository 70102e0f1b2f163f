//! Pure simulation core with no terminal dependencies
//!
//! Everything under this module is deterministic and side-effect free with
//! respect to the outside world: no I/O, no clocks, no global state. The
//! terminal layer consumes it through `GameSession` accessors.

pub mod pieces;
pub mod playfield;
pub mod rng;
pub mod session;

pub use pieces::{matrix_for, PieceMatrix};
pub use playfield::Playfield;
pub use rng::{Lcg32, PieceBag};
pub use session::{GameSession, Tetromino};
