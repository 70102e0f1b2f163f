//! Game session state machine
//!
//! `GameSession` owns every piece of mutable game state: the playfield, the
//! falling tetromino, the sequencer and the terminal game-over flag. All
//! mutation goes through its methods; rendering reads through the accessors
//! and never writes back.
//!
//! Movement follows a tentative-then-revert scheme: apply the offset, test
//! the result against the playfield, undo on refusal. A refused downward
//! move is the single settling point where the piece locks, complete rows
//! compact and the next piece spawns.

use crate::core::pieces::{matrix_for, PieceMatrix};
use crate::core::playfield::Playfield;
use crate::core::rng::PieceBag;
use crate::types::{GameAction, PieceKind, PLAYFIELD_COLS, PLAYFIELD_ROWS};

/// The falling piece: kind, working rotation matrix and signed playfield
/// offsets of the matrix's top-left corner. The matrix is a copy, rotating
/// it never touches the shape constants. A fresh value is built per spawn;
/// a piece is replaced when it locks, never recycled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub matrix: PieceMatrix,
    pub row: i16,
    pub col: i16,
}

impl Tetromino {
    /// Place a new piece at its spawn position for a field `cols` wide.
    ///
    /// Column centers the bounding box: `cols / 2 - ceil(width / 2)`.
    /// Row starts above the visible field: -1 for I (whose top matrix row
    /// is padding), -2 for everything else.
    pub fn spawn(kind: PieceKind, cols: usize) -> Self {
        let matrix = matrix_for(kind);
        let width = matrix.size() as i16;
        let col = cols as i16 / 2 - (width + 1) / 2;
        let row = match kind {
            PieceKind::I => -1,
            _ => -2,
        };
        Tetromino {
            kind,
            matrix,
            row,
            col,
        }
    }
}

/// One game from first spawn to game over.
#[derive(Debug, Clone)]
pub struct GameSession {
    playfield: Playfield,
    bag: PieceBag,
    current: Tetromino,
    lines: u32,
    game_over: bool,
}

impl GameSession {
    /// Start a session on an empty `rows` x `cols` field with a seeded
    /// piece sequence. The first piece spawns immediately.
    pub fn new(rows: usize, cols: usize, seed: u32) -> Self {
        let playfield = Playfield::new(rows, cols);
        let mut bag = PieceBag::new(seed);
        let current = Tetromino::spawn(bag.draw(), cols);
        GameSession {
            playfield,
            bag,
            current,
            lines: 0,
            game_over: false,
        }
    }

    pub fn playfield(&self) -> &Playfield {
        &self.playfield
    }

    pub fn current(&self) -> &Tetromino {
        &self.current
    }

    /// Rows cleared so far (display statistic)
    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// True once the session has ended. One-way; every operation is a
    /// no-op afterwards.
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Gravity step. Returns false when the piece could not move down, in
    /// which case it has settled: locked into the field (or ended the game
    /// if it never fully entered), rows compacted, next piece spawned.
    pub fn move_down(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        self.current.row += 1;
        if self
            .playfield
            .fits(&self.current.matrix, self.current.row, self.current.col)
        {
            return true;
        }
        self.current.row -= 1;
        self.settle();
        false
    }

    pub fn move_left(&mut self) -> bool {
        self.shift(-1)
    }

    pub fn move_right(&mut self) -> bool {
        self.shift(1)
    }

    fn shift(&mut self, delta: i16) -> bool {
        if self.game_over {
            return false;
        }
        self.current.col += delta;
        if self
            .playfield
            .fits(&self.current.matrix, self.current.row, self.current.col)
        {
            return true;
        }
        self.current.col -= delta;
        false
    }

    /// Quarter-turn clockwise, committed only when the rotated matrix fits
    /// at the current position. No kick attempts: a blocked rotation leaves
    /// the piece exactly as it was.
    pub fn rotate(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        let candidate = self.current.matrix.rotated();
        if self
            .playfield
            .fits(&candidate, self.current.row, self.current.col)
        {
            self.current.matrix = candidate;
            true
        } else {
            false
        }
    }

    /// Scheduler entry point: one gravity step per call. Returns whether
    /// the caller should keep scheduling ticks; false once the game is
    /// over.
    pub fn tick(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        self.move_down();
        !self.game_over
    }

    /// Input entry point. Post-game-over events are ignored wholesale.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::MoveDown => self.move_down(),
            GameAction::Rotate => self.rotate(),
        }
    }

    /// Lock the current piece and bring up the next one. A lock refusal
    /// means part of the piece never entered the field; the session ends
    /// and the piece stays where it was for the final frame.
    fn settle(&mut self) {
        let Tetromino {
            kind,
            matrix,
            row,
            col,
        } = self.current;
        if !self.playfield.lock(kind, &matrix, row, col) {
            self.game_over = true;
            return;
        }
        self.lines += self.playfield.clear_completed_rows();
        self.current = Tetromino::spawn(self.bag.draw(), self.playfield.cols());
    }
}

impl Default for GameSession {
    fn default() -> Self {
        GameSession::new(PLAYFIELD_ROWS, PLAYFIELD_COLS, 1)
    }
}
