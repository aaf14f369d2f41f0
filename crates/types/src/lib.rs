//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies, so they can be used
//! by the simulation core, the terminal renderer and the input mapping alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//! - **Spawn position**: column 4, row 0
//!
//! # Cell Values
//!
//! Board cells are plain `u8` values: `0` is empty and `1..=7` is the shape id of
//! the piece that settled there. The renderer uses the same id as its color key.
//!
//! | Id | Shape |
//! |----|-------|
//! | 1 | O |
//! | 2 | L |
//! | 3 | J |
//! | 4 | S |
//! | 5 | Z |
//! | 6 | T |
//! | 7 | I |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let kind = PieceKind::from_id(7).unwrap();
//! assert_eq!(kind, PieceKind::I);
//! assert_eq!(kind.id(), 7);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: usize = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: usize = 20;

/// Nominal timer tick interval (one gravity step per second)
pub const TICK_MS: u32 = 1000;

/// Duration of one frame of the row-clear and game-over flashes
pub const FLASH_FRAME_MS: u32 = 350;

/// Highlight/normal pairs shown before completed rows are removed
pub const ROW_CLEAR_FLASHES: u32 = 2;

/// Column and row where freshly generated pieces start
pub const SPAWN_POSITION: (i8, i8) = (4, 0);

/// Position the falling piece is reset to after a row clear.
///
/// One row lower than the spawn row.
pub const ROW_CLEAR_RESET_POSITION: (i8, i8) = (4, 1);

/// Releasing soft drop only forfeits the bonus while the piece is above this row.
pub const SOFT_DROP_KEEP_ROW: i8 = 17;

/// Minimum number of upcoming pieces kept in the lookahead queue
pub const QUEUE_LEN: usize = 3;

/// Largest piece matrix (the I piece is 4x4)
pub const MAX_PIECE_SIZE: usize = 4;

/// Row-clear scoring table (classic per-clear bonuses)
///
/// - 0 rows: 0 points
/// - 1 row: 40 points
/// - 2 rows: 100 points
/// - 3 rows: 300 points
/// - 4 rows: 1200 points
///
/// Any other count scores nothing.
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// Value stored in one board cell (0 = empty, 1-7 = shape id)
pub type Cell = u8;

/// Empty board cell
pub const EMPTY: Cell = 0;

/// The seven tetromino shapes, numbered by their cell value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    O = 1,
    L = 2,
    J = 3,
    S = 4,
    Z = 5,
    T = 6,
    I = 7,
}

impl PieceKind {
    /// All kinds in id order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::O,
        PieceKind::L,
        PieceKind::J,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::T,
        PieceKind::I,
    ];

    /// Cell value written to the board when this piece lands
    pub fn id(self) -> Cell {
        self as Cell
    }

    /// Look up a kind by its cell value
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_id(1), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_id(0), None);
    /// assert_eq!(PieceKind::from_id(8), None);
    /// ```
    pub fn from_id(id: Cell) -> Option<Self> {
        match id {
            1 => Some(PieceKind::O),
            2 => Some(PieceKind::L),
            3 => Some(PieceKind::J),
            4 => Some(PieceKind::S),
            5 => Some(PieceKind::Z),
            6 => Some(PieceKind::T),
            7 => Some(PieceKind::I),
            _ => None,
        }
    }

    /// Single-letter name
    pub fn as_str(self) -> &'static str {
        match self {
            PieceKind::O => "O",
            PieceKind::L => "L",
            PieceKind::J => "J",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::T => "T",
            PieceKind::I => "I",
        }
    }
}

/// One-cell movement direction for the falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Down,
}

impl Direction {
    /// Column/row delta of a single step
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
        }
    }
}

/// Logical inputs consumed by the game session
///
/// Soft drop distinguishes the initial press (counts toward the soft-drop
/// bonus), held-key repeats (`MoveDown`, no bonus) and the release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down without touching the soft-drop counter
    MoveDown,
    /// Soft-drop key pressed: move down and count one bonus point
    SoftDrop,
    /// Soft-drop key released
    SoftDropRelease,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Periodic gravity tick
    Tick,
}
