use arrayvec::ArrayVec;

use crate::board::RowList;
use crate::piece::Piece;
use crate::session::Phase;
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, QUEUE_LEN};

/// Read-only view of a session, taken once per frame for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: [[Cell; BOARD_WIDTH]; BOARD_HEIGHT],
    pub active: Piece,
    pub queue: ArrayVec<Piece, QUEUE_LEN>,
    pub score: u32,
    pub phase: Phase,
    /// Rows waiting to be removed while `phase` is `RowClearing`
    pub filled_rows: RowList,
    pub pieces_landed: u32,
}

impl GameSnapshot {
    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn row_clearing(&self) -> bool {
        self.phase == Phase::RowClearing
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0; BOARD_WIDTH]; BOARD_HEIGHT],
            active: Piece::new(PieceKind::O),
            queue: ArrayVec::new(),
            score: 0,
            phase: Phase::Falling,
            filled_rows: RowList::new(),
            pieces_landed: 0,
        }
    }
}
