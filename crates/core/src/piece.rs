//! Piece module - tetromino matrices, movement and rotation
//!
//! A piece carries its footprint as a square matrix of cell values (2x2 for O,
//! 4x4 for I, 3x3 for the rest) positioned by its top-left corner. Rotation turns
//! the matrix in place and then nudges the position with a small per-shape table
//! so pieces rotating next to a wall or the floor stay on the board. There are no
//! wall-kick searches: a rotation either validates where it lands or the caller
//! restores the previous piece.

use crate::board::Board;
use crate::types::{Cell, Direction, PieceKind, EMPTY, MAX_PIECE_SIZE, SPAWN_POSITION};

/// Backing storage for a piece footprint; only the top-left `size` x `size` block is used.
pub type Matrix = [[Cell; MAX_PIECE_SIZE]; MAX_PIECE_SIZE];

/// Spawn footprint for a piece kind: (size, matrix)
pub fn spawn_matrix(kind: PieceKind) -> (usize, Matrix) {
    let o = kind.id();
    match kind {
        PieceKind::O => (2, [[o, o, 0, 0], [o, o, 0, 0], [0; 4], [0; 4]]),
        PieceKind::L => (3, [[0, 0, o, 0], [o, o, o, 0], [0; 4], [0; 4]]),
        PieceKind::J => (3, [[o, 0, 0, 0], [o, o, o, 0], [0; 4], [0; 4]]),
        PieceKind::S => (3, [[0, o, o, 0], [o, o, 0, 0], [0; 4], [0; 4]]),
        PieceKind::Z => (3, [[o, o, 0, 0], [0, o, o, 0], [0; 4], [0; 4]]),
        PieceKind::T => (3, [[0, o, 0, 0], [o, o, o, 0], [0; 4], [0; 4]]),
        PieceKind::I => (4, [[0; 4], [o, o, o, o], [0; 4], [0; 4]]),
    }
}

/// Position correction applied while rotating out of `rotation`.
///
/// Keyed by the rotation index the piece held before the turn. The I piece
/// has its own entries; L, J, S, Z and T share one set; O never moves.
fn rotation_nudge(kind: PieceKind, rotation: u8, x: i8, y: i8) -> (i8, i8) {
    match kind {
        PieceKind::O => (0, 0),
        PieceKind::I => match rotation {
            2 if x >= 7 => (-1, 0),
            2 if x <= -1 => (2, 0),
            4 if x >= 7 => (-2, 0),
            4 if x <= -1 => (1, 0),
            1 if y == 17 => (0, -1),
            1 if y >= 18 => (0, -2),
            3 if y >= 17 => (0, -1),
            _ => (0, 0),
        },
        PieceKind::L | PieceKind::J | PieceKind::S | PieceKind::Z | PieceKind::T => {
            match rotation {
                4 if x >= 8 => (-1, 0),
                2 if x <= -1 => (1, 0),
                1 if y >= 18 => (0, -1),
                _ => (0, 0),
            }
        }
    }
}

/// One tetromino instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    /// 1..=4, wrapping
    rotation: u8,
    size: usize,
    matrix: Matrix,
    /// Board column of the matrix's left edge (may be negative)
    pub x: i8,
    /// Board row of the matrix's top edge
    pub y: i8,
}

impl Piece {
    /// Create a piece at the spawn position in its first rotation
    pub fn new(kind: PieceKind) -> Self {
        let (size, matrix) = spawn_matrix(kind);
        Self {
            kind,
            rotation: 1,
            size,
            matrix,
            x: SPAWN_POSITION.0,
            y: SPAWN_POSITION.1,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn rotation(&self) -> u8 {
        self.rotation
    }

    /// Side length of the square footprint
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    pub fn position(&self) -> (i8, i8) {
        (self.x, self.y)
    }

    pub fn set_position(&mut self, (x, y): (i8, i8)) {
        self.x = x;
        self.y = y;
    }

    /// Occupied cells as (board x, board y, value)
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8, Cell)> + '_ {
        let n = self.size;
        (0..n)
            .flat_map(move |dy| (0..n).map(move |dx| (dx, dy)))
            .filter_map(move |(dx, dy)| {
                let value = self.matrix[dy][dx];
                (value != EMPTY).then_some((self.x + dx as i8, self.y + dy as i8, value))
            })
    }

    /// Every occupied cell lies on the board
    pub fn bounds_check(&self) -> bool {
        self.cells().all(|(x, y, _)| Board::contains(x, y))
    }

    /// Would a one-cell step in `direction` leave the board or hit a settled cell
    pub fn obstructed(&self, direction: Direction, board: &Board) -> bool {
        let (dx, dy) = direction.delta();
        self.cells().any(|(x, y, _)| {
            let (nx, ny) = (x + dx, y + dy);
            board.is_out_of_bounds(nx, ny) || board.is_occupied(nx, ny)
        })
    }

    pub fn obstructed_down(&self, board: &Board) -> bool {
        self.obstructed(Direction::Down, board)
    }

    pub fn obstructed_right(&self, board: &Board) -> bool {
        self.obstructed(Direction::Right, board)
    }

    pub fn obstructed_left(&self, board: &Board) -> bool {
        self.obstructed(Direction::Left, board)
    }

    /// Step one cell unless obstructed. Blocked moves are ignored.
    /// Returns whether the piece moved.
    pub fn move_by(&mut self, direction: Direction, board: &Board) -> bool {
        if self.obstructed(direction, board) {
            return false;
        }
        let (dx, dy) = direction.delta();
        self.x += dx;
        self.y += dy;
        true
    }

    /// Turn the footprint 90° clockwise, nudge the position and advance the
    /// rotation index.
    ///
    /// Unchecked: callers keep a copy and restore it when
    /// [`check_rotation_valid`](Self::check_rotation_valid) fails.
    pub fn rotate(&mut self) {
        let n = self.size;
        let m = &mut self.matrix;
        for i in 0..n / 2 {
            for j in i..n - i - 1 {
                let tmp = m[i][j];
                m[i][j] = m[n - 1 - j][i];
                m[n - 1 - j][i] = m[n - 1 - i][n - 1 - j];
                m[n - 1 - i][n - 1 - j] = m[j][n - 1 - i];
                m[j][n - 1 - i] = tmp;
            }
        }

        let (dx, dy) = rotation_nudge(self.kind, self.rotation, self.x, self.y);
        self.x += dx;
        self.y += dy;

        self.rotation = if self.rotation >= 4 {
            1
        } else {
            self.rotation + 1
        };
    }

    /// Post-rotation check: no cell below the floor and no cell on a settled
    /// value greater than 1.
    ///
    /// Cells holding shape id 1 (O) do not block a rotation, and cells left,
    /// right or above the grid are not inspected.
    pub fn check_rotation_valid(&self, board: &Board) -> bool {
        self.cells().all(|(x, y, _)| {
            if y >= board.height() as i8 {
                return false;
            }
            !matches!(board.get(x, y), Some(v) if v > 1)
        })
    }

    /// Copy the footprint into the board
    pub fn land(&self, board: &mut Board) {
        for (x, y, value) in self.cells() {
            board.set(x, y, value);
        }
    }
}
