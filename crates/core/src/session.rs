//! Session module - one game from the first piece to game over
//!
//! Ties together the board, the falling piece, the generator and the score.
//! Every input or timer event goes through [`GameSession::apply_action`], one at a
//! time. After each action the board is scanned for completed rows; when there are
//! some the session pauses in [`Phase::RowClearing`] so the renderer can animate
//! them, and [`GameSession::complete_row_clear`] finishes the removal.

use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, info};

use crate::board::{Board, RowList};
use crate::generator::PieceGenerator;
use crate::piece::Piece;
use crate::scoring::SoftDropBonus;
use crate::snapshot::GameSnapshot;
use crate::types::{Direction, GameAction, ROW_CLEAR_RESET_POSITION};

/// Session state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// A piece is descending and accepts input
    Falling,
    /// Completed rows are on the board, waiting for [`GameSession::complete_row_clear`]
    RowClearing,
    /// Terminal
    GameOver,
}

/// Signal for the presentation layer, drained with [`GameSession::take_event`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// These rows just became full (bottom-most first) and are about to be removed
    RowsFilled(RowList),
    /// A landed piece reached the top row
    GameOver { score: u32 },
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameSession<R = StdRng> {
    board: Board,
    active: Piece,
    generator: PieceGenerator<R>,
    score: u32,
    soft_drop: SoftDropBonus,
    phase: Phase,
    filled_rows: RowList,
    pieces_landed: u32,
    last_event: Option<SessionEvent>,
}

impl GameSession<StdRng> {
    /// Start a session with an entropy-seeded generator
    pub fn new() -> Self {
        Self::with_generator(PieceGenerator::from_entropy())
    }

    /// Start a session whose piece sequence is fixed by `seed`
    pub fn with_seed(seed: u64) -> Self {
        info!(seed, "starting seeded session");
        Self::with_generator(PieceGenerator::from_seed(seed))
    }
}

impl Default for GameSession<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> GameSession<R> {
    /// Start on an empty board: fill the lookahead queue and take the first piece.
    pub fn with_generator(mut generator: PieceGenerator<R>) -> Self {
        generator.fill_queue();
        let active = generator.next_piece();
        Self::from_parts(Board::new(), active, generator)
    }

    /// Resume from an existing board and falling piece
    pub fn from_parts(board: Board, active: Piece, mut generator: PieceGenerator<R>) -> Self {
        generator.fill_queue();
        Self {
            board,
            active,
            generator,
            score: 0,
            soft_drop: SoftDropBonus::new(),
            phase: Phase::Falling,
            filled_rows: RowList::new(),
            pieces_landed: 0,
            last_event: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    /// Upcoming pieces, next first
    pub fn queue(&self) -> impl ExactSizeIterator<Item = &Piece> + '_ {
        self.generator.queue()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Rows awaiting removal (empty unless `RowClearing`)
    pub fn filled_rows(&self) -> &[usize] {
        &self.filled_rows
    }

    /// Soft-drop points that will be banked when the piece lands
    pub fn soft_drop_bonus(&self) -> u32 {
        self.soft_drop.count()
    }

    pub fn pieces_landed(&self) -> u32 {
        self.pieces_landed
    }

    /// Take and clear the pending row-clear / game-over signal.
    pub fn take_event(&mut self) -> Option<SessionEvent> {
        self.last_event.take()
    }

    /// Apply one input or timer event.
    ///
    /// Returns whether the falling piece moved, rotated or landed. Blocked moves
    /// and rejected rotations return `false` and leave the session untouched.
    /// Every action is ignored outside [`Phase::Falling`].
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if self.phase != Phase::Falling {
            return false;
        }

        let changed = match action {
            GameAction::MoveLeft => self.try_move(Direction::Left),
            GameAction::MoveRight => self.try_move(Direction::Right),
            GameAction::MoveDown => self.try_move(Direction::Down),
            GameAction::SoftDrop => {
                self.soft_drop.press();
                self.try_move(Direction::Down)
            }
            GameAction::SoftDropRelease => {
                self.soft_drop.release(self.active.y);
                false
            }
            GameAction::Rotate => self.try_rotate(),
            GameAction::Tick => self.tick(),
        };

        self.resolve_filled_rows();
        changed
    }

    /// Remove the rows announced by [`SessionEvent::RowsFilled`] and resume play.
    ///
    /// The falling piece is put back at column 4, row 1. Returns `false` when no
    /// row clear is pending.
    pub fn complete_row_clear(&mut self) -> bool {
        if self.phase != Phase::RowClearing {
            return false;
        }

        self.board.remove_rows(&self.filled_rows);
        debug!(rows = ?self.filled_rows, "rows removed");
        self.filled_rows.clear();
        self.active.set_position(ROW_CLEAR_RESET_POSITION);
        self.phase = Phase::Falling;
        true
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);
        out.active = self.active;
        out.queue.clear();
        for piece in self.generator.queue().take(out.queue.capacity()) {
            out.queue.push(*piece);
        }
        out.score = self.score;
        out.phase = self.phase;
        out.filled_rows.clone_from(&self.filled_rows);
        out.pieces_landed = self.pieces_landed;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    fn try_move(&mut self, direction: Direction) -> bool {
        self.active.move_by(direction, &self.board)
    }

    /// Rotate tentatively and keep the result only if it validates
    fn try_rotate(&mut self) -> bool {
        let prior = self.active;
        self.active.rotate();

        // Also reject rotations that leave the grid sideways or upward; those
        // cells are outside what check_rotation_valid inspects.
        if self.active.check_rotation_valid(&self.board) && self.active.bounds_check() {
            return true;
        }

        self.active = prior;
        false
    }

    /// Gravity step: fall one row, or land when blocked
    fn tick(&mut self) -> bool {
        if self.try_move(Direction::Down) {
            return true;
        }
        self.land_active();
        true
    }

    fn land_active(&mut self) {
        self.active.land(&mut self.board);
        self.pieces_landed = self.pieces_landed.wrapping_add(1);

        let bonus = self.soft_drop.take();
        self.score = self.score.saturating_add(bonus);
        debug!(
            kind = self.active.kind().as_str(),
            x = self.active.x,
            y = self.active.y,
            bonus,
            "piece landed"
        );

        if self.board.is_lost() {
            self.phase = Phase::GameOver;
            info!(score = self.score, pieces = self.pieces_landed, "game over");
            self.last_event = Some(SessionEvent::GameOver { score: self.score });
            return;
        }

        self.active = self.generator.next_piece();
    }

    /// Scan for completed rows; score them and pause for the clear animation
    fn resolve_filled_rows(&mut self) {
        if self.phase != Phase::Falling {
            return;
        }

        let filled = self.board.check_filled_rows();
        if filled.is_empty() {
            return;
        }

        self.score = self.score.saturating_add(filled.score);
        debug!(rows = ?filled.rows, points = filled.score, "rows filled");

        self.phase = Phase::RowClearing;
        self.filled_rows.clone_from(&filled.rows);
        self.last_event = Some(SessionEvent::RowsFilled(filled.rows));
    }
}
