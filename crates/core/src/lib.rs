//! Core game logic - rules, state and piece generation
//!
//! Nothing in here touches the terminal or the clock. The presentation layer feeds
//! [`GameAction`](types::GameAction)s into a [`GameSession`], including the
//! gravity `Tick` it schedules itself, and renders [`GameSnapshot`]s.
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 settled grid, filled-row detection and row removal
//! - [`piece`]: shape matrices, movement, obstruction and the rotation nudges
//! - [`generator`]: random pieces with a no-repeat rule and a three-piece queue
//! - [`scoring`]: line-clear table and the soft-drop bonus counter
//! - [`session`]: the game state machine
//! - [`snapshot`]: read-only per-frame view for rendering
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameSession, Phase};
//! use blockfall_types::GameAction;
//!
//! let mut game = GameSession::with_seed(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! while game.pieces_landed() == 0 {
//!     game.apply_action(GameAction::Tick);
//! }
//!
//! assert_eq!(game.phase(), Phase::Falling);
//! assert_eq!(game.queue().len(), 3);
//! ```

pub mod board;
pub mod generator;
pub mod piece;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use blockfall_types as types;

pub use board::{Board, FilledRows, RowList};
pub use generator::{random_piece, PieceGenerator};
pub use piece::{spawn_matrix, Matrix, Piece};
pub use scoring::{line_clear_score, SoftDropBonus};
pub use session::{GameSession, Phase, SessionEvent};
pub use snapshot::GameSnapshot;
