//! Terminal rendering for the game.
//!
//! Snapshots are drawn into a plain framebuffer ([`fb`]) by [`GameView`] and
//! flushed by [`TerminalRenderer`], which only rewrites what changed since the
//! previous frame. Board cells are two columns wide.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{shape_color, BoardFrame, FlashFrame, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
