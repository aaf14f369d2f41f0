//! Scoring module - classic row-clear table and the soft-drop bonus
//!
//! Two sources of points:
//! - Row clears, looked up in [`LINE_SCORES`] by the number of rows completed at once.
//! - Soft drop: one point per press of the drop key, banked when the piece lands.

use crate::types::{LINE_SCORES, SOFT_DROP_KEEP_ROW};

/// Points for clearing `lines` rows in one resolution.
/// Counts outside 1..=4 score nothing.
pub fn line_clear_score(lines: usize) -> u32 {
    LINE_SCORES.get(lines).copied().unwrap_or(0)
}

/// Soft-drop press counter for the falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SoftDropBonus {
    presses: u32,
}

impl SoftDropBonus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pending points
    pub fn count(&self) -> u32 {
        self.presses
    }

    /// Drop key went down
    pub fn press(&mut self) {
        self.presses = self.presses.saturating_add(1);
    }

    /// Drop key came up while the piece's top row is `row`.
    ///
    /// The bonus survives if the piece is already near the floor.
    pub fn release(&mut self, row: i8) {
        if row < SOFT_DROP_KEEP_ROW {
            self.presses = 0;
        }
    }

    /// Bank the bonus on landing, resetting the counter
    pub fn take(&mut self) -> u32 {
        std::mem::take(&mut self.presses)
    }
}
