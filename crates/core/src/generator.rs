//! Generator module - fair random piece sequence with a lookahead queue
//!
//! Shapes are drawn uniformly from the seven kinds, with one fairness rule: a new
//! piece never repeats the shape currently at the back of the queue. The queue is
//! kept at [`QUEUE_LEN`] upcoming pieces for the preview panel.
//!
//! Seeded generators ([`PieceGenerator::from_seed`]) produce the same sequence for
//! the same seed, which the tests rely on.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::piece::Piece;
use crate::types::{PieceKind, QUEUE_LEN};

/// Draw a fresh piece, redrawing while it matches `last`
pub fn random_piece<R: Rng + ?Sized>(rng: &mut R, last: Option<PieceKind>) -> Piece {
    loop {
        let kind = PieceKind::ALL[rng.random_range(0..PieceKind::ALL.len())];
        if Some(kind) != last {
            return Piece::new(kind);
        }
    }
}

/// Random piece source plus the queue of upcoming pieces
#[derive(Debug, Clone)]
pub struct PieceGenerator<R = StdRng> {
    rng: R,
    queue: VecDeque<Piece>,
}

impl PieceGenerator<StdRng> {
    /// Deterministic generator for the given seed
    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Generator seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }
}

impl<R: Rng> PieceGenerator<R> {
    /// Wrap an RNG. The queue starts empty; call [`fill_queue`](Self::fill_queue).
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            queue: VecDeque::with_capacity(QUEUE_LEN + 1),
        }
    }

    /// Draw a piece that differs from the current back of the queue
    pub fn random_piece(&mut self) -> Piece {
        let last = self.queue.back().map(Piece::kind);
        random_piece(&mut self.rng, last)
    }

    /// Top the queue up to at least [`QUEUE_LEN`] pieces
    pub fn fill_queue(&mut self) {
        while self.queue.len() < QUEUE_LEN {
            let piece = self.random_piece();
            self.queue.push_back(piece);
        }
    }

    /// Push one fresh piece at the back, then pop and return the front.
    ///
    /// The queue length is the same before and after the call.
    pub fn next_piece(&mut self) -> Piece {
        let piece = self.random_piece();
        self.queue.push_back(piece);
        // Just pushed, so the queue is non-empty.
        self.queue.pop_front().unwrap_or(piece)
    }

    /// Upcoming pieces, next first
    pub fn queue(&self) -> impl ExactSizeIterator<Item = &Piece> + '_ {
        self.queue.iter()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Next piece without consuming it
    pub fn peek(&self) -> Option<&Piece> {
        self.queue.front()
    }
}
