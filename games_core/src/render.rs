//! Seam towards whatever draws the boards.
//!
//! Controllers never reach for a global canvas. They hold an optional
//! `Box<dyn Renderer<P>>` and hand it a [`Frame`] after every state change;
//! headless callers (tests, bots) simply leave it out.

use crate::logic::grid::Square;
use serde::{Deserialize, Serialize};

/// Copy of a board, row-major (`cells[y * width + x]`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot<P> {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<Option<P>>,
}

impl<P: Copy> Snapshot<P> {
    #[must_use]
    pub fn get(&self, sq: Square) -> Option<P> {
        if sq.x >= self.width || sq.y >= self.height {
            return None;
        }
        self.cells.get(sq.y * self.width + sq.x).copied().flatten()
    }

    pub fn rows(&self) -> std::slice::Chunks<'_, Option<P>> {
        self.cells.chunks(self.width.max(1))
    }
}

/// Everything a renderer needs for one redraw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame<P> {
    pub snapshot: Snapshot<P>,
    /// Squares touched by the last move.
    pub marked: Vec<Square>,
    pub message: String,
}

pub trait Renderer<P> {
    fn draw(&mut self, frame: &Frame<P>);
}
