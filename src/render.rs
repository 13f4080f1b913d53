use games_core::logic::board::Piece;
use games_core::logic::gomoku::Stone;
use games_core::logic::grid::Square;
use games_core::render::{Frame, Renderer};
use std::fmt::Write;

pub trait Glyph: Copy {
    fn glyph(self) -> char;
}

impl Glyph for Piece {
    fn glyph(self) -> char {
        self.label()
    }
}

impl Glyph for Stone {
    fn glyph(self) -> char {
        match self {
            Stone::Black => 'X',
            Stone::White => 'O',
        }
    }
}

/// Plain text board on stdout. The last move is bracketed.
#[derive(Debug, Default)]
pub struct TerminalRenderer;

impl<P: Glyph> Renderer<P> for TerminalRenderer {
    fn draw(&mut self, frame: &Frame<P>) {
        let width = frame.snapshot.width;
        let mut out = String::from("   ");
        for x in 0..width {
            let _ = write!(out, "{x:>3}");
        }
        out.push('\n');

        for (y, row) in frame.snapshot.rows().enumerate() {
            let _ = write!(out, "{y:>3}");
            for (x, cell) in row.iter().enumerate() {
                let glyph = cell.map_or('.', |p| p.glyph());
                if frame.marked.contains(&Square::new(x, y)) {
                    let _ = write!(out, " [{glyph}]");
                } else {
                    let _ = write!(out, "  {glyph}");
                }
            }
            out.push('\n');
        }
        out.push_str(&frame.message);

        println!("{out}");
    }
}
