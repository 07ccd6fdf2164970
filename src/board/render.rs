//! Text rendering of positions.

use std::fmt::{self, Write};

use super::{Cell, Position, Square, SquareSet};

/// How pieces are drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RenderStyle {
    /// Diagram letters, uppercase White (`K`, `q`, ...)
    #[default]
    Ascii,
    /// Chess glyphs (`♔`, `♛`, ...)
    Unicode,
}

impl RenderStyle {
    fn cell(self, cell: Cell) -> char {
        match (cell, self) {
            (Cell::Empty, _) => '.',
            (Cell::Piece(p), RenderStyle::Ascii) => p.to_char(),
            (Cell::Piece(p), RenderStyle::Unicode) => p.symbol(),
        }
    }
}

impl Position {
    /// Draw the board with row 0 at the top.
    #[must_use]
    pub fn render(&self, style: RenderStyle) -> String {
        self.render_marked(style, SquareSet::EMPTY)
    }

    /// Draw the board with the legal destinations of `selected` marked:
    /// `*` on an empty target, brackets around a capture.
    #[must_use]
    pub fn render_highlighted(&self, selected: Square, style: RenderStyle) -> String {
        self.render_marked(style, self.legal_moves(selected))
    }

    fn render_marked(&self, style: RenderStyle, marks: SquareSet) -> String {
        let mut out = String::new();
        for row in 0..8 {
            let _ = write!(out, "{} ", 8 - row);
            for col in 0..8 {
                let sq = Square(row, col);
                let cell = self.board.get(sq);
                let glyph = style.cell(cell);
                if !marks.contains(sq) {
                    let _ = write!(out, " {glyph} ");
                } else if cell.is_empty() {
                    out.push_str(" * ");
                } else {
                    let _ = write!(out, "[{glyph}]");
                }
            }
            out.push('\n');
        }
        out.push_str("   a  b  c  d  e  f  g  h\n");
        out
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(RenderStyle::Ascii))?;
        write!(f, "{} to move", self.side_to_move)
    }
}
