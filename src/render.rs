use std::fmt::{Display, Write};

use itertools::Itertools;

use crate::grid::Grid;

/// How the console printer draws a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyphs {
    pub alive: char,
    pub dead: char,
    /// Placed between cells of the same row.
    pub separator: Option<char>,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            alive: '■',
            dead: '·',
            separator: Some(' '),
        }
    }
}

impl Glyphs {
    /// `o` and `.` with no separator, the same text `Pattern` parses.
    pub const PLAIN: Glyphs = Glyphs {
        alive: 'o',
        dead: '.',
        separator: None,
    };

    fn glyph(&self, alive: bool) -> char {
        if alive {
            self.alive
        } else {
            self.dead
        }
    }
}

impl Grid {
    /// One line per row, no trailing newline.
    pub fn render(&self, glyphs: Glyphs) -> String {
        let mut out = String::with_capacity(self.rows() * (self.cols() * 2 + 1));
        for (i, row) in self.iter_rows().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            let cells = row.iter().map(|&alive| glyphs.glyph(alive));
            match glyphs.separator {
                Some(sep) => out.extend(Itertools::intersperse(cells, sep)),
                None => out.extend(cells),
            }
        }
        out
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render(Glyphs::default()))?;
        f.write_char('\n')
    }
}
