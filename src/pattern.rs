use std::{
    fmt::{Display, Write},
    str::FromStr,
};

use crate::error::{Error, Result};

/// An immutable rectangle of cells that can be stamped onto a grid.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Pattern {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Pattern {
    /// Builds a pattern from rows of 0/1 values, any non-zero value is alive.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        Self::from_bool_rows(
            rows.iter()
                .map(|row| row.as_ref().iter().map(|&v| v != 0).collect::<Vec<_>>()),
        )
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        (row < self.rows && col < self.cols).then(|| self.cells[row * self.cols + col])
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.cols)
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Tables in the pattern library are rectangular and non-empty.
    pub(crate) fn from_table(table: &[&[u8]]) -> Self {
        let cols = table.first().map_or(0, |row| row.len());
        debug_assert!(cols > 0 && table.iter().all(|row| row.len() == cols));
        Self {
            rows: table.len(),
            cols,
            cells: table.iter().flat_map(|row| row.iter().map(|&v| v != 0)).collect(),
        }
    }

    fn from_bool_rows(rows: impl IntoIterator<Item = Vec<bool>>) -> Result<Self> {
        let mut cells = Vec::new();
        let mut cols = None;
        let mut height = 0;
        for (row, line) in rows.into_iter().enumerate() {
            let expected = *cols.get_or_insert(line.len());
            if line.len() != expected {
                return Err(Error::RaggedPattern {
                    row,
                    expected,
                    found: line.len(),
                });
            }
            cells.extend(line);
            height += 1;
        }
        match cols {
            Some(cols) if cols > 0 => Ok(Self {
                rows: height,
                cols,
                cells,
            }),
            _ => Err(Error::EmptyPattern),
        }
    }
}

impl FromStr for Pattern {
    type Err = Error;

    /// One line per row, `o` for alive and `.` for dead. Blank lines and
    /// indentation are ignored.
    fn from_str(s: &str) -> Result<Self> {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(row, line)| {
                line.chars()
                    .enumerate()
                    .map(|(col, ch)| match ch {
                        'o' | 'O' | '#' | '1' => Ok(true),
                        '.' | '0' => Ok(false),
                        _ => Err(Error::UnexpectedChar { ch, row, col }),
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;
        Self::from_bool_rows(rows)
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.iter_rows().enumerate() {
            if i > 0 {
                f.write_char('\n')?;
            }
            for &alive in row {
                f.write_char(if alive { 'o' } else { '.' })?;
            }
        }
        Ok(())
    }
}
