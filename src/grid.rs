use itertools::Itertools;

use crate::error::{Error, Result};

/// Top-left corner of a placement, 0-based.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// Maps any index onto `0..modulus`, so that `-1` is the last row/column.
pub fn wrap(index: isize, modulus: usize) -> usize {
    index.rem_euclid(modulus as isize) as usize
}

/// Fixed-size rectangle of cells, `true` is alive. Stored row-major.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let len = match rows.checked_mul(cols) {
            Some(len) if len > 0 && len <= isize::MAX as usize => len,
            _ => return Err(Error::InvalidDimension { rows, cols }),
        };
        Ok(Self {
            rows,
            cols,
            cells: vec![false; len],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        self.contains(row, col).then(|| self.cells[self.index(row, col)])
    }

    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> Result<()> {
        if !self.contains(row, col) {
            return Err(self.out_of_bounds(Position::new(row, col), 1, 1));
        }
        let i = self.index(row, col);
        self.cells[i] = alive;
        Ok(())
    }

    pub fn row(&self, row: usize) -> Option<&[bool]> {
        (row < self.rows).then(|| &self.cells[row * self.cols..(row + 1) * self.cols])
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.cols)
    }

    /// Coordinates of every live cell in row-major order.
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.rows)
            .cartesian_product(0..self.cols)
            .filter(|&(row, col)| self.cells[self.index(row, col)])
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Number of live cells among the 8 neighbours of an in-bounds cell,
    /// wrapping across both edges.
    pub fn live_neighbours(&self, row: usize, col: usize) -> usize {
        debug_assert!(self.contains(row, col));
        offsets()
            .map(|(dy, dx)| {
                let r = wrap(row as isize + dy, self.rows);
                let c = wrap(col as isize + dx, self.cols);
                self.cells[self.index(r, c)]
            })
            .filter(|&alive| alive)
            .count()
    }

    /// Writes generation N+1 of `row` into `out`, reading only `self`.
    pub(crate) fn next_row(&self, row: usize, out: &mut [bool]) {
        debug_assert_eq!(out.len(), self.cols);
        for (col, cell) in out.iter_mut().enumerate() {
            let alive = self.cells[self.index(row, col)];
            *cell = next_state(alive, self.live_neighbours(row, col));
        }
    }

    pub(crate) fn row_mut(&mut self, row: usize) -> &mut [bool] {
        &mut self.cells[row * self.cols..(row + 1) * self.cols]
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [bool] {
        &mut self.cells
    }

    pub(crate) fn out_of_bounds(&self, at: Position, height: usize, width: usize) -> Error {
        Error::OutOfBounds {
            row: at.row,
            col: at.col,
            height,
            width,
            rows: self.rows,
            cols: self.cols,
        }
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }
}

/// Conway's B3/S23 rule.
pub fn next_state(alive: bool, neighbours: usize) -> bool {
    matches!((alive, neighbours), (true, 2 | 3) | (false, 3))
}

fn offsets() -> impl Iterator<Item = (isize, isize)> {
    (-1..=1)
        .cartesian_product(-1..=1)
        .filter(|&d| d != (0, 0))
}
