use std::mem;

use log::{debug, trace};
use rand::Rng;
use rayon::prelude::*;

use crate::{
    error::{Error, Result},
    grid::{Grid, Position},
    pattern::Pattern,
};

/// Game of Life on a fixed-size torus.
///
/// Two buffers of the same size are kept: `current` is the generation callers
/// see, `next` is scratch space that `advance` fills from `current` before the
/// two are swapped. No cell of `current` is written while a generation is
/// being computed.
#[derive(Clone, Debug)]
pub struct GridSimulator {
    current: Grid,
    next: Grid,
}

impl GridSimulator {
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let current = Grid::new(rows, cols)?;
        debug!("created {rows}x{cols} simulator");
        Ok(Self::from_grid(current))
    }

    pub fn from_grid(grid: Grid) -> Self {
        let mut next = grid.clone();
        next.clear();
        Self {
            current: grid,
            next,
        }
    }

    pub fn rows(&self) -> usize {
        self.current.rows()
    }

    pub fn cols(&self) -> usize {
        self.current.cols()
    }

    /// The current generation. Clone it to keep it past the next `advance`.
    pub fn snapshot(&self) -> &Grid {
        &self.current
    }

    pub fn population(&self) -> usize {
        self.current.population()
    }

    pub fn clear(&mut self) {
        self.current.clear();
    }

    /// Copies `pattern` onto the grid with its top-left corner at `at`,
    /// overwriting whatever was there. Placements that would run off the
    /// edge are rejected without touching the grid; they do not wrap.
    pub fn set_pattern(&mut self, pattern: &Pattern, at: impl Into<Position>) -> Result<()> {
        let at = at.into();
        let fits = |start: usize, len: usize, limit: usize| {
            start.checked_add(len).is_some_and(|end| end <= limit)
        };
        if !fits(at.row, pattern.rows(), self.rows()) || !fits(at.col, pattern.cols(), self.cols())
        {
            return Err(self
                .current
                .out_of_bounds(at, pattern.rows(), pattern.cols()));
        }
        for (i, src) in pattern.iter_rows().enumerate() {
            let dst = self.current.row_mut(at.row + i);
            dst[at.col..at.col + src.len()].copy_from_slice(src);
        }
        debug!(
            "stamped {}x{} pattern at ({}, {})",
            pattern.rows(),
            pattern.cols(),
            at.row,
            at.col
        );
        Ok(())
    }

    /// Sets every cell alive with probability `density`, independently.
    pub fn randomize<R: Rng + ?Sized>(&mut self, density: f64, rng: &mut R) -> Result<()> {
        if !(0.0..=1.0).contains(&density) {
            return Err(Error::InvalidDensity(density));
        }
        for cell in self.current.cells_mut() {
            *cell = rng.random::<f64>() < density;
        }
        debug!(
            "randomized with density {density}, population {}",
            self.population()
        );
        Ok(())
    }

    /// Live cells among the 8 wrapped neighbours of `(row, col)`.
    pub fn count_live_neighbors(&self, row: usize, col: usize) -> Result<usize> {
        if !self.current.contains(row, col) {
            return Err(self.current.out_of_bounds(Position::new(row, col), 1, 1));
        }
        Ok(self.current.live_neighbours(row, col))
    }

    pub fn advance(&mut self) {
        for row in 0..self.rows() {
            self.current.next_row(row, self.next.row_mut(row));
        }
        self.swap();
    }

    /// Same as `advance`, with rows of the next generation computed across
    /// the rayon thread pool.
    pub fn advance_parallel(&mut self) {
        let cols = self.cols();
        let current = &self.current;
        self.next
            .cells_mut()
            .par_chunks_mut(cols)
            .enumerate()
            .for_each(|(row, out)| current.next_row(row, out));
        self.swap();
    }

    pub fn advance_by(&mut self, generations: usize) {
        for _ in 0..generations {
            self.advance();
        }
    }

    fn swap(&mut self) {
        mem::swap(&mut self.current, &mut self.next);
        trace!("advanced, population {}", self.population());
    }
}
