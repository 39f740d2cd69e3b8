use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum Error {
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    InvalidDimension { rows: usize, cols: usize },
    /// A write or query would land outside the grid.
    #[error("{height}x{width} at ({row}, {col}) does not fit in a {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
        rows: usize,
        cols: usize,
    },
    #[error("density must be within [0, 1], got {0}")]
    InvalidDensity(f64),
    #[error("pattern has no cells")]
    EmptyPattern,
    #[error("pattern row {row} has {found} cells, expected {expected}")]
    RaggedPattern {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unexpected character {ch:?} at ({row}, {col})")]
    UnexpectedChar { ch: char, row: usize, col: usize },
    #[error("unknown pattern {0:?}")]
    UnknownPattern(String),
}

pub type Result<T> = std::result::Result<T, Error>;
