mod error;
mod grid;
pub mod library;
mod pattern;
pub mod render;
mod simulator;

#[cfg(test)]
mod tests;

pub use crate::{
    error::{Error, Result},
    grid::{next_state, wrap, Grid, Position},
    library::Named,
    pattern::Pattern,
    simulator::GridSimulator,
};
