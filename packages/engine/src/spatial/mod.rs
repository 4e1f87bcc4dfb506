//! Spatial - the cell grid and its change tracking

pub mod dirty;
pub mod grid;

pub use dirty::DirtySet;
pub use grid::{Grid, StepReport};
