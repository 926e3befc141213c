//! Connector-matching tilings of 1-D and 2-D grids via wave function
//! collapse.
//!
//! The engine repeatedly collapses the most-constrained cell to a single
//! tile and propagates the adjacency constraint breadth-first until every
//! cell is consistent with its neighbours, or a cell runs out of candidates.

use thiserror::Error;

pub mod catalog;
pub mod cell;
pub mod connector;
pub mod grid;
pub mod tile;
pub mod wave;

#[cfg(feature = "cli")]
pub mod app;
#[cfg(feature = "cli")]
pub mod cli;

pub use cell::{Cell, Propagation};
pub use connector::{Connector, ConnectorSet};
pub use grid::{Axis, Direction, Grid};
pub use tile::Tile;
pub use wave::WaveFunction;

/// A cell's possibility set became empty: the current partial assignment is
/// unsatisfiable.
///
/// The engine performs no backtracking; this unwinds the whole in-flight
/// propagation batch to whoever chose the triggering tile or boundary
/// constraint. Cells constrained earlier in the batch keep their narrowed
/// state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("cell {cell} has no remaining state options")]
pub struct ContradictionError {
    /// Label of the cell that ran out of candidates.
    pub cell: String,
}
