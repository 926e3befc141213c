use std::collections::{HashSet, VecDeque};
use std::sync::Arc;

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::cell::{Cell, Propagation};
use crate::connector::{Connector, ConnectorSet};
use crate::grid::{Direction, Grid};
use crate::tile::Tile;
use crate::ContradictionError;

/// The aggregate state of one collapse run: every cell of a grid plus the
/// topology and connector registry they were built from.
pub struct WaveFunction {
    pub grid: Grid,
    pub cells: Vec<Cell>,
    connectors: ConnectorSet,
}

impl WaveFunction {
    /// Builds one cell per grid position, all starting with the full tile
    /// catalog, and wires neighbour links along every axis run.
    pub fn new(grid: Grid, connectors: ConnectorSet, tiles: Vec<Tile>) -> Self {
        let catalog: Vec<Arc<Tile>> = tiles.into_iter().map(Arc::new).collect();
        let mut cells: Vec<Cell> = (0..grid.len())
            .map(|index| Cell::new(grid.cell_label(index), catalog.clone()))
            .collect();

        for (run, direction, cyclic) in grid.runs() {
            for pair in run.windows(2) {
                link(&mut cells, pair[0], pair[1], direction);
            }

            // a cyclic axis of size 1 must not link a cell to itself
            if cyclic && run.len() > 1 {
                link(&mut cells, run[run.len() - 1], run[0], direction);
            }
        }

        debug!(
            "built wave function: {} cells, {} tiles, {} connectors",
            cells.len(),
            catalog.len(),
            connectors.len(),
        );

        Self {
            grid,
            cells,
            connectors,
        }
    }

    pub fn connectors(&self) -> &ConnectorSet {
        &self.connectors
    }

    /// True iff every cell has collapsed to a single tile.
    pub fn collapsed(&self) -> bool {
        self.cells.iter().all(Cell::collapsed)
    }

    /// Picks uniformly at random among the non-collapsed cells with the
    /// smallest possibility set, or `None` once everything has collapsed.
    pub fn most_constrained_cell(&self, rng: &mut impl Rng) -> Option<usize> {
        let smallest = self
            .cells
            .iter()
            .filter(|cell| !cell.collapsed())
            .map(|cell| cell.state.len())
            .min()?;

        let candidates: Vec<usize> = self
            .cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| !cell.collapsed() && cell.state.len() == smallest)
            .map(|(index, _)| index)
            .collect();

        candidates.choose(rng).copied()
    }

    /// Collapses the cell at `index` to `tile` and propagates the resulting
    /// constraints until the wave function is consistent again.
    pub fn assign(&mut self, index: usize, tile: Arc<Tile>) -> Result<(), ContradictionError> {
        debug!("assigning tile {} to cell {}", tile.id, self.cells[index].label);

        let seeds = self.cells[index].assign(tile, &self.connectors);

        self.propagate(seeds.into())
    }

    /// Constrains every cell on the boundary edge the constraint acts
    /// against, then propagates.
    ///
    /// `direction` is the direction the constraint acts in, not the compass
    /// direction of the edge: constraining what may face outward past the
    /// right edge means applying `allowed` leftward to the right-edge cells.
    pub fn apply_boundary_constraint(
        &mut self,
        direction: Direction,
        allowed: &HashSet<Connector>,
    ) -> Result<(), ContradictionError> {
        let seeds = self
            .grid
            .boundary(direction.flip())
            .into_iter()
            .map(|index| Propagation {
                cell: index,
                direction,
                allowed: allowed.clone(),
            })
            .collect();

        self.propagate(seeds)
    }

    /// Drains the obligation queue breadth-first until no reachable set
    /// changes any further, or aborts on the first contradiction.
    ///
    /// An abort leaves earlier obligations of the same batch applied; the
    /// run is failed and the caller decides what to do with the wreckage.
    fn propagate(&mut self, mut queue: VecDeque<Propagation>) -> Result<(), ContradictionError> {
        let mut applied = 0usize;

        while let Some(propagation) = queue.pop_front() {
            let onward = self.cells[propagation.cell].constrain(
                propagation.direction,
                &propagation.allowed,
                &self.connectors,
            )?;

            applied += 1;
            queue.extend(onward);
        }

        debug!("propagation settled after {} constraints", applied);

        Ok(())
    }
}

/// Links `from` towards `to` in `direction` and back in the flipped
/// direction. Double-linking a direction is a construction bug.
fn link(cells: &mut [Cell], from: usize, to: usize, direction: Direction) {
    cells[from].set_neighbour(direction, to);
    cells[to].set_neighbour(direction.flip(), from);
}
