use std::collections::HashSet;
use std::sync::Arc;

use enum_map::{enum_map, EnumMap};

use crate::connector::{Connector, ConnectorSet};
use crate::grid::Direction;
use crate::tile::Tile;
use crate::ContradictionError;

/// Pending constraint application: `allowed` travels in `direction` and is
/// applied to the cell at index `cell`.
#[derive(Debug, Clone)]
pub struct Propagation {
    pub cell: usize,
    pub direction: Direction,
    pub allowed: HashSet<Connector>,
}

/// One grid position and its remaining candidate tiles.
///
/// The possibility set only ever shrinks; an empty set is a contradiction and
/// aborts the collapse attempt that caused it. Neighbour links are stored as
/// indices into the owning wave function's cell array.
#[derive(Debug, Clone)]
pub struct Cell {
    pub label: String,
    pub state: Vec<Arc<Tile>>,
    neighbours: EnumMap<Direction, Option<usize>>,
}

impl Cell {
    pub(crate) fn new(label: String, state: Vec<Arc<Tile>>) -> Self {
        Self {
            label,
            state,
            neighbours: EnumMap::default(),
        }
    }

    pub fn collapsed(&self) -> bool {
        self.state.len() == 1
    }

    /// The resolved tile, once exactly one candidate remains.
    pub fn tile(&self) -> Option<&Arc<Tile>> {
        match self.state.len() {
            1 => self.state.first(),
            _ => None,
        }
    }

    pub fn neighbour(&self, direction: Direction) -> Option<usize> {
        self.neighbours[direction]
    }

    pub(crate) fn set_neighbour(&mut self, direction: Direction, index: usize) {
        assert!(
            self.neighbours[direction].is_none(),
            "cell {} already linked towards {:?}",
            self.label,
            direction,
        );

        self.neighbours[direction] = Some(index);
    }

    /// The set of connectors a neighbour in `direction` may present, given
    /// the remaining candidates: the union of the compatible sets of every
    /// connector the cell can still show on that side.
    pub fn reachable(&self, direction: Direction, connectors: &ConnectorSet) -> HashSet<Connector> {
        self.state
            .iter()
            .filter_map(|tile| tile.connector(direction))
            .flat_map(|connector| connectors.compatible_with(connector).iter().copied())
            .collect()
    }

    /// Applies a constraint travelling in `direction`, keeping only tiles
    /// whose connector on the facing side is in `allowed`.
    ///
    /// Returns the onward propagations for every other linked direction whose
    /// reachable set shrank. Fails with [`ContradictionError`] when no
    /// candidate survives, leaving the possibility set empty.
    pub fn constrain(
        &mut self,
        direction: Direction,
        allowed: &HashSet<Connector>,
        connectors: &ConnectorSet,
    ) -> Result<Vec<Propagation>, ContradictionError> {
        let facing = direction.flip();
        let before: EnumMap<Direction, Option<HashSet<Connector>>> = enum_map! {
            d => self.neighbours[d].map(|_| self.reachable(d, connectors)),
        };

        self.state.retain(|tile| {
            tile.connector(facing)
                .map_or(false, |connector| allowed.contains(&connector))
        });

        if self.state.is_empty() {
            return Err(ContradictionError {
                cell: self.label.clone(),
            });
        }

        let mut onward = Vec::new();

        for (d, link) in &self.neighbours {
            let Some(target) = *link else { continue };

            // never push the constraint back where it came from
            if d == facing {
                continue;
            }

            let after = self.reachable(d, connectors);

            if before[d].as_ref() != Some(&after) {
                onward.push(Propagation {
                    cell: target,
                    direction: d,
                    allowed: after,
                });
            }
        }

        Ok(onward)
    }

    /// Forces a collapse to `tile` and yields the propagations that seed the
    /// resulting wave towards every linked neighbour.
    pub(crate) fn assign(&mut self, tile: Arc<Tile>, connectors: &ConnectorSet) -> Vec<Propagation> {
        self.state = vec![tile];

        self.neighbours
            .iter()
            .filter_map(|(d, link)| {
                link.map(|target| Propagation {
                    cell: target,
                    direction: d,
                    allowed: self.reachable(d, connectors),
                })
            })
            .collect()
    }
}
