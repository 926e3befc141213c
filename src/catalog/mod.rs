//! Concrete tile catalogs consumed by the driver.
//!
//! Each builder returns the connector registry it populated, the connectors
//! in a stable order (drivers pick boundary connectors from it), and the tile
//! set itself. The engine never depends on any of this.

mod blocks;
mod boxes;
mod dominoes;

pub use blocks::ascii_blocks;
pub use boxes::ascii_boxes;
pub use dominoes::sequential_dominoes;

use crate::connector::Connector;
use crate::tile::Tile;

/// A catalog: its connector registry, its connectors in declaration order,
/// and its tiles.
pub type Catalog = (crate::connector::ConnectorSet, Vec<Connector>, Vec<Tile>);

/// Generates one tile per quarter-turn of a connector spec given in
/// left/up/right/down order, named by the matching symbol.
fn spin(spec: [Connector; 4], symbols: &[&str]) -> Vec<Tile> {
    symbols
        .iter()
        .enumerate()
        .map(|(turn, symbol)| {
            let side = |j: usize| spec[(j + 4 - turn) % 4];

            Tile::square(symbol, side(0), side(1), side(2), side(3))
        })
        .collect()
}
