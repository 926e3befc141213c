use crate::connector::ConnectorSet;
use crate::tile::Tile;

use super::Catalog;

/// 1-D domino set stepping through `num_conn` numbered connectors.
///
/// Every connector i gets a flat tile "i-i"; consecutive connectors get a
/// step tile "i-(i+1)", and a cyclic set closes the loop with a wrap tile
/// back to 1. Boundary treatment: the first connector suits the left edge,
/// the last the right edge.
pub fn sequential_dominoes(num_conn: usize, cyclic: bool) -> Catalog {
    let mut set = ConnectorSet::new();
    let connectors: Vec<_> = (1..=num_conn)
        .map(|i| set.insert(&i.to_string()))
        .collect();

    let mut tiles = Vec::new();

    for i in 1..=num_conn {
        let connector = connectors[i - 1];

        tiles.push(Tile::line(&format!("{}-{}", i, i), connector, connector));

        if i < num_conn || (cyclic && i > 1) {
            let wrapped = i % num_conn + 1;

            tiles.push(Tile::line(
                &format!("{}-{}", i, wrapped),
                connector,
                connectors[wrapped - 1],
            ));
        }
    }

    (set, connectors, tiles)
}
