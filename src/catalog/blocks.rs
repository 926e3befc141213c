use crate::connector::ConnectorSet;
use crate::tile::Tile;

use super::{spin, Catalog};

/// 2-D half-block set exhibiting asymmetry.
///
/// The shaded diagonal edges use a paired connector, so a positive edge can
/// only ever meet a negative one. The solid connector comes first in the
/// returned list: constraining boundaries to it gives a solid frame.
///
/// These tiles may not render correctly on Windows terminals.
pub fn ascii_blocks() -> Catalog {
    let mut set = ConnectorSet::new();
    let c0 = set.insert("0");
    let c1 = set.insert("1");
    let (c2p, c2n) = set.insert_pair("2");

    let specs: Vec<([_; 4], Vec<&str>)> = vec![
        ([c0, c0, c0, c0], vec![" "]),
        ([c1, c1, c1, c1], vec!["█"]),
        ([c1, c2p, c0, c2n], vec!["▌", "▀", "▐", "▄"]),
        ([c2n, c2p, c0, c0], vec!["▘", "▝", "▗", "▖"]),
        ([c2p, c2n, c1, c1], vec!["▟", "▙", "▛", "▜"]),
        ([c2n, c2p, c2n, c2p], vec!["▚", "▞"]),
    ];

    let tiles = specs
        .into_iter()
        .flat_map(|(spec, symbols)| spin(spec, &symbols))
        .collect();

    (set, vec![c1, c0, c2p, c2n], tiles)
}
