use crate::connector::ConnectorSet;
use crate::tile::Tile;

use super::{spin, Catalog};

/// 2-D ASCII box-drawing set, single and double ruled.
///
/// Three self-compatible connectors: blank, single rule, double rule. The
/// blank connector (first in the returned list) suits open boundaries.
pub fn ascii_boxes() -> Catalog {
    let mut set = ConnectorSet::new();
    let c0 = set.insert("0");
    let c1 = set.insert("1");
    let c2 = set.insert("2");

    let specs: Vec<([_; 4], Vec<&str>)> = vec![
        ([c0, c0, c0, c0], vec![" "]),
        ([c1, c1, c0, c0], vec!["┘", "└", "┌", "┐"]),
        ([c1, c1, c1, c0], vec!["┴", "├", "┬", "┤"]),
        ([c1, c0, c1, c0], vec!["─", "│"]),
        ([c1, c1, c1, c1], vec!["┼"]),
        ([c2, c2, c0, c0], vec!["╝", "╚", "╔", "╗"]),
        ([c2, c2, c2, c0], vec!["╩", "╠", "╦", "╣"]),
        ([c2, c0, c2, c0], vec!["═", "║"]),
        ([c2, c2, c2, c2], vec!["╬"]),
        ([c1, c2, c0, c0], vec!["╜", "╘", "╓", "╕"]),
        ([c1, c2, c1, c0], vec!["╨", "╞", "╥", "╡"]),
        ([c1, c2, c1, c2], vec!["╫"]),
        ([c2, c1, c0, c0], vec!["╛", "╙", "╒", "╖"]),
        ([c2, c1, c2, c0], vec!["╧", "╟", "╤", "╢"]),
        ([c2, c1, c2, c1], vec!["╪"]),
    ];

    let tiles = specs
        .into_iter()
        .flat_map(|(spec, symbols)| spin(spec, &symbols))
        .collect();

    (set, vec![c0, c1, c2], tiles)
}
