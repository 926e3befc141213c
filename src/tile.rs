use enum_map::EnumMap;

use crate::connector::Connector;
use crate::grid::Direction;

/// Immutable tile definition: an identifier plus one connector per side the
/// grid dimensionality requires.
///
/// Connector maps may be partial; 1-D tiles define left and right only. A
/// direction with no connector can never satisfy a constraint applied to it,
/// but directions without neighbours are never constrained.
#[derive(Debug, Clone)]
pub struct Tile {
    pub id: String,
    connectors: EnumMap<Direction, Option<Connector>>,
}

impl Tile {
    pub fn new(id: &str, connectors: EnumMap<Direction, Option<Connector>>) -> Self {
        Self {
            id: id.to_string(),
            connectors,
        }
    }

    /// A 1-D tile with left and right connectors only.
    pub fn line(id: &str, left: Connector, right: Connector) -> Self {
        let mut connectors = EnumMap::default();

        connectors[Direction::Left] = Some(left);
        connectors[Direction::Right] = Some(right);

        Self::new(id, connectors)
    }

    /// A 2-D tile with a connector on every side.
    pub fn square(
        id: &str,
        left: Connector,
        up: Connector,
        right: Connector,
        down: Connector,
    ) -> Self {
        let mut connectors = EnumMap::default();

        connectors[Direction::Left] = Some(left);
        connectors[Direction::Up] = Some(up);
        connectors[Direction::Right] = Some(right);
        connectors[Direction::Down] = Some(down);

        Self::new(id, connectors)
    }

    pub fn connector(&self, direction: Direction) -> Option<Connector> {
        self.connectors[direction]
    }
}
