use enum_map::Enum;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Enum)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The opposing direction; an involution pairing Left↔Right and Up↔Down.
    pub fn flip(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn axis(self) -> Axis {
        match self {
            Direction::Left | Direction::Right => Axis::X,
            Direction::Up | Direction::Down => Axis::Y,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Axis {
    X,
    Y,
}

/// Stateless topology descriptor mapping a linear cell index space onto a
/// 1-D line or 2-D plane, with optional wraparound per axis.
///
/// Grids never validate dimensions; non-positive sizes are a caller error.
#[derive(Debug, Clone)]
pub enum Grid {
    Line {
        size: usize,
        cyclic: bool,
    },
    Plane {
        size_x: usize,
        size_y: usize,
        cyclic_x: bool,
        cyclic_y: bool,
    },
}

impl Grid {
    pub fn line(size: usize, cyclic: bool) -> Self {
        Grid::Line { size, cyclic }
    }

    pub fn plane(size_x: usize, size_y: usize, cyclic_x: bool, cyclic_y: bool) -> Self {
        Grid::Plane {
            size_x,
            size_y,
            cyclic_x,
            cyclic_y,
        }
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        match *self {
            Grid::Line { size, .. } => size,
            Grid::Plane { size_x, size_y, .. } => size_x * size_y,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn width(&self) -> usize {
        match *self {
            Grid::Line { size, .. } => size,
            Grid::Plane { size_x, .. } => size_x,
        }
    }

    pub fn height(&self) -> usize {
        match *self {
            Grid::Line { .. } => 1,
            Grid::Plane { size_y, .. } => size_y,
        }
    }

    pub fn cyclic(&self, axis: Axis) -> bool {
        match (self, axis) {
            (&Grid::Line { cyclic, .. }, Axis::X) => cyclic,
            (&Grid::Line { .. }, Axis::Y) => false,
            (&Grid::Plane { cyclic_x, .. }, Axis::X) => cyclic_x,
            (&Grid::Plane { cyclic_y, .. }, Axis::Y) => cyclic_y,
        }
    }

    /// Human-readable cell id: "n" on a line, "x-y" (1-based) on a plane.
    pub fn cell_label(&self, index: usize) -> String {
        match *self {
            Grid::Line { .. } => format!("{}", index + 1),
            Grid::Plane { size_x, .. } => {
                format!("{}-{}", index % size_x + 1, index / size_x + 1)
            }
        }
    }

    /// Ordered indices of the cells forming the edge facing `direction`.
    ///
    /// A line has no cells facing up or down; those edges are empty.
    pub fn boundary(&self, direction: Direction) -> Vec<usize> {
        match *self {
            Grid::Line { size, .. } => match direction {
                Direction::Left => vec![0],
                Direction::Right => vec![size - 1],
                Direction::Up | Direction::Down => vec![],
            },
            Grid::Plane { size_x, size_y, .. } => {
                let total = size_x * size_y;

                match direction {
                    Direction::Left => (0..total).step_by(size_x).collect(),
                    Direction::Right => (size_x - 1..total).step_by(size_x).collect(),
                    Direction::Up => (0..size_x).collect(),
                    Direction::Down => (size_x * (size_y - 1)..total).collect(),
                }
            }
        }
    }

    /// Index runs to be neighbour-linked consecutively along each axis,
    /// together with the forward link direction and whether the run wraps.
    pub fn runs(&self) -> Vec<(Vec<usize>, Direction, bool)> {
        match *self {
            Grid::Line { size, cyclic } => vec![((0..size).collect(), Direction::Right, cyclic)],
            Grid::Plane {
                size_x,
                size_y,
                cyclic_x,
                cyclic_y,
            } => {
                let total = size_x * size_y;
                let mut runs = Vec::with_capacity(size_x + size_y);

                for y in 0..size_y {
                    let row = (size_x * y..size_x * (y + 1)).collect();
                    runs.push((row, Direction::Right, cyclic_x));
                }

                for x in 0..size_x {
                    let column = (x..total).step_by(size_x).collect();
                    runs.push((column, Direction::Down, cyclic_y));
                }

                runs
            }
        }
    }
}
