use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

use tileweave::catalog::{ascii_blocks, sequential_dominoes};
use tileweave::connector::ConnectorSet;
use tileweave::grid::{Axis, Direction, Grid};
use tileweave::wave::WaveFunction;
use tileweave::ContradictionError;

// Fixed seed for deterministic tests
const TEST_SEED: u64 = 42;

fn domino_wave(num_conn: usize, size: usize, cyclic: bool) -> WaveFunction {
    let (set, _, tiles) = sequential_dominoes(num_conn, cyclic);

    WaveFunction::new(Grid::line(size, cyclic), set, tiles)
}

fn state_ids(wave: &WaveFunction) -> Vec<Vec<String>> {
    wave.cells
        .iter()
        .map(|cell| cell.state.iter().map(|tile| tile.id.clone()).collect())
        .collect()
}

fn collapse_fully(
    wave: &mut WaveFunction,
    rng: &mut XorShiftRng,
) -> Result<(), ContradictionError> {
    while !wave.collapsed() {
        let index = wave.most_constrained_cell(rng).unwrap();
        let tile = wave.cells[index].state.choose(rng).unwrap().clone();

        wave.assign(index, tile)?;
    }

    Ok(())
}

#[test]
fn test_simple_connector_self_compatible_only() {
    let mut set = ConnectorSet::new();
    let a = set.insert("a");
    let b = set.insert("a");

    assert!(set.compatible(a, a));
    assert!(set.compatible(b, b));

    // same label, distinct tokens
    assert!(!set.compatible(a, b));
    assert!(!set.compatible(b, a));
}

#[test]
fn test_paired_connectors_symmetry() {
    let mut set = ConnectorSet::new();
    let (positive, negative) = set.insert_pair("2");

    assert!(set.compatible(positive, negative));
    assert!(set.compatible(negative, positive));
    assert!(!set.compatible(positive, positive));
    assert!(!set.compatible(negative, negative));
}

#[test]
fn test_stub_connector_one_sidedness() {
    let mut set = ConnectorSet::new();
    let main = set.insert("track");
    let stub = set.insert_stub(main);

    assert!(set.compatible(main, stub));
    assert!(set.compatible(stub, main));
    assert!(!set.compatible(stub, stub));

    // the main connector keeps connecting to itself
    assert!(set.compatible(main, main));
}

#[test]
fn test_cell_labels() {
    let line = Grid::line(4, false);
    assert_eq!(line.cell_label(0), "1");
    assert_eq!(line.cell_label(3), "4");

    let plane = Grid::plane(3, 2, false, false);
    assert_eq!(plane.cell_label(0), "1-1");
    assert_eq!(plane.cell_label(2), "3-1");
    assert_eq!(plane.cell_label(3), "1-2");
    assert_eq!(plane.cell_label(5), "3-2");
}

#[test]
fn test_boundary_slices() {
    let line = Grid::line(5, false);
    assert_eq!(line.boundary(Direction::Left), vec![0]);
    assert_eq!(line.boundary(Direction::Right), vec![4]);
    assert!(line.boundary(Direction::Up).is_empty());

    let plane = Grid::plane(3, 2, false, false);
    assert_eq!(plane.boundary(Direction::Left), vec![0, 3]);
    assert_eq!(plane.boundary(Direction::Right), vec![2, 5]);
    assert_eq!(plane.boundary(Direction::Up), vec![0, 1, 2]);
    assert_eq!(plane.boundary(Direction::Down), vec![3, 4, 5]);
}

#[test]
fn test_grid_runs_cover_both_axes() {
    let plane = Grid::plane(3, 2, true, false);
    let runs = plane.runs();

    assert_eq!(runs.len(), 5);

    let rows: Vec<_> = runs
        .iter()
        .filter(|(_, d, _)| *d == Direction::Right)
        .collect();
    let columns: Vec<_> = runs
        .iter()
        .filter(|(_, d, _)| *d == Direction::Down)
        .collect();

    assert_eq!(rows.len(), 2);
    assert_eq!(columns.len(), 3);
    assert_eq!(rows[0].0, vec![0, 1, 2]);
    assert_eq!(columns[0].0, vec![0, 3]);

    // cyclic flag follows the axis
    assert!(rows.iter().all(|(_, _, cyclic)| *cyclic));
    assert!(columns.iter().all(|(_, _, cyclic)| !*cyclic));
    assert!(plane.cyclic(Axis::X));
    assert!(!plane.cyclic(Axis::Y));
}

#[test]
fn test_cyclic_wiring() {
    let wave = domino_wave(3, 5, true);

    assert_eq!(wave.cells[4].neighbour(Direction::Right), Some(0));
    assert_eq!(wave.cells[0].neighbour(Direction::Left), Some(4));
    assert_eq!(wave.cells[2].neighbour(Direction::Right), Some(3));
    assert_eq!(wave.cells[2].neighbour(Direction::Left), Some(1));
}

#[test]
fn test_size_one_cyclic_axis_has_no_self_link() {
    let wave = domino_wave(3, 1, true);

    assert_eq!(wave.cells[0].neighbour(Direction::Left), None);
    assert_eq!(wave.cells[0].neighbour(Direction::Right), None);
}

#[test]
fn test_plane_wiring_symmetry() {
    let (set, _, tiles) = ascii_blocks();
    let wave = WaveFunction::new(Grid::plane(2, 2, false, false), set, tiles);

    assert_eq!(wave.cells[0].neighbour(Direction::Right), Some(1));
    assert_eq!(wave.cells[1].neighbour(Direction::Left), Some(0));
    assert_eq!(wave.cells[0].neighbour(Direction::Down), Some(2));
    assert_eq!(wave.cells[2].neighbour(Direction::Up), Some(0));
    assert_eq!(wave.cells[0].neighbour(Direction::Left), None);
    assert_eq!(wave.cells[3].neighbour(Direction::Down), None);
}

#[test]
fn test_monotonicity_under_constraints() {
    let (set, connectors, tiles) = sequential_dominoes(4, false);
    let mut wave = WaveFunction::new(Grid::line(6, false), set, tiles);

    let before: Vec<usize> = wave.cells.iter().map(|cell| cell.state.len()).collect();

    wave.apply_boundary_constraint(Direction::Right, &HashSet::from([connectors[0]]))
        .unwrap();

    let middle: Vec<usize> = wave.cells.iter().map(|cell| cell.state.len()).collect();

    wave.apply_boundary_constraint(Direction::Left, &HashSet::from([connectors[3]]))
        .unwrap();

    let after: Vec<usize> = wave.cells.iter().map(|cell| cell.state.len()).collect();

    for i in 0..wave.cells.len() {
        assert!(middle[i] <= before[i]);
        assert!(after[i] <= middle[i]);
        assert!(after[i] >= 1);
    }
}

#[test]
fn test_confluence_of_constraint_order() {
    let (set, connectors, tiles) = sequential_dominoes(3, false);
    let mut forward = WaveFunction::new(Grid::line(4, false), set.clone(), tiles.clone());
    let mut backward = WaveFunction::new(Grid::line(4, false), set, tiles);

    let left = HashSet::from([connectors[0]]);
    let right = HashSet::from([connectors[2]]);

    forward.apply_boundary_constraint(Direction::Right, &left).unwrap();
    forward.apply_boundary_constraint(Direction::Left, &right).unwrap();

    backward.apply_boundary_constraint(Direction::Left, &right).unwrap();
    backward.apply_boundary_constraint(Direction::Right, &left).unwrap();

    assert_eq!(state_ids(&forward), state_ids(&backward));
}

#[test]
fn test_contradiction_detection() {
    let (set, connectors, tiles) = sequential_dominoes(2, false);
    let mut wave = WaveFunction::new(Grid::line(1, false), set, tiles);

    // pin the only cell to the 1-1 tile
    let tile = wave.cells[0].state[0].clone();
    assert_eq!(tile.id, "1-1");
    wave.assign(0, tile).unwrap();

    // demanding connector 2 on its left side leaves nothing
    let result = wave.apply_boundary_constraint(Direction::Right, &HashSet::from([connectors[1]]));

    assert_eq!(
        result,
        Err(ContradictionError {
            cell: "1".to_string()
        })
    );
    assert!(wave.cells[0].state.is_empty());
}

#[test]
fn test_full_collapse_matches_adjacent_connectors() {
    let (set, connectors, tiles) = sequential_dominoes(3, false);
    let mut wave = WaveFunction::new(Grid::line(4, false), set, tiles);
    let mut rng = XorShiftRng::seed_from_u64(TEST_SEED);

    wave.apply_boundary_constraint(Direction::Right, &HashSet::from([connectors[0]]))
        .unwrap();
    wave.apply_boundary_constraint(Direction::Left, &HashSet::from([connectors[2]]))
        .unwrap();

    collapse_fully(&mut wave, &mut rng).unwrap();

    assert!(wave.collapsed());

    for i in 0..3 {
        let outward = wave.cells[i].tile().unwrap().connector(Direction::Right).unwrap();
        let inward = wave.cells[i + 1].tile().unwrap().connector(Direction::Left).unwrap();

        assert!(wave.connectors().compatible(outward, inward));
    }

    // the boundary constraints hold on the collapsed result
    let first = wave.cells[0].tile().unwrap().connector(Direction::Left).unwrap();
    let last = wave.cells[3].tile().unwrap().connector(Direction::Right).unwrap();
    assert_eq!(first, connectors[0]);
    assert_eq!(last, connectors[2]);
}

#[test]
fn test_repropagation_on_collapsed_state_is_a_no_op() {
    let (set, connectors, tiles) = sequential_dominoes(3, false);
    let mut wave = WaveFunction::new(Grid::line(4, false), set, tiles);
    let mut rng = XorShiftRng::seed_from_u64(TEST_SEED);

    wave.apply_boundary_constraint(Direction::Right, &HashSet::from([connectors[0]]))
        .unwrap();
    wave.apply_boundary_constraint(Direction::Left, &HashSet::from([connectors[2]]))
        .unwrap();
    collapse_fully(&mut wave, &mut rng).unwrap();

    let settled = state_ids(&wave);

    wave.apply_boundary_constraint(Direction::Right, &HashSet::from([connectors[0]]))
        .unwrap();
    wave.apply_boundary_constraint(Direction::Left, &HashSet::from([connectors[2]]))
        .unwrap();

    assert_eq!(state_ids(&wave), settled);
}

#[test]
fn test_most_constrained_cell_picks_smallest_open_set() {
    let mut wave = domino_wave(3, 3, false);
    let mut rng = XorShiftRng::seed_from_u64(TEST_SEED);

    // sizes 3 and 2 remain open; the single-candidate cell counts as
    // collapsed and is never offered for selection again
    wave.cells[0].state.truncate(3);
    wave.cells[1].state.truncate(1);
    wave.cells[2].state.truncate(2);

    for _ in 0..20 {
        assert_eq!(wave.most_constrained_cell(&mut rng), Some(2));
    }
}

#[test]
fn test_most_constrained_cell_exhausted() {
    let mut wave = domino_wave(3, 2, false);
    let mut rng = XorShiftRng::seed_from_u64(TEST_SEED);

    for cell in &mut wave.cells {
        cell.state.truncate(1);
    }

    assert!(wave.collapsed());
    assert_eq!(wave.most_constrained_cell(&mut rng), None);
}

#[test]
fn test_most_constrained_tie_break_is_seeded() {
    let wave = domino_wave(3, 6, false);

    let mut first = XorShiftRng::seed_from_u64(TEST_SEED);
    let mut second = XorShiftRng::seed_from_u64(TEST_SEED);

    for _ in 0..10 {
        assert_eq!(
            wave.most_constrained_cell(&mut first),
            wave.most_constrained_cell(&mut second)
        );
    }
}

#[test]
fn test_assign_propagates_through_paired_connectors() {
    let (set, _, tiles) = ascii_blocks();
    let mut wave = WaveFunction::new(Grid::plane(2, 1, false, false), set, tiles);

    // pin the left cell to the left-half block
    let tile = wave.cells[0]
        .state
        .iter()
        .find(|tile| tile.id == "▌")
        .cloned()
        .unwrap();

    wave.assign(0, tile.clone()).unwrap();

    let outward = tile.connector(Direction::Right).unwrap();

    assert!(wave.cells[1].state.len() < 16);
    assert!(!wave.cells[1].state.is_empty());

    for candidate in &wave.cells[1].state {
        let inward = candidate.connector(Direction::Left).unwrap();

        assert!(wave.connectors().compatible(outward, inward));
    }
}

#[test]
fn test_cyclic_domino_loop_collapses_consistently() {
    // a loop is not a tree, so a run may dead-end; retry over seeds and
    // check the first run that completes
    let wave = (0..50)
        .find_map(|seed| {
            let mut wave = domino_wave(3, 6, true);
            let mut rng = XorShiftRng::seed_from_u64(seed);

            collapse_fully(&mut wave, &mut rng).ok().map(|_| wave)
        })
        .expect("no seed produced a full collapse");

    for i in 0..6 {
        let outward = wave.cells[i].tile().unwrap().connector(Direction::Right).unwrap();
        let next = wave.cells[i].neighbour(Direction::Right).unwrap();
        let inward = wave.cells[next].tile().unwrap().connector(Direction::Left).unwrap();

        assert!(wave.connectors().compatible(outward, inward));
    }
}
