use std::collections::HashSet;
use std::error::Error;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};
use rand_xorshift::XorShiftRng;

use crate::catalog::{ascii_blocks, ascii_boxes, sequential_dominoes};
use crate::cli::{Command, Opt};
use crate::grid::{Direction, Grid};
use crate::wave::WaveFunction;

pub struct App {
    opt: Opt,
}

impl App {
    pub fn new(opt: Opt) -> Self {
        Self { opt }
    }

    pub fn run(&self) -> Result<(), Box<dyn Error>> {
        let seed = self
            .opt
            .seed
            .unwrap_or_else(|| rand::thread_rng().next_u64());

        info!("using seed {}", seed);

        let mut rng = XorShiftRng::seed_from_u64(seed);
        let mut wave = self.build_wave()?;

        let progress = ProgressBar::new(wave.cells.len() as u64);
        progress.enable_steady_tick(Duration::from_millis(200));
        progress.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos:>5}/{len}")?
                .progress_chars("#>-"),
        );

        while !wave.collapsed() {
            let Some(index) = wave.most_constrained_cell(&mut rng) else {
                break;
            };

            let Some(tile) = wave.cells[index].state.choose(&mut rng).cloned() else {
                break;
            };

            debug!("selected [{}] in cell {}", tile.id, wave.cells[index].label);

            wave.assign(index, tile)?;

            let collapsed = wave.cells.iter().filter(|cell| cell.collapsed()).count();
            progress.set_position(collapsed as u64);
        }

        progress.finish_and_clear();
        render(&wave);
        info!("generation completed");

        Ok(())
    }

    fn build_wave(&self) -> Result<WaveFunction, Box<dyn Error>> {
        let wave = match self.opt.command {
            Command::Dominoes {
                size,
                connectors: num_conn,
                cyclic,
            } => {
                let (set, connectors, tiles) = sequential_dominoes(num_conn, cyclic);
                let mut wave = WaveFunction::new(Grid::line(size, cyclic), set, tiles);

                if !cyclic {
                    wave.apply_boundary_constraint(
                        Direction::Right,
                        &HashSet::from([connectors[0]]),
                    )?;
                    wave.apply_boundary_constraint(
                        Direction::Left,
                        &HashSet::from([connectors[num_conn - 1]]),
                    )?;
                }

                wave
            }
            Command::Boxes {
                width,
                height,
                cyclic_x,
                cyclic_y,
            } => {
                let (set, connectors, tiles) = ascii_boxes();

                plane_wave(width, height, cyclic_x, cyclic_y, set, connectors[0], tiles)?
            }
            Command::Blocks {
                width,
                height,
                cyclic_x,
                cyclic_y,
            } => {
                let (set, connectors, tiles) = ascii_blocks();

                plane_wave(width, height, cyclic_x, cyclic_y, set, connectors[0], tiles)?
            }
        };

        info!(
            "{} cells, {} candidate tiles each",
            wave.cells.len(),
            wave.cells.first().map_or(0, |cell| cell.state.len()),
        );

        Ok(wave)
    }
}

fn plane_wave(
    width: usize,
    height: usize,
    cyclic_x: bool,
    cyclic_y: bool,
    set: crate::connector::ConnectorSet,
    edge: crate::connector::Connector,
    tiles: Vec<crate::tile::Tile>,
) -> Result<WaveFunction, crate::ContradictionError> {
    let mut wave = WaveFunction::new(Grid::plane(width, height, cyclic_x, cyclic_y), set, tiles);
    let boundary = HashSet::from([edge]);

    if !cyclic_y {
        wave.apply_boundary_constraint(Direction::Down, &boundary)?;
        wave.apply_boundary_constraint(Direction::Up, &boundary)?;
    }

    if !cyclic_x {
        wave.apply_boundary_constraint(Direction::Right, &boundary)?;
        wave.apply_boundary_constraint(Direction::Left, &boundary)?;
    }

    Ok(wave)
}

fn render(wave: &WaveFunction) {
    match wave.grid {
        Grid::Line { .. } => {
            let strip: Vec<String> = wave
                .cells
                .iter()
                .map(|cell| match cell.tile() {
                    Some(tile) => format!("[{}]", tile.id),
                    None => "[?]".to_string(),
                })
                .collect();

            println!("{}", strip.join(" "));
        }
        Grid::Plane { .. } => {
            for row in wave.cells.chunks(wave.grid.width()) {
                let line: String = row
                    .iter()
                    .map(|cell| cell.tile().map_or("?", |tile| tile.id.as_str()))
                    .collect();

                println!("{}", line);
            }
        }
    }
}
