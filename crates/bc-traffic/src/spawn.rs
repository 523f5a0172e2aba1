//! Spawn-point sampling.

use bc_core::{Cell, Direction, SimRng};
use bc_grid::CityGrid;

use crate::{TrafficError, TrafficResult};

/// Random draws per grid cell before falling back to a scan.
const SAMPLES_PER_CELL: usize = 64;

/// Pick a random Street cell with at least one Street neighbour, and a random
/// open heading out of it.
///
/// Cells are drawn uniformly until one qualifies.  On maps where qualifying
/// cells are too rare for that to finish quickly, the first qualifying cell in
/// row-major order is returned instead.
pub fn sample_spawn(grid: &CityGrid, rng: &mut SimRng) -> TrafficResult<(Cell, Direction)> {
    let (rows, cols) = (grid.rows(), grid.cols());
    for _ in 0..rows * cols * SAMPLES_PER_CELL {
        let cell = Cell::new(rng.gen_range(0..rows) as i32, rng.gen_range(0..cols) as i32);
        if !grid.is_street(cell) {
            continue;
        }
        let open = grid.street_neighbors(cell);
        if open.is_empty() {
            continue;
        }
        if let Some(dir) = open.nth(rng.gen_range(0..open.len())) {
            return Ok((cell, dir));
        }
    }

    grid.street_cells()
        .find_map(|cell| grid.street_neighbors(cell).nth(0).map(|dir| (cell, dir)))
        .ok_or(TrafficError::NoSpawnableCell)
}

/// Uniform speed in `[min, max]` tiles per tick.
pub fn draw_speed(rng: &mut SimRng, min: f64, max: f64) -> f64 {
    if max > min { rng.gen_range(min..=max) } else { min }
}
