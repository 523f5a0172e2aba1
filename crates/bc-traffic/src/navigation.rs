//! Choosing where a vehicle goes next.

use bc_core::{Cell, Direction, DirectionSet, VehicleRng};
use bc_grid::CityGrid;

/// Pluggable exit selection.
///
/// Called once each time a vehicle commits to a new cell, with the heading it
/// arrived on.  Returning `None` means the vehicle has nowhere to go and
/// stalls permanently.  A returned reversal of `heading` is treated the same
/// way; vehicles never U-turn.
///
/// # Thread safety
///
/// With the `parallel` feature of `bc-sim` the fleet is updated on Rayon's
/// thread pool, so implementations must be `Send + Sync`.  Per-vehicle
/// randomness comes in through `rng`, never from state in the navigator.
pub trait Navigator: Send + Sync + 'static {
    fn choose(
        &self,
        grid:    &CityGrid,
        cell:    Cell,
        heading: Direction,
        rng:     &mut VehicleRng,
    ) -> Option<Direction>;
}

/// Headings a vehicle on `cell`, having arrived on `heading`, may leave by:
/// every street neighbour except the one straight behind it.
pub fn candidate_directions(grid: &CityGrid, cell: Cell, heading: Direction) -> DirectionSet {
    let back = heading.flip();
    grid.street_neighbors(cell)
        .iter()
        .filter(|&d| d != back)
        .collect()
}

/// Pick uniformly among [`candidate_directions`].  `None` at a dead end.
pub fn choose_next_direction(
    grid:    &CityGrid,
    cell:    Cell,
    heading: Direction,
    rng:     &mut VehicleRng,
) -> Option<Direction> {
    let options = candidate_directions(grid, cell, heading);
    if options.is_empty() {
        return None;
    }
    options.nth(rng.gen_range(0..options.len()))
}

/// Aimless driving: a uniformly random legal exit at every cell.
#[derive(Copy, Clone, Debug, Default)]
pub struct Wander;

impl Navigator for Wander {
    fn choose(
        &self,
        grid:    &CityGrid,
        cell:    Cell,
        heading: Direction,
        rng:     &mut VehicleRng,
    ) -> Option<Direction> {
        choose_next_direction(grid, cell, heading, rng)
    }
}
