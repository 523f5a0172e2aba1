//! Fluent builder for constructing a [`City`].

use log::{debug, info};

use bc_core::{Cell, CityConfig, Direction, SimRng};
use bc_grid::{CityGrid, CityLayout};
use bc_traffic::{Navigator, VehicleAgent, VehicleFleet, VehicleModel};

use crate::{City, SimResult};

/// Seed offsets for the independent generation stages.
const LAYOUT_STREAM: u64 = 1;
const SPAWN_STREAM:  u64 = 2;

/// Fluent builder for [`City<N>`].
///
/// # Required inputs
///
/// - [`CityConfig`] — grid dimensions, vehicle count, speed range, seed, …
/// - `N: Navigator` — the exit-selection policy (e.g. [`bc_traffic::Wander`])
///
/// # Optional inputs (have defaults)
///
/// | Method         | Default                                                  |
/// |----------------|----------------------------------------------------------|
/// | `.grid(g)`     | `CityGrid::blocks(num_blocks, block_size)`               |
/// | `.spawns(v)`   | `vehicle_count` rejection-sampled spawns                 |
///
/// # Example
///
/// ```rust,ignore
/// let mut city = CityBuilder::new(config, Wander)
///     .grid(CityGrid::from_ascii(MAP)?)
///     .spawns(vec![(Cell::new(0, 0), Direction::E, 0.05)])
///     .build()?;
/// city.run(&mut NoopObserver)?;
/// ```
pub struct CityBuilder<N: Navigator> {
    config:    CityConfig,
    navigator: N,
    grid:      Option<CityGrid>,
    spawns:    Option<Vec<(Cell, Direction, f64)>>,
}

impl<N: Navigator> CityBuilder<N> {
    /// Create a builder with all required inputs.
    pub fn new(config: CityConfig, navigator: N) -> Self {
        Self {
            config,
            navigator,
            grid:   None,
            spawns: None,
        }
    }

    /// Drive on a caller-supplied map instead of the generated lattice.
    ///
    /// `num_blocks` and `block_size` are then ignored.
    pub fn grid(mut self, grid: CityGrid) -> Self {
        self.grid = Some(grid);
        self
    }

    /// Place vehicles at explicit `(cell, heading, speed)` triples instead of
    /// sampling `vehicle_count` spawns.  Each placement is validated with
    /// [`VehicleAgent::try_spawn`].
    pub fn spawns(mut self, spawns: Vec<(Cell, Direction, f64)>) -> Self {
        self.spawns = Some(spawns);
        self
    }

    /// Validate inputs, generate the layout, spawn the fleet, and return a
    /// ready-to-run [`City`].
    pub fn build(self) -> SimResult<City<N>> {
        let config = self.config;
        config.validate()?;

        // ── Grid and layout ───────────────────────────────────────────────
        let grid = match self.grid {
            Some(g) => g,
            None    => CityGrid::from_config(&config)?,
        };

        let mut rng = SimRng::new(config.seed);
        let layout = CityLayout::generate(&grid, &mut rng.child(LAYOUT_STREAM));

        // ── Fleet ─────────────────────────────────────────────────────────
        let mut spawn_rng = rng.child(SPAWN_STREAM);
        let mut fleet = VehicleFleet::new(config.seed);
        match self.spawns {
            Some(spawns) => {
                for (cell, dir, speed) in spawns {
                    let model = spawn_rng.choose(&VehicleModel::ALL).copied().unwrap_or_default();
                    let vehicle = VehicleAgent::try_spawn(&grid, cell, dir, speed)?.with_model(model);
                    let id = fleet.push(vehicle);
                    debug!("placed {id} ({model}) at {cell} heading {dir}, speed {speed:.4}");
                }
            }
            None => {
                for _ in 0..config.vehicle_count {
                    fleet.spawn_random(&grid, config.min_speed, config.max_speed, &mut spawn_rng)?;
                }
            }
        }

        info!(
            "built city: {}x{} grid, {} street tiles, {} roads, {} buildings, {} vehicles",
            grid.rows(),
            grid.cols(),
            grid.street_count(),
            layout.roads.len(),
            layout.buildings.len(),
            fleet.len(),
        );

        Ok(City {
            clock:     config.make_clock(),
            config,
            grid,
            layout,
            fleet,
            navigator: self.navigator,
        })
    }
}
