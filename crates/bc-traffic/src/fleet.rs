//! The `VehicleFleet` — every vehicle, its RNG, and its latest pose.

use log::debug;

use bc_core::{SimRng, VehicleId, VehicleRng};
use bc_grid::CityGrid;

use crate::{draw_speed, sample_spawn, Pose, TrafficResult, VehicleAgent, VehicleModel};

/// Parallel arrays indexed by [`VehicleId`].
///
/// RNGs live beside the vehicles rather than inside them so a tick can hold
/// `&mut` to both while sharing the grid, sequentially or on a thread pool.
/// All three vectors always have the same length.
pub struct VehicleFleet {
    pub vehicles: Vec<VehicleAgent>,
    pub rngs:     Vec<VehicleRng>,
    /// Pose produced by the most recent update (or spawn).
    pub poses:    Vec<Pose>,
    seed:         u64,
}

impl VehicleFleet {
    /// An empty fleet whose per-vehicle RNGs derive from `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            vehicles: Vec::new(),
            rngs:     Vec::new(),
            poses:    Vec::new(),
            seed,
        }
    }

    /// Add a vehicle and return its ID.
    pub fn push(&mut self, vehicle: VehicleAgent) -> VehicleId {
        let id = VehicleId(self.vehicles.len() as u32);
        self.rngs.push(VehicleRng::new(self.seed, id));
        self.poses.push(vehicle.pose());
        self.vehicles.push(vehicle);
        id
    }

    /// Spawn a vehicle at a sampled street cell with a random speed in
    /// `[min_speed, max_speed]` and a random model.
    pub fn spawn_random(
        &mut self,
        grid:      &CityGrid,
        min_speed: f64,
        max_speed: f64,
        rng:       &mut SimRng,
    ) -> TrafficResult<VehicleId> {
        let (cell, dir) = sample_spawn(grid, rng)?;
        let speed = draw_speed(rng, min_speed, max_speed);
        let model = rng.choose(&VehicleModel::ALL).copied().unwrap_or_default();
        let vehicle = VehicleAgent::spawn(cell, dir, speed).with_model(model);
        let id = self.push(vehicle);
        debug!("spawned {id} ({model}) at {cell} heading {dir}, speed {speed:.4}");
        Ok(id)
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    pub fn get(&self, id: VehicleId) -> Option<&VehicleAgent> {
        self.vehicles.get(id.index())
    }

    pub fn pose(&self, id: VehicleId) -> Option<Pose> {
        self.poses.get(id.index()).copied()
    }

    pub fn stalled_count(&self) -> usize {
        self.vehicles.iter().filter(|v| v.is_stalled()).count()
    }

    /// Total segments committed across the fleet.
    pub fn segments_completed(&self) -> u64 {
        self.vehicles.iter().map(VehicleAgent::segments_completed).sum()
    }
}
