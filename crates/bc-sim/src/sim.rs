//! The `City` struct and its tick loop.

use log::debug;

use bc_core::{CityConfig, FrameClock, Tick};
use bc_grid::{CityGrid, CityLayout};
use bc_traffic::{Navigator, Pose, VehicleAgent, VehicleFleet};

use crate::{CityObserver, SimResult, TickSummary};

// ── City ──────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `City<N>` owns the grid, the generated layout and the fleet, and advances
/// every vehicle exactly once per tick.  Vehicles only read the grid and
/// never see each other, so update order does not affect the result; the
/// sequential path still visits them in ascending `VehicleId` order.
///
/// Create via [`CityBuilder`][crate::CityBuilder].
pub struct City<N: Navigator> {
    /// Global configuration (dimensions, vehicle count, seed, …).
    pub config: CityConfig,

    /// Frame clock — tracks the current tick and maps it to seconds.
    pub clock: FrameClock,

    /// Static tile map, shared read-only by every vehicle.
    pub grid: CityGrid,

    /// Road and building placements generated from `grid`.
    pub layout: CityLayout,

    /// Vehicles, their RNGs, and their most recent poses.
    pub fleet: VehicleFleet,

    /// Exit-selection policy.  Called once per committed cell transition.
    pub navigator: N,
}

impl<N: Navigator> City<N> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: CityObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let mut commits = 0;
        while self.clock.current_tick < self.config.end_tick() {
            commits += self.observed_tick(observer).commits;
        }
        debug!(
            "run finished at {}: {} commits, {} of {} vehicles stalled",
            self.clock,
            commits,
            self.fleet.stalled_count(),
            self.fleet.len(),
        );
        observer.on_sim_end(self.clock.current_tick);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: CityObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.observed_tick(observer);
        }
        Ok(())
    }

    /// Advance one frame without an observer.
    pub fn tick(&mut self) -> TickSummary {
        let summary = self.update_fleet();
        self.clock.advance();
        summary
    }

    /// Pose of every vehicle after the latest update, indexed by `VehicleId`.
    pub fn poses(&self) -> &[Pose] {
        &self.fleet.poses
    }

    pub fn vehicles(&self) -> &[VehicleAgent] {
        &self.fleet.vehicles
    }

    pub fn now(&self) -> Tick {
        self.clock.current_tick
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn observed_tick<O: CityObserver>(&mut self, observer: &mut O) -> TickSummary {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);
        let summary = self.update_fleet();
        observer.on_tick_end(now, summary);
        if self.config.output_interval_ticks > 0
            && now.0.is_multiple_of(self.config.output_interval_ticks)
        {
            observer.on_snapshot(now, &self.fleet.vehicles, &self.fleet.poses);
        }
        self.clock.advance();
        summary
    }

    /// Update every vehicle once and record its new pose.
    ///
    /// With the `parallel` Cargo feature the updates run on Rayon's thread
    /// pool.
    fn update_fleet(&mut self) -> TickSummary {
        // Explicit field borrows so the borrow checker sees disjoint access.
        let grid      = &self.grid;
        let navigator = &self.navigator;
        let fleet     = &mut self.fleet;
        let before    = fleet.segments_completed();

        #[cfg(not(feature = "parallel"))]
        {
            for ((vehicle, rng), pose) in fleet
                .vehicles
                .iter_mut()
                .zip(fleet.rngs.iter_mut())
                .zip(fleet.poses.iter_mut())
            {
                *pose = vehicle.update(grid, navigator, rng);
            }
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            fleet
                .vehicles
                .par_iter_mut()
                .zip(fleet.rngs.par_iter_mut())
                .zip(fleet.poses.par_iter_mut())
                .for_each(|((vehicle, rng), pose)| {
                    *pose = vehicle.update(grid, navigator, rng);
                });
        }

        let stalled = fleet.stalled_count();
        TickSummary {
            moving:  fleet.len() - stalled,
            stalled,
            commits: fleet.segments_completed() - before,
        }
    }
}
