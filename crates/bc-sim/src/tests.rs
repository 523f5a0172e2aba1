//! Integration tests for bc-sim.

use bc_core::{Cell, CityConfig, Direction, Tick};
use bc_grid::CityGrid;
use bc_traffic::{Pose, VehicleAgent, Wander};

use crate::{City, CityBuilder, CityObserver, NoopObserver, TickSummary};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn test_config(total_ticks: u64) -> CityConfig {
    CityConfig {
        seed:                  42,
        total_ticks,
        output_interval_ticks: total_ticks.max(1),
        ..CityConfig::default()
    }
}

fn default_city(total_ticks: u64) -> City<Wander> {
    CityBuilder::new(test_config(total_ticks), Wander).build().unwrap()
}

/// A street spur ending in a dead end at (2, 1).
///
/// ```text
/// ###
/// .#.
/// .#.
/// ```
fn spur() -> CityGrid {
    CityGrid::from_ascii(
        "
        ###
        .#.
        .#.
        ",
    )
    .unwrap()
}

#[derive(Default)]
struct Recorder {
    starts:    u64,
    summaries: Vec<TickSummary>,
    snapshots: Vec<(Tick, usize)>,
    ended_at:  Option<Tick>,
}

impl CityObserver for Recorder {
    fn on_tick_start(&mut self, _t: Tick) {
        self.starts += 1;
    }
    fn on_tick_end(&mut self, _t: Tick, s: TickSummary) {
        self.summaries.push(s);
    }
    fn on_snapshot(&mut self, t: Tick, vehicles: &[VehicleAgent], poses: &[Pose]) {
        assert_eq!(vehicles.len(), poses.len());
        self.snapshots.push((t, poses.len()));
    }
    fn on_sim_end(&mut self, t: Tick) {
        self.ended_at = Some(t);
    }
}

// ── CityBuilder ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;
    use crate::SimError;
    use bc_traffic::TrafficError;

    #[test]
    fn builds_classic_city() {
        let city = default_city(10);
        assert_eq!(city.grid.rows(), 13);
        assert_eq!(city.grid.cols(), 13);
        assert_eq!(city.fleet.len(), 20);
        assert_eq!(city.layout.roads.len(), city.grid.street_count());
        // Block centres touch no street.
        assert_eq!(city.layout.buildings.len(), 81 - 9);
    }

    #[test]
    fn spawns_land_on_streets_with_valid_speeds() {
        let config = test_config(1);
        let city = CityBuilder::new(config.clone(), Wander).build().unwrap();
        for v in city.vehicles() {
            assert!(city.grid.is_street(v.cell()));
            assert!(city.grid.is_street(v.cell().step(v.dir())));
            assert!(v.speed() >= config.min_speed && v.speed() <= config.max_speed);
        }
    }

    #[test]
    fn invalid_config_rejected() {
        let config = CityConfig { num_blocks: 0, ..test_config(1) };
        let result = CityBuilder::new(config, Wander).build();
        assert!(matches!(result, Err(SimError::Core(_))));
    }

    #[test]
    fn explicit_spawn_on_house_rejected() {
        let result = CityBuilder::new(test_config(1), Wander)
            .spawns(vec![(Cell::new(1, 1), Direction::N, 0.05)])
            .build();
        assert!(matches!(
            result,
            Err(SimError::Traffic(TrafficError::NotStreet { .. }))
        ));
    }

    #[test]
    fn grid_without_spawnable_cells_rejected() {
        let grid = CityGrid::from_ascii("...\n.#.\n...").unwrap();
        let result = CityBuilder::new(test_config(1), Wander).grid(grid).build();
        assert!(matches!(
            result,
            Err(SimError::Traffic(TrafficError::NoSpawnableCell))
        ));
    }

    #[test]
    fn zero_vehicles_is_fine_anywhere() {
        let grid = CityGrid::from_ascii("...\n...").unwrap();
        let config = CityConfig { vehicle_count: 0, ..test_config(5) };
        let mut city = CityBuilder::new(config, Wander).grid(grid).build().unwrap();
        city.run(&mut NoopObserver).unwrap();
        assert!(city.poses().is_empty());
    }

    #[test]
    fn same_seed_same_city() {
        let (a, b) = (default_city(1), default_city(1));
        assert_eq!(a.layout, b.layout);
        assert_eq!(a.fleet.vehicles, b.fleet.vehicles);

        let other = CityBuilder::new(CityConfig { seed: 7, ..test_config(1) }, Wander)
            .build()
            .unwrap();
        assert_ne!(a.fleet.vehicles, other.fleet.vehicles);
    }
}

// ── Tick loop ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;

    #[test]
    fn run_stops_at_end_tick() {
        let mut city = default_city(100);
        city.run(&mut NoopObserver).unwrap();
        assert_eq!(city.now(), Tick(100));
    }

    #[test]
    fn run_ticks_advances_clock() {
        let mut city = default_city(10);
        city.run_ticks(3, &mut NoopObserver).unwrap();
        assert_eq!(city.now(), Tick(3));
        // run_ticks ignores end_tick.
        city.run_ticks(20, &mut NoopObserver).unwrap();
        assert_eq!(city.now(), Tick(23));
    }

    #[test]
    fn observer_called_correct_number_of_times() {
        let config = CityConfig { output_interval_ticks: 4, ..test_config(10) };
        let mut city = CityBuilder::new(config, Wander).build().unwrap();
        let mut obs = Recorder::default();
        city.run(&mut obs).unwrap();
        assert_eq!(obs.starts, 10);
        assert_eq!(obs.summaries.len(), 10);
        assert_eq!(obs.snapshots, vec![(Tick(0), 20), (Tick(4), 20), (Tick(8), 20)]);
        assert_eq!(obs.ended_at, Some(Tick(10)));
    }

    #[test]
    fn zero_interval_disables_snapshots() {
        let config = CityConfig { output_interval_ticks: 0, ..test_config(10) };
        let mut city = CityBuilder::new(config, Wander).build().unwrap();
        let mut obs = Recorder::default();
        city.run(&mut obs).unwrap();
        assert!(obs.snapshots.is_empty());
    }

    #[test]
    fn vehicles_keep_moving_on_the_lattice() {
        let mut city = default_city(2_000);
        let mut obs = Recorder::default();
        city.run(&mut obs).unwrap();
        assert!(obs.summaries.iter().all(|s| s.stalled == 0 && s.moving == 20));
        let commits: u64 = obs.summaries.iter().map(|s| s.commits).sum();
        assert_eq!(commits, city.fleet.segments_completed());
        assert!(commits > 0);
        for v in city.vehicles() {
            assert!(city.grid.is_street(v.cell()));
        }
    }

    #[test]
    fn tick_updates_poses() {
        let mut city = default_city(10);
        let before = city.poses().to_vec();
        let summary = city.tick();
        assert_eq!(summary.moving, 20);
        assert_eq!(city.now(), Tick(1));
        for (a, b) in before.iter().zip(city.poses()) {
            assert!(a.distance_to(b) > 0.0);
        }
    }

    #[test]
    fn dead_end_vehicle_reports_stalled() {
        let mut city = CityBuilder::new(test_config(20), Wander)
            .grid(spur())
            .spawns(vec![(Cell::new(0, 1), Direction::S, 0.4)])
            .build()
            .unwrap();
        let mut obs = Recorder::default();
        city.run(&mut obs).unwrap();

        let v = &city.vehicles()[0];
        assert_eq!(v.cell(), Cell::new(2, 1));
        assert!(v.is_stalled());
        assert_eq!(v.distance(), 1.0);
        assert_eq!(obs.summaries.last(), Some(&TickSummary { moving: 0, stalled: 1, commits: 0 }));
    }

    #[test]
    fn runs_are_reproducible() {
        let mut a = default_city(500);
        let mut b = default_city(500);
        a.run(&mut NoopObserver).unwrap();
        b.run(&mut NoopObserver).unwrap();
        assert_eq!(a.poses(), b.poses());
        assert_eq!(a.fleet.vehicles, b.fleet.vehicles);
    }
}
