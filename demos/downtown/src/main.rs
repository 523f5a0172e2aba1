//! downtown — the classic block_city scene.
//!
//! Builds a 3 × 3 arrangement of 3 × 3 blocks, drops 20 vehicles onto the
//! streets, and drives them for one minute of 60 fps frames.  Poses, tick
//! summaries and the generated layout are written as CSV under
//! `output/downtown`.
//!
//! Set `RUST_LOG=debug` to see every spawn, or `RUST_LOG=trace` for every
//! cell commit.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use log::info;

use bc_core::{Cell, CityConfig, Direction, Tick, VehicleRng};
use bc_grid::CityGrid;
use bc_output::{write_layout_csv, CityOutputObserver, CsvWriter, OutputWriter};
use bc_sim::{CityBuilder, CityObserver, TickSummary};
use bc_traffic::{candidate_directions, choose_next_direction, Navigator, Pose, VehicleAgent};

// ── Constants ─────────────────────────────────────────────────────────────────

const NUM_BLOCKS:            usize = 3;
const BLOCK_SIZE:            usize = 3;
const VEHICLE_COUNT:         usize = 20;
const SEED:                  u64   = 42;
const FRAMES_PER_SEC:        u32   = 60;
const SIM_SECONDS:           u64   = 60;
const OUTPUT_INTERVAL_TICKS: u64   = 6; // ten pose snapshots per second

/// Chance that a cruising vehicle keeps going straight when it can.
const STRAIGHT_BIAS: f64 = 0.6;

// ── Navigation policy ─────────────────────────────────────────────────────────

/// Prefers to keep its heading; otherwise wanders like `Wander`.
struct Cruise;

impl Navigator for Cruise {
    fn choose(
        &self,
        grid:    &CityGrid,
        cell:    Cell,
        heading: Direction,
        rng:     &mut VehicleRng,
    ) -> Option<Direction> {
        if candidate_directions(grid, cell, heading).contains(heading)
            && rng.gen_range(0.0..1.0) < STRAIGHT_BIAS
        {
            return Some(heading);
        }
        choose_next_direction(grid, cell, heading, rng)
    }
}

// ── Observer wrapper to count rows ───────────────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:        CityOutputObserver<W>,
    pose_rows:    usize,
    summary_rows: usize,
    commits:      u64,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: CityOutputObserver<W>) -> Self {
        Self { inner, pose_rows: 0, summary_rows: 0, commits: 0 }
    }
}

impl<W: OutputWriter> CityObserver for CountingObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, summary: TickSummary) {
        self.summary_rows += 1;
        self.commits += summary.commits;
        self.inner.on_tick_end(tick, summary);
    }

    fn on_snapshot(&mut self, tick: Tick, vehicles: &[VehicleAgent], poses: &[Pose]) {
        self.pose_rows += vehicles.len();
        self.inner.on_snapshot(tick, vehicles, poses);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    println!("=== downtown — block_city traffic ===");
    println!("Blocks: {NUM_BLOCKS}x{NUM_BLOCKS} of {BLOCK_SIZE}x{BLOCK_SIZE}  |  Vehicles: {VEHICLE_COUNT}  |  Seed: {SEED}");
    println!();

    // 1. Config.
    let config = CityConfig {
        num_blocks:            NUM_BLOCKS,
        block_size:            BLOCK_SIZE,
        vehicle_count:         VEHICLE_COUNT,
        seed:                  SEED,
        total_ticks:           SIM_SECONDS * u64::from(FRAMES_PER_SEC),
        output_interval_ticks: OUTPUT_INTERVAL_TICKS,
        frames_per_sec:        FRAMES_PER_SEC,
        ..CityConfig::default()
    };

    // 2. Build the city.
    let mut city = CityBuilder::new(config.clone(), Cruise).build()?;
    println!(
        "Grid: {}x{}, {} street tiles, {} road pieces, {} buildings",
        city.grid.rows(),
        city.grid.cols(),
        city.grid.street_count(),
        city.layout.roads.len(),
        city.layout.buildings.len(),
    );
    print!("{}", city.grid);
    println!();

    // 3. Set up output.
    let out_dir = Path::new("output/downtown");
    std::fs::create_dir_all(out_dir)?;
    let layout_path = write_layout_csv(out_dir, &city.grid, &city.layout)?;
    info!("layout written to {}", layout_path.display());
    let writer = CsvWriter::new(out_dir)?;
    let mut obs = CountingObserver::new(CityOutputObserver::new(writer, &config));

    // 4. Run.
    let t0 = Instant::now();
    city.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 5. Summary.
    println!("Simulated {} in {:.3} s", city.clock, elapsed.as_secs_f64());
    println!("  city_layout.csv     : {} rows", city.layout.roads.len() + city.layout.buildings.len());
    println!("  vehicle_poses.csv   : {} rows", obs.pose_rows);
    println!("  tick_summaries.csv  : {} rows", obs.summary_rows);
    println!("  cell commits        : {}", obs.commits);
    println!();

    // 6. Final vehicle table.
    println!("{:<8} {:<16} {:<10} {:<8} {:<9} {:<8}", "Vehicle", "Model", "Cell", "Heading", "Segments", "Stalled");
    println!("{}", "-".repeat(62));
    for (i, v) in city.vehicles().iter().enumerate() {
        println!(
            "{:<8} {:<16} {:<10} {:<8} {:<9} {:<8}",
            i,
            v.model.to_string(),
            v.cell().to_string(),
            v.dir().to_string(),
            v.segments_completed(),
            if v.is_stalled() { "yes" } else { "no" },
        );
    }

    Ok(())
}
