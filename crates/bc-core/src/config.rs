//! Top-level city configuration.

use crate::{CoreError, CoreResult, FrameClock, Tick, Turn};

/// Construction-time parameters for a city run.
///
/// `Default` reproduces the classic layout: a 3 × 3 arrangement of 3 × 3
/// blocks (a 13 × 13 tile grid) with 20 vehicles.  Applications may load this
/// from a file with the `serde` feature.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CityConfig {
    /// Blocks along each side of the city.
    pub num_blocks: usize,

    /// House tiles along each side of one block.
    pub block_size: usize,

    /// Vehicles spawned at construction.
    pub vehicle_count: usize,

    /// Lower bound of the spawn speed draw, in tiles per tick.
    pub min_speed: f64,

    /// Upper bound of the spawn speed draw, in tiles per tick.
    pub max_speed: f64,

    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,

    /// Ticks simulated by `City::run`.
    pub total_ticks: u64,

    /// Emit a pose snapshot every N ticks.  0 disables snapshots.
    pub output_interval_ticks: u64,

    /// Frame rate used to translate ticks into seconds.
    pub frames_per_sec: u32,
}

impl Default for CityConfig {
    fn default() -> Self {
        Self {
            num_blocks:            3,
            block_size:            3,
            vehicle_count:         20,
            min_speed:             1.0 / 120.0,
            max_speed:             1.0 / 20.0,
            seed:                  0,
            total_ticks:           3_600,
            output_interval_ticks: 1,
            frames_per_sec:        60,
        }
    }
}

impl CityConfig {
    /// Side length of the square tile grid:
    /// `num_blocks * (block_size + 1) + 1`.
    #[inline]
    pub fn grid_size(&self) -> usize {
        self.num_blocks * (self.block_size + 1) + 1
    }

    /// The tick at which `City::run` stops (exclusive).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    pub fn make_clock(&self) -> FrameClock {
        FrameClock::new(self.frames_per_sec)
    }

    /// Reject configurations the simulation cannot honour.
    ///
    /// The speed ceiling keeps a vehicle from crossing a whole right-turn
    /// segment in one tick, so the progress fraction stays below 1 after a
    /// carry-over.
    pub fn validate(&self) -> CoreResult<()> {
        if self.num_blocks == 0 {
            return Err(CoreError::Config("num_blocks must be at least 1".into()));
        }
        if !self.min_speed.is_finite() || self.min_speed <= 0.0 {
            return Err(CoreError::Config(format!(
                "min_speed must be positive, got {}",
                self.min_speed
            )));
        }
        if !self.max_speed.is_finite() || self.max_speed < self.min_speed {
            return Err(CoreError::Config(format!(
                "max_speed {} is below min_speed {}",
                self.max_speed, self.min_speed
            )));
        }
        let ceiling = Turn::Right.distance();
        if self.max_speed >= ceiling {
            return Err(CoreError::Config(format!(
                "max_speed {} must stay below the right-turn segment length {ceiling:.4}",
                self.max_speed
            )));
        }
        if self.frames_per_sec == 0 {
            return Err(CoreError::Config("frames_per_sec must be at least 1".into()));
        }
        Ok(())
    }
}
