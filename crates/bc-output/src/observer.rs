//! `CityOutputObserver<W>` — bridges `CityObserver` to an `OutputWriter`.

use bc_core::{CityConfig, FrameClock, Tick};
use bc_sim::{CityObserver, TickSummary};
use bc_traffic::{wrap_angle, Pose, VehicleAgent};

use crate::row::{TickSummaryRow, VehiclePoseRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`CityObserver`] that writes vehicle poses and tick summaries to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `CityObserver`
/// methods have no return value.  After `city.run()` returns, check for errors
/// with [`take_error`][Self::take_error].
pub struct CityOutputObserver<W: OutputWriter> {
    writer:     W,
    clock:      FrameClock,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> CityOutputObserver<W> {
    /// Create an observer backed by `writer`, using `config`'s frame rate to
    /// convert ticks to seconds.
    pub fn new(writer: W, config: &CityConfig) -> Self {
        Self {
            writer,
            clock:      config.make_clock(),
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `city.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> CityObserver for CityOutputObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, summary: TickSummary) {
        let row = TickSummaryRow {
            tick:         tick.0,
            elapsed_secs: self.clock.secs_at(tick),
            moving:       summary.moving as u64,
            stalled:      summary.stalled as u64,
            commits:      summary.commits,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, vehicles: &[VehicleAgent], poses: &[Pose]) {
        let rows: Vec<VehiclePoseRow> = vehicles
            .iter()
            .zip(poses)
            .enumerate()
            .map(|(i, (vehicle, pose))| VehiclePoseRow {
                vehicle_id: i as u32,
                tick:       tick.0,
                model:      vehicle.model.asset_name(),
                row:        vehicle.cell().row,
                col:        vehicle.cell().col,
                x:          pose.x,
                z:          pose.z,
                heading:    wrap_angle(pose.heading),
                stalled:    vehicle.is_stalled(),
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_poses(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
