//! The `OutputWriter` trait implemented by per-tick writers.

use crate::{OutputResult, TickSummaryRow, VehiclePoseRow};

/// Trait implemented by per-tick output backends.
///
/// Errors are returned to the caller; [`CityOutputObserver`][crate::CityOutputObserver]
/// stores them for retrieval with `take_error`.
pub trait OutputWriter {
    /// Write a batch of vehicle poses.
    fn write_poses(&mut self, rows: &[VehiclePoseRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
