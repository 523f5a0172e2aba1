//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `vehicle_poses.csv`
//! - `tick_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::{OutputResult, TickSummaryRow, VehiclePoseRow};
use crate::writer::OutputWriter;

/// Writes per-tick output to two CSV files.
pub struct CsvWriter {
    poses:      Writer<File>,
    summaries:  Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Create the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut poses = Writer::from_path(dir.join("vehicle_poses.csv"))?;
        poses.write_record(["vehicle_id", "tick", "model", "row", "col", "x", "z", "heading", "stalled"])?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(["tick", "elapsed_secs", "moving", "stalled", "commits"])?;

        Ok(Self {
            poses,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_poses(&mut self, rows: &[VehiclePoseRow]) -> OutputResult<()> {
        for row in rows {
            self.poses.write_record(&[
                row.vehicle_id.to_string(),
                row.tick.to_string(),
                row.model.to_string(),
                row.row.to_string(),
                row.col.to_string(),
                format!("{:.4}", row.x),
                format!("{:.4}", row.z),
                format!("{:.4}", row.heading),
                (row.stalled as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            format!("{:.3}", row.elapsed_secs),
            row.moving.to_string(),
            row.stalled.to_string(),
            row.commits.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.poses.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
