//! `bc-output` — simulation output writers for block_city.
//!
//! | Writer               | Files created                                  |
//! |----------------------|------------------------------------------------|
//! | [`CsvWriter`]        | `vehicle_poses.csv`, `tick_summaries.csv`      |
//! | [`write_layout_csv`] | `city_layout.csv`                              |
//!
//! Per-tick output goes through the [`OutputWriter`] trait and is driven by
//! [`CityOutputObserver`], which implements `bc_sim::CityObserver`.  The
//! layout is static, so it is written once after the city is built.
//!
//! # Usage
//!
//! ```rust,ignore
//! use bc_output::{write_layout_csv, CityOutputObserver, CsvWriter};
//!
//! write_layout_csv(Path::new("./output"), &city.grid, &city.layout)?;
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = CityOutputObserver::new(writer, &city.config);
//! city.run(&mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod layout;
pub mod observer;
pub mod row;
pub mod writer;


pub use self::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use layout::{layout_rows, write_layout_csv};
pub use observer::CityOutputObserver;
pub use row::{LayoutRow, TickSummaryRow, VehiclePoseRow};
pub use writer::OutputWriter;
