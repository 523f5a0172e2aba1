//! `bc-sim` — the city orchestrator.
//!
//! # Tick loop
//!
//! ```text
//! build:
//!   ① Grid    — block lattice from CityConfig (or a caller-supplied map).
//!   ② Layout  — road variant + rotation per Street tile, a building per
//!               House tile that touches a street.
//!   ③ Spawn   — rejection-sampled Street cells, random speed and model.
//!
//! for tick in 0..config.total_ticks:
//!   ④ Update  — every vehicle advances once, in VehicleId order
//!               (parallel with the `parallel` feature).
//!   ⑤ Observe — tick summary, and a pose snapshot every
//!               output_interval_ticks.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the vehicle update on Rayon's thread pool.        |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use bc_core::CityConfig;
//! use bc_sim::{CityBuilder, NoopObserver};
//! use bc_traffic::Wander;
//!
//! let mut city = CityBuilder::new(CityConfig::default(), Wander).build()?;
//! city.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::CityBuilder;
pub use error::{SimError, SimResult};
pub use observer::{CityObserver, NoopObserver, TickSummary};
pub use sim::City;
