//! `bc-core` — foundational types for the `block_city` traffic simulation.
//!
//! This crate is a dependency of every other `bc-*` crate.  It has no `bc-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`heading`]     | `Direction`, `DirectionSet`, `Turn`                   |
//! | [`cell`]        | `Cell` grid coordinate and `step`                     |
//! | [`ids`]         | `VehicleId`                                           |
//! | [`time`]        | `Tick`, `FrameClock`                                  |
//! | [`config`]      | `CityConfig`                                          |
//! | [`rng`]         | `VehicleRng` (per-vehicle), `SimRng` (global)         |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod cell;
pub mod config;
pub mod error;
pub mod heading;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::Cell;
pub use config::CityConfig;
pub use error::{CoreError, CoreResult};
pub use heading::{Direction, DirectionSet, Turn, LEFT_TURN_RADIUS, RIGHT_TURN_RADIUS};
pub use ids::VehicleId;
pub use rng::{SimRng, VehicleRng};
pub use time::{FrameClock, Tick};
