//! `bc-traffic` — vehicles that wander the street grid.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                        |
//! |----------------|-----------------------------------------------------------------|
//! | [`navigation`] | `Navigator` trait, `Wander`, `choose_next_direction`            |
//! | [`motion`]     | `compute_pose` motion curve, `LocalPose`, `Pose`                |
//! | [`vehicle`]    | `VehicleAgent` — per-vehicle state machine                      |
//! | [`model`]      | `VehicleModel` — which car asset a vehicle renders as           |
//! | [`spawn`]      | Rejection-sampled spawn points and speed draws                  |
//! | [`fleet`]      | `VehicleFleet` — vehicles, their RNGs and latest poses          |
//! | [`error`]      | `TrafficError`, `TrafficResult<T>`                              |
//!
//! # Movement model
//!
//! A vehicle always sits on a committed cell and drives one *segment* across
//! it: in from the edge it entered by (`dir`), out through the edge it has
//! already chosen (`next_dir`).  Progress accumulates by `speed` each tick.
//! When it exceeds the segment length the vehicle commits to the next cell,
//! asks its [`Navigator`] for the following exit, and carries the leftover
//! progress into the new segment so motion stays continuous.
//!
//! ```text
//!   entered via dir ──▶ [ cell ] ──▶ leaves via next_dir
//!                       distance ∈ [0, turn.distance())
//! ```
//!
//! If no exit other than a reversal exists, the vehicle stalls for good.

pub mod error;
pub mod fleet;
pub mod model;
pub mod motion;
pub mod navigation;
pub mod spawn;
pub mod vehicle;


pub use error::{TrafficError, TrafficResult};
pub use fleet::VehicleFleet;
pub use model::VehicleModel;
pub use motion::{compute_pose, wrap_angle, LocalPose, Pose};
pub use navigation::{candidate_directions, choose_next_direction, Navigator, Wander};
pub use spawn::{draw_speed, sample_spawn};
pub use vehicle::VehicleAgent;
