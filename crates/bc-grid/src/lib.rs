//! `bc-grid` — the static city map and everything derived from it once at
//! generation time.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                    |
//! |---------------|-------------------------------------------------------------|
//! | [`grid`]      | `Tile`, `CityGrid` (immutable tile map, ASCII import)       |
//! | [`roads`]     | `RoadVariant`, `Rotation`, `RoadPiece`, `resolve(mask)`     |
//! | [`buildings`] | `BuildingStyle`, `BuildingPlacement`, `place_building`      |
//! | [`layout`]    | `CityLayout` — road and building placements for every cell  |
//! | [`error`]     | `GridError`, `GridResult<T>`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public value types.     |

pub mod buildings;
pub mod error;
pub mod grid;
pub mod layout;
pub mod roads;

#[cfg(test)]
mod tests;

pub use buildings::{place_building, BuildingPlacement, BuildingStyle};
pub use error::{GridError, GridResult};
pub use grid::{CityGrid, Tile};
pub use layout::{CityLayout, RoadPlacement};
pub use roads::{resolve, RoadPiece, RoadVariant, Rotation};
