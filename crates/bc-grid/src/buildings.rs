//! Building placement on House tiles.

use std::f64::consts::FRAC_PI_2;

use bc_core::{Cell, Direction, SimRng};

use crate::{CityGrid, Tile};

/// The five small-building assets.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BuildingStyle {
    A,
    B,
    C,
    D,
    F,
}

impl BuildingStyle {
    pub const ALL: [BuildingStyle; 5] = [
        BuildingStyle::A,
        BuildingStyle::B,
        BuildingStyle::C,
        BuildingStyle::D,
        BuildingStyle::F,
    ];

    pub fn asset_name(self) -> &'static str {
        match self {
            BuildingStyle::A => "small_buildingA",
            BuildingStyle::B => "small_buildingB",
            BuildingStyle::C => "small_buildingC",
            BuildingStyle::D => "small_buildingD",
            BuildingStyle::F => "small_buildingF",
        }
    }
}

/// A building standing on a House tile, its front facing an adjacent street.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuildingPlacement {
    pub cell:   Cell,
    pub facing: Direction,
    pub style:  BuildingStyle,
}

impl BuildingPlacement {
    /// Yaw that turns the asset's front towards `facing`: `(2 - facing) · π/2`.
    pub fn rotation_radians(&self) -> f64 {
        (2.0 - f64::from(self.facing.index())) * FRAC_PI_2
    }
}

/// Place a building on `cell` if it is a House with at least one Street
/// neighbour.
///
/// The facing is drawn uniformly from the street-side headings and the style
/// uniformly from [`BuildingStyle::ALL`].  Returns `None` for non-House cells
/// and for houses enclosed by other houses.
pub fn place_building(grid: &CityGrid, cell: Cell, rng: &mut SimRng) -> Option<BuildingPlacement> {
    if grid.tile(cell) != Tile::House {
        return None;
    }
    let options = grid.street_neighbors(cell);
    if options.is_empty() {
        return None;
    }
    let facing = options.nth(rng.gen_range(0..options.len()))?;
    let style  = *rng.choose(&BuildingStyle::ALL)?;
    Some(BuildingPlacement { cell, facing, style })
}
