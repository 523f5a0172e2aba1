//! World construction: what to put on every cell.

use log::debug;

use bc_core::{Cell, DirectionSet, SimRng};

use crate::{place_building, resolve, BuildingPlacement, CityGrid, RoadPiece};

/// A road asset seated on one Street tile.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoadPlacement {
    pub cell:  Cell,
    /// Street neighbours of `cell`; also the table index for `piece`.
    pub mask:  DirectionSet,
    pub piece: RoadPiece,
}

/// Every road and building placed on a grid.  Written once, read-only
/// thereafter; the renderer instantiates one asset per entry.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CityLayout {
    pub roads:     Vec<RoadPlacement>,
    pub buildings: Vec<BuildingPlacement>,
}

impl CityLayout {
    /// Visit every cell once, row-major.
    ///
    /// Street tiles get the resolver's piece for their adjacency mask
    /// (isolated street tiles get nothing); House tiles get a building when
    /// they border a street.  `rng` is consumed only by building placement,
    /// in visiting order, so a given seed always yields the same city.
    pub fn generate(grid: &CityGrid, rng: &mut SimRng) -> Self {
        let mut layout = CityLayout::default();
        for cell in grid.cells() {
            if grid.is_street(cell) {
                let mask = grid.street_neighbors(cell);
                if let Some(piece) = resolve(mask.bits()) {
                    layout.roads.push(RoadPlacement { cell, mask, piece });
                }
            } else if let Some(building) = place_building(grid, cell, rng) {
                layout.buildings.push(building);
            }
        }
        debug!(
            "layout: {} road pieces, {} buildings on a {}x{} grid",
            layout.roads.len(),
            layout.buildings.len(),
            grid.rows(),
            grid.cols()
        );
        layout
    }

    pub fn road_at(&self, cell: Cell) -> Option<&RoadPlacement> {
        self.roads.iter().find(|r| r.cell == cell)
    }

    pub fn building_at(&self, cell: Cell) -> Option<&BuildingPlacement> {
        self.buildings.iter().find(|b| b.cell == cell)
    }
}
