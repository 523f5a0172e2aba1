//! Unit tests for bc-grid.

use bc_core::{Cell, Direction, DirectionSet, SimRng};

use crate::{CityGrid, Tile};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// The classic 13 × 13 city: 3 × 3 blocks of 3 × 3 houses.
fn classic() -> CityGrid {
    CityGrid::blocks(3, 3)
}

/// A street spur ending in a dead end at (1, 1).
///
/// ```text
/// ###
/// .#.
/// ...
/// ```
fn spur() -> CityGrid {
    CityGrid::from_ascii(
        "
        ###
        .#.
        ...
        ",
    )
    .unwrap()
}

// ── CityGrid ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod grid {
    use super::*;
    use crate::GridError;
    use bc_core::CityConfig;

    #[test]
    fn block_lattice_dimensions() {
        let g = classic();
        assert_eq!(g.rows(), 13);
        assert_eq!(g.cols(), 13);
    }

    #[test]
    fn street_rule_holds_in_bounds() {
        for (num_blocks, block_size) in [(3, 3), (2, 1), (1, 4), (4, 2)] {
            let g = CityGrid::blocks(num_blocks, block_size);
            let period = (block_size + 1) as i32;
            for cell in g.cells() {
                let expected = if cell.row % period == 0 || cell.col % period == 0 {
                    Tile::Street
                } else {
                    Tile::House
                };
                assert_eq!(g.tile(cell), expected, "cell {cell} in {num_blocks}x{block_size}");
            }
        }
    }

    #[test]
    fn out_of_bounds_is_none() {
        let g = classic();
        assert_eq!(g.tile_at(-1, 0), Tile::None);
        assert_eq!(g.tile_at(0, -1), Tile::None);
        assert_eq!(g.tile_at(13, 0), Tile::None);
        assert_eq!(g.tile_at(0, 13), Tile::None);
        assert_eq!(g.tile_at(i32::MIN, i32::MAX), Tile::None);
    }

    #[test]
    fn street_count_of_classic_city() {
        // 4 street rows + 4 street columns, minus the 16 crossings counted twice.
        assert_eq!(classic().street_count(), 4 * 13 + 4 * 13 - 16);
    }

    #[test]
    fn corner_neighbors() {
        let g = classic();
        let open = g.street_neighbors(Cell::new(0, 0));
        assert_eq!(open.bits(), 0b0110);
        assert_eq!(g.street_neighbors(Cell::new(4, 4)), DirectionSet::ALL);
        // A house in the middle of a block touches no street.
        assert!(g.street_neighbors(Cell::new(2, 2)).is_empty());
    }

    #[test]
    fn from_config_validates() {
        let bad = CityConfig { num_blocks: 0, ..CityConfig::default() };
        assert!(matches!(CityGrid::from_config(&bad), Err(GridError::Core(_))));
        let good = CityGrid::from_config(&CityConfig::default()).unwrap();
        assert_eq!(good, classic());
    }

    #[test]
    fn ascii_round_trip() {
        let g = spur();
        assert_eq!(g.rows(), 3);
        assert_eq!(g.cols(), 3);
        assert_eq!(g.to_string(), "###\n.#.\n...\n");
        assert_eq!(CityGrid::from_ascii(&g.to_string()).unwrap(), g);
    }

    #[test]
    fn ascii_errors() {
        assert!(matches!(CityGrid::from_ascii("  \n"), Err(GridError::Empty)));
        assert!(matches!(
            CityGrid::from_ascii("###\n##"),
            Err(GridError::RaggedRow { line: 1, expected: 3, got: 2 })
        ));
        assert!(matches!(
            CityGrid::from_ascii("#x#"),
            Err(GridError::UnknownGlyph { glyph: 'x', line: 0, column: 1 })
        ));
    }

    #[test]
    fn world_origin_centres_the_map() {
        let (x, z) = classic().world_origin();
        assert_eq!((x, z), (-6.0, -6.0));
    }
}

// ── Road resolution ───────────────────────────────────────────────────────────

#[cfg(test)]
mod roads {
    use super::*;
    use crate::{resolve, RoadVariant, Rotation};

    #[test]
    fn resolve_is_total_and_exact() {
        assert_eq!(resolve(0), None);
        for mask in 1..16u8 {
            let piece = resolve(mask).expect("every non-zero mask has a piece");
            assert_eq!(piece.connectors().bits(), mask, "mask {mask:#06b} -> {piece:?}");
            assert_eq!(resolve(mask), Some(piece), "deterministic");
        }
    }

    #[test]
    fn variant_matches_connector_count() {
        for mask in 1..16u8 {
            let piece = resolve(mask).unwrap();
            let open = DirectionSet::from_bits(mask);
            let expected = match open.len() {
                1 => RoadVariant::DeadEnd,
                2 if open.contains(Direction::N) == open.contains(Direction::S) => RoadVariant::Straight,
                2 => RoadVariant::Bend,
                3 => RoadVariant::ThreeWay,
                _ => RoadVariant::Cross,
            };
            assert_eq!(piece.variant, expected, "mask {mask:#06b}");
        }
    }

    #[test]
    fn corner_of_classic_city_is_a_bend() {
        let g = classic();
        let mask = g.street_neighbors(Cell::new(0, 0)).bits();
        assert_eq!(mask, 0b0110);
        let piece = resolve(mask).unwrap();
        assert_eq!(piece.variant, RoadVariant::Bend);
        assert_eq!(piece.rotation, Rotation::new(3));
        assert_eq!(piece.rotation.degrees(), -90);
    }

    #[test]
    fn rotation_angles() {
        assert_eq!(Rotation::new(0).radians(), 0.0);
        assert_eq!(Rotation::new(2).degrees(), 180);
        assert_eq!(Rotation::new(5), Rotation::new(1));
        assert!(Rotation::new(3).radians() < 0.0);
    }

    #[test]
    fn ignores_high_bits() {
        assert_eq!(resolve(0b1_0110), resolve(0b0110));
    }
}

// ── Buildings and layout ──────────────────────────────────────────────────────

#[cfg(test)]
mod layout {
    use std::f64::consts::PI;

    use super::*;
    use crate::{place_building, BuildingPlacement, BuildingStyle, CityLayout};

    #[test]
    fn building_faces_a_street() {
        let g = classic();
        let mut rng = SimRng::new(3);
        for _ in 0..50 {
            let b = place_building(&g, Cell::new(1, 1), &mut rng).unwrap();
            // (1, 1) borders streets to the north and west only.
            assert!(matches!(b.facing, Direction::N | Direction::W));
        }
    }

    #[test]
    fn both_street_sides_get_picked() {
        let g = classic();
        let mut rng = SimRng::new(11);
        let mut seen = DirectionSet::EMPTY;
        for _ in 0..200 {
            seen.insert(place_building(&g, Cell::new(1, 1), &mut rng).unwrap().facing);
        }
        assert_eq!(seen.bits(), Direction::N.bit() | Direction::W.bit());
    }

    #[test]
    fn no_building_on_streets_or_enclosed_houses() {
        let g = classic();
        let mut rng = SimRng::new(0);
        assert!(place_building(&g, Cell::new(0, 0), &mut rng).is_none());
        assert!(place_building(&g, Cell::new(2, 2), &mut rng).is_none());
        assert!(place_building(&g, Cell::new(-3, 2), &mut rng).is_none());
    }

    #[test]
    fn building_rotation() {
        let b = BuildingPlacement { cell: Cell::new(1, 1), facing: Direction::N, style: BuildingStyle::A };
        assert!((b.rotation_radians() - PI).abs() < 1e-12);
        let b = BuildingPlacement { facing: Direction::S, ..b };
        assert_eq!(b.rotation_radians(), 0.0);
    }

    #[test]
    fn layout_covers_every_tile_once() {
        let g = classic();
        let layout = CityLayout::generate(&g, &mut SimRng::new(5));
        assert_eq!(layout.roads.len(), g.street_count());
        // Each 3x3 block has one enclosed centre house.
        assert_eq!(layout.buildings.len(), 9 * 8);

        for road in &layout.roads {
            assert_eq!(road.piece.connectors(), road.mask);
        }
        let centre = layout.road_at(Cell::new(4, 4)).unwrap();
        assert_eq!(centre.piece.variant, crate::RoadVariant::Cross);
        assert!(layout.building_at(Cell::new(2, 2)).is_none());
    }

    #[test]
    fn layout_is_reproducible() {
        let g = classic();
        let a = CityLayout::generate(&g, &mut SimRng::new(99));
        let b = CityLayout::generate(&g, &mut SimRng::new(99));
        assert_eq!(a, b);
    }

    #[test]
    fn isolated_street_has_no_road() {
        let g = CityGrid::from_ascii(".#.").unwrap();
        let layout = CityLayout::generate(&g, &mut SimRng::new(0));
        assert!(layout.roads.is_empty());
        // Both houses border the lone street tile.
        assert_eq!(layout.buildings.len(), 2);
    }

    #[test]
    fn spur_ends_in_a_dead_end() {
        let g = spur();
        let layout = CityLayout::generate(&g, &mut SimRng::new(0));
        let end = layout.road_at(Cell::new(1, 1)).unwrap();
        assert_eq!(end.piece.variant, crate::RoadVariant::DeadEnd);
        assert_eq!(end.mask.bits(), Direction::N.bit());
        let junction = layout.road_at(Cell::new(0, 1)).unwrap();
        assert_eq!(junction.piece.variant, crate::RoadVariant::ThreeWay);
    }
}
