//! Road variant resolution.
//!
//! Every Street tile gets one of five road assets, rotated so its connectors
//! line up with the neighbouring streets.  The choice depends only on the
//! tile's adjacency mask (N=1, E=2, S=4, W=8), so the full mapping is a fixed
//! 16-entry table.
//!
//! # Canonical orientation
//!
//! Each asset is authored with a default connector set:
//!
//! | Variant    | Default connectors |
//! |------------|--------------------|
//! | `DeadEnd`  | W                  |
//! | `Straight` | E, W               |
//! | `Bend`     | N, E               |
//! | `ThreeWay` | N, E, W            |
//! | `Cross`    | N, E, S, W         |
//!
//! A [`Rotation`] of `q` quarter turns is a positive yaw (counter-clockwise
//! seen from above), which moves a connector from heading `d` to `d - q`.

use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt;

use bc_core::{Direction, DirectionSet};

// ── RoadVariant ───────────────────────────────────────────────────────────────

/// The five road shapes.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoadVariant {
    DeadEnd,
    Straight,
    Bend,
    ThreeWay,
    Cross,
}

impl RoadVariant {
    /// Connectors of the asset in its default orientation.
    pub fn connectors(self) -> DirectionSet {
        let bits = match self {
            RoadVariant::DeadEnd  => Direction::W.bit(),
            RoadVariant::Straight => Direction::E.bit() | Direction::W.bit(),
            RoadVariant::Bend     => Direction::N.bit() | Direction::E.bit(),
            RoadVariant::ThreeWay => Direction::N.bit() | Direction::E.bit() | Direction::W.bit(),
            RoadVariant::Cross    => DirectionSet::ALL.bits(),
        };
        DirectionSet::from_bits(bits)
    }

    /// Asset the renderer loads for this variant.
    pub fn asset_name(self) -> &'static str {
        match self {
            RoadVariant::DeadEnd  => "road_endRound",
            RoadVariant::Straight => "road_straight",
            RoadVariant::Bend     => "road_bend",
            RoadVariant::ThreeWay => "road_intersection",
            RoadVariant::Cross    => "road_crossroadPath",
        }
    }
}

impl fmt::Display for RoadVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RoadVariant::DeadEnd  => "dead_end",
            RoadVariant::Straight => "straight",
            RoadVariant::Bend     => "bend",
            RoadVariant::ThreeWay => "three_way",
            RoadVariant::Cross    => "cross",
        };
        f.write_str(s)
    }
}

// ── Rotation ──────────────────────────────────────────────────────────────────

/// A yaw of `quarter_turns · 90°`, counter-clockwise seen from above.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rotation(u8);

impl Rotation {
    pub const IDENTITY: Rotation = Rotation(0);

    /// `quarter_turns` is reduced mod 4.
    #[inline]
    pub const fn new(quarter_turns: u8) -> Self {
        Rotation(quarter_turns & 3)
    }

    #[inline]
    pub fn quarter_turns(self) -> u8 {
        self.0
    }

    /// Angle in radians, normalised to `(-π, π]`.
    pub fn radians(self) -> f64 {
        match self.0 {
            0 => 0.0,
            1 => FRAC_PI_2,
            2 => PI,
            _ => -FRAC_PI_2,
        }
    }

    /// Angle in whole degrees, normalised to `(-180, 180]`.
    pub fn degrees(self) -> i32 {
        match self.0 {
            0 => 0,
            1 => 90,
            2 => 180,
            _ => -90,
        }
    }
}

// ── RoadPiece ─────────────────────────────────────────────────────────────────

/// A road asset plus the rotation that seats it on a particular tile.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoadPiece {
    pub variant:  RoadVariant,
    pub rotation: Rotation,
}

impl RoadPiece {
    const fn new(variant: RoadVariant, quarter_turns: u8) -> Option<Self> {
        Some(Self { variant, rotation: Rotation::new(quarter_turns) })
    }

    /// Connectors of the placed (rotated) asset.
    pub fn connectors(self) -> DirectionSet {
        self.variant.connectors().rotated_ccw(self.rotation.quarter_turns())
    }
}

use RoadVariant::{Bend, Cross, DeadEnd, Straight, ThreeWay};

/// Indexed by adjacency mask.  Comments list the open headings.
const ROAD_TABLE: [Option<RoadPiece>; 16] = [
    None,                          // —
    RoadPiece::new(DeadEnd, 3),    // N
    RoadPiece::new(DeadEnd, 2),    // E
    RoadPiece::new(Bend, 0),       // N E
    RoadPiece::new(DeadEnd, 1),    // S
    RoadPiece::new(Straight, 1),   // N S
    RoadPiece::new(Bend, 3),       // E S
    RoadPiece::new(ThreeWay, 3),   // N E S
    RoadPiece::new(DeadEnd, 0),    // W
    RoadPiece::new(Bend, 1),       // N W
    RoadPiece::new(Straight, 0),   // E W
    RoadPiece::new(ThreeWay, 0),   // N E W
    RoadPiece::new(Bend, 2),       // S W
    RoadPiece::new(ThreeWay, 1),   // N S W
    RoadPiece::new(ThreeWay, 2),   // E S W
    RoadPiece::new(Cross, 0),      // N E S W
];

/// Road asset and rotation for a Street tile with adjacency `mask`.
///
/// Total over `0..=15` (higher bits are ignored).  Mask 0, an isolated street
/// tile, has no road object.
#[inline]
pub fn resolve(mask: u8) -> Option<RoadPiece> {
    ROAD_TABLE[(mask & 0b1111) as usize]
}
