//! Sub-tile motion curves.
//!
//! Within a cell a vehicle follows one of three paths, written in a local
//! frame where the vehicle enters heading north (towards `-y`) through the
//! southern edge at `y = 0.5`, driving on the right at `x = 0.2`:
//!
//! - straight: a line from `(0.2, 0.5)` to `(0.2, -0.5)`;
//! - left: a quarter circle of radius 0.7 about `(-0.5, 0.5)`, leaving
//!   through the western edge;
//! - right: a quarter circle of radius 0.3 about `(0.5, 0.5)`, leaving
//!   through the eastern edge.
//!
//! The local frame is then rotated by the entry heading.  Every path starts at
//! the point where the previous one ended, so poses are continuous across cell
//! boundaries.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use bc_core::{Cell, Direction, Turn, LEFT_TURN_RADIUS, RIGHT_TURN_RADIUS};

/// Lateral offset of the driving lane from the tile centre line.
pub const LANE_OFFSET: f64 = 0.2;

/// Offset from the cell centre and heading angle, both already rotated into
/// world axes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LocalPose {
    pub x:       f64,
    pub y:       f64,
    pub heading: f64,
}

/// World transform of a vehicle: tile `(row, col)` centre sits at
/// `(x, z) = (col, row)`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pose {
    pub x:       f64,
    pub z:       f64,
    /// Yaw in radians.  Not wrapped; compare with [`wrap_angle`].
    pub heading: f64,
}

impl Pose {
    /// Place a local pose on `cell`.
    pub fn on_cell(cell: Cell, local: LocalPose) -> Self {
        Self {
            x:       f64::from(cell.col) + local.x,
            z:       f64::from(cell.row) + local.y,
            heading: local.heading,
        }
    }

    /// Straight-line distance between two poses on the ground plane.
    pub fn distance_to(&self, other: &Pose) -> f64 {
        (self.x - other.x).hypot(self.z - other.z)
    }
}

/// Pose for progress fraction `alpha` (expected in `[0, 1]`) through a
/// segment entered on heading `dir` with the given `turn`.
///
/// `heading = -dir·π/2 - alpha·turn·π/2`, which equals the entry heading at
/// `alpha = 0` and the exit heading at `alpha = 1`.
pub fn compute_pose(turn: Turn, alpha: f64, dir: Direction) -> LocalPose {
    let sweep = alpha * FRAC_PI_2;
    let (x, y) = match turn {
        Turn::Straight => (LANE_OFFSET, 0.5 - alpha),
        Turn::Left => (
            -0.5 + LEFT_TURN_RADIUS * sweep.cos(),
            0.5 - LEFT_TURN_RADIUS * sweep.sin(),
        ),
        Turn::Right => (
            0.5 - RIGHT_TURN_RADIUS * sweep.cos(),
            0.5 - RIGHT_TURN_RADIUS * sweep.sin(),
        ),
    };

    let base   = dir.base_angle();
    let (x, y) = rotate_2d(x, y, base);
    LocalPose {
        x,
        y,
        heading: -base - alpha * f64::from(turn.value()) * FRAC_PI_2,
    }
}

#[inline]
fn rotate_2d(x: f64, y: f64, angle: f64) -> (f64, f64) {
    let (sin, cos) = angle.sin_cos();
    (x * cos - y * sin, x * sin + y * cos)
}

/// Normalise an angle to `(-π, π]`.
pub fn wrap_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    if wrapped > PI { wrapped - TAU } else { wrapped }
}
