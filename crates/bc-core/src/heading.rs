//! Cardinal headings, four-bit heading sets, and turn classification.
//!
//! Directions are the integers `0..4` (N, E, S, W) with arithmetic mod 4.
//! Adding 1 turns clockwise when mapped onto the ground plane, which is why a
//! heading change of `+1` is a right turn and `-1` a left turn.
//!
//! Two rotation senses appear in this crate:
//!
//! - `Direction::turned` / `rotated_cw` follow driving: `+1` = clockwise.
//! - `Direction::rotated_ccw` / `DirectionSet::rotated_ccw` follow a
//!   renderer's positive yaw (counter-clockwise seen from above), which is how
//!   road asset rotations are expressed.

use std::f64::consts::FRAC_PI_2;
use std::fmt;

/// Radius of the quarter circle traced by a left turn, in tiles.
pub const LEFT_TURN_RADIUS: f64 = 0.7;

/// Radius of the quarter circle traced by a right turn, in tiles.
pub const RIGHT_TURN_RADIUS: f64 = 0.3;

// ── Direction ─────────────────────────────────────────────────────────────────

/// One of the four cardinal headings on the grid.
///
/// `N` decreases the row index, `E` increases the column index.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Direction {
    N = 0,
    E = 1,
    S = 2,
    W = 3,
}

impl Direction {
    /// All headings in index order.
    pub const ALL: [Direction; 4] = [Direction::N, Direction::E, Direction::S, Direction::W];

    /// Heading for index `i mod 4`.
    #[inline]
    pub fn from_index(i: u8) -> Direction {
        Self::ALL[(i & 3) as usize]
    }

    #[inline]
    pub fn index(self) -> u8 {
        self as u8
    }

    /// The reverse heading: `(d + 2) mod 4`.
    #[inline]
    pub fn flip(self) -> Direction {
        Self::from_index(self.index() + 2)
    }

    /// Rotate clockwise by `quarter_turns`.
    #[inline]
    pub fn rotated_cw(self, quarter_turns: u8) -> Direction {
        Self::from_index(self.index() + (quarter_turns & 3))
    }

    /// Rotate counter-clockwise by `quarter_turns`.
    #[inline]
    pub fn rotated_ccw(self, quarter_turns: u8) -> Direction {
        Self::from_index(self.index() + 4 - (quarter_turns & 3))
    }

    /// Heading after performing `turn`.
    #[inline]
    pub fn turned(self, turn: Turn) -> Direction {
        match turn {
            Turn::Left     => self.rotated_ccw(1),
            Turn::Straight => self,
            Turn::Right    => self.rotated_cw(1),
        }
    }

    /// Bit for this heading in a four-bit adjacency mask (N=1, E=2, S=4, W=8).
    #[inline]
    pub fn bit(self) -> u8 {
        1 << self.index()
    }

    /// `(d_row, d_col)` of one step in this heading.
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::N => (-1, 0),
            Direction::E => (0, 1),
            Direction::S => (1, 0),
            Direction::W => (0, -1),
        }
    }

    /// World-space base rotation `d · π/2` in radians.
    #[inline]
    pub fn base_angle(self) -> f64 {
        f64::from(self.index()) * FRAC_PI_2
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::N => "N",
            Direction::E => "E",
            Direction::S => "S",
            Direction::W => "W",
        };
        f.write_str(s)
    }
}

// ── DirectionSet ──────────────────────────────────────────────────────────────

/// A set of headings packed into the low four bits of a `u8`.
///
/// The bit layout is the adjacency-mask layout used throughout the grid code:
/// N=1, E=2, S=4, W=8.  Iteration always yields headings in N, E, S, W order,
/// which keeps random picks over the set reproducible.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirectionSet(u8);

impl DirectionSet {
    pub const EMPTY: DirectionSet = DirectionSet(0);
    pub const ALL: DirectionSet = DirectionSet(0b1111);

    /// Build from a mask; bits above the low four are ignored.
    #[inline]
    pub fn from_bits(bits: u8) -> Self {
        DirectionSet(bits & 0b1111)
    }

    #[inline]
    pub fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn insert(&mut self, dir: Direction) {
        self.0 |= dir.bit();
    }

    #[inline]
    pub fn contains(self, dir: Direction) -> bool {
        self.0 & dir.bit() != 0
    }

    #[inline]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |d| self.contains(*d))
    }

    /// The `n`-th member in N, E, S, W order.
    #[inline]
    pub fn nth(self, n: usize) -> Option<Direction> {
        self.iter().nth(n)
    }

    /// Rotate every member counter-clockwise by `quarter_turns`.
    pub fn rotated_ccw(self, quarter_turns: u8) -> DirectionSet {
        self.iter().map(|d| d.rotated_ccw(quarter_turns)).collect()
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut set = DirectionSet::EMPTY;
        for d in iter {
            set.insert(d);
        }
        set
    }
}

impl fmt::Debug for DirectionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

// ── Turn ──────────────────────────────────────────────────────────────────────

/// Classification of a heading change across one tile.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(i8)]
pub enum Turn {
    Left     = -1,
    Straight = 0,
    Right    = 1,
}

impl Turn {
    /// Classify the change from heading `from` to heading `to`.
    ///
    /// Returns `None` for a reversal, which is not a legal move.
    pub fn between(from: Direction, to: Direction) -> Option<Turn> {
        let mut diff = to.index() as i8 - from.index() as i8;
        if diff > 1 {
            diff -= 4;
        }
        if diff < -1 {
            diff += 4;
        }
        match diff {
            -1 => Some(Turn::Left),
            0  => Some(Turn::Straight),
            1  => Some(Turn::Right),
            _  => None,
        }
    }

    /// `-1`, `0` or `1`.
    #[inline]
    pub fn value(self) -> i8 {
        self as i8
    }

    /// Path length through a tile for this turn, in tiles.
    ///
    /// Turns follow a quarter circle, so the length is `radius · π/2`.  The
    /// radii are asymmetric: left turns swing wide across the junction, right
    /// turns hug the corner.
    #[inline]
    pub fn distance(self) -> f64 {
        match self {
            Turn::Left     => LEFT_TURN_RADIUS * FRAC_PI_2,
            Turn::Straight => 1.0,
            Turn::Right    => RIGHT_TURN_RADIUS * FRAC_PI_2,
        }
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Turn::Left     => "left",
            Turn::Straight => "straight",
            Turn::Right    => "right",
        };
        f.write_str(s)
    }
}
