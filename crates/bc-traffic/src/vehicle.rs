//! Per-vehicle navigation state machine.

use log::trace;

use bc_core::{Cell, Direction, Turn, VehicleRng};
use bc_grid::CityGrid;

use crate::{compute_pose, Navigator, Pose, TrafficError, TrafficResult, VehicleModel};

/// A single vehicle.
///
/// The vehicle is pure simulation state: it never touches a renderable
/// object.  Each tick [`update`][Self::update] returns the [`Pose`] the
/// renderer should apply.
///
/// # Invariants
///
/// - `turn == Turn::between(dir, next_dir)`; reversals never occur.
/// - `0 <= distance <= turn.distance()`; equality only while stalled.
/// - `distance` is carried over, never zeroed, when a segment completes.
#[derive(Clone, Debug, PartialEq)]
pub struct VehicleAgent {
    /// Opaque visual handle.
    pub model: VehicleModel,

    cell:     Cell,
    dir:      Direction,
    next_dir: Direction,
    turn:     Turn,
    speed:    f64,
    distance: f64,
    stalled:  bool,
    segments: u64,
}

impl VehicleAgent {
    /// Place a vehicle on `cell`, about to drive straight out through `dir`.
    ///
    /// The caller guarantees that `cell` is a Street tile and that the
    /// neighbour in `dir` is Street too (see [`sample_spawn`][crate::sample_spawn]).
    /// Use [`try_spawn`][Self::try_spawn] to have that checked.
    pub fn spawn(cell: Cell, dir: Direction, speed: f64) -> Self {
        Self {
            model: VehicleModel::default(),
            cell,
            dir,
            next_dir: dir,
            turn: Turn::Straight,
            speed,
            distance: 0.0,
            stalled: false,
            segments: 0,
        }
    }

    /// [`spawn`][Self::spawn] with the placement and speed validated against
    /// `grid`.
    pub fn try_spawn(grid: &CityGrid, cell: Cell, dir: Direction, speed: f64) -> TrafficResult<Self> {
        if !grid.is_street(cell) {
            return Err(TrafficError::NotStreet { cell });
        }
        if !grid.is_street(cell.step(dir)) {
            return Err(TrafficError::BlockedHeading { cell, dir });
        }
        if !speed.is_finite() || speed <= 0.0 {
            return Err(TrafficError::InvalidSpeed(speed));
        }
        Ok(Self::spawn(cell, dir, speed))
    }

    pub fn with_model(mut self, model: VehicleModel) -> Self {
        self.model = model;
        self
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// Last committed cell.
    pub fn cell(&self) -> Cell {
        self.cell
    }

    /// Heading the vehicle entered its cell on.
    pub fn dir(&self) -> Direction {
        self.dir
    }

    /// Heading it will leave its cell by.
    pub fn next_dir(&self) -> Direction {
        self.next_dir
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// Tiles travelled per tick.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Progress through the current segment, in tiles.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Progress through the current segment as a fraction of its length.
    pub fn alpha(&self) -> f64 {
        self.distance / self.turn.distance()
    }

    /// `true` once the vehicle has reached a dead end.  Stalled vehicles never
    /// move again.
    pub fn is_stalled(&self) -> bool {
        self.stalled
    }

    /// Number of cell transitions committed since spawn.
    pub fn segments_completed(&self) -> u64 {
        self.segments
    }

    /// Current world pose, without advancing.
    pub fn pose(&self) -> Pose {
        Pose::on_cell(self.cell, compute_pose(self.turn, self.alpha(), self.dir))
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    /// Advance one tick and return the resulting pose.
    ///
    /// 1. Accumulate `speed` into `distance`.
    /// 2. If the segment is complete, commit to the next cell and ask
    ///    `navigator` for the following exit.  Leftover progress carries into
    ///    the new segment.  With no legal exit the vehicle freezes with
    ///    `distance` pinned at the segment length.
    /// 3. Evaluate the motion curve.
    pub fn update<N: Navigator + ?Sized>(
        &mut self,
        grid:      &CityGrid,
        navigator: &N,
        rng:       &mut VehicleRng,
    ) -> Pose {
        if self.stalled {
            return self.pose();
        }

        self.distance += self.speed;
        let segment = self.turn.distance();
        if self.distance > segment {
            self.cell = self.cell.step(self.next_dir);
            self.dir = self.next_dir;
            self.segments += 1;

            let choice = navigator
                .choose(grid, self.cell, self.dir, rng)
                .and_then(|next| Turn::between(self.dir, next).map(|turn| (next, turn)));

            match choice {
                Some((next, turn)) => {
                    self.distance -= segment;
                    self.next_dir = next;
                    self.turn = turn;
                    trace!("vehicle entered {} heading {}, next {} ({})", self.cell, self.dir, next, turn);
                }
                None => {
                    self.next_dir = self.dir;
                    self.turn = Turn::Straight;
                    self.distance = self.turn.distance();
                    self.stalled = true;
                }
            }
        }

        self.pose()
    }
}
