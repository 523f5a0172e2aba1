//! Simulation observer trait for progress reporting and data collection.

use bc_core::Tick;
use bc_traffic::{Pose, VehicleAgent};

/// Fleet-wide counts for one tick.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TickSummary {
    /// Vehicles still driving after the update.
    pub moving:  usize,
    /// Vehicles frozen at a dead end.
    pub stalled: usize,
    /// Cell transitions committed during the tick.
    pub commits: u64,
}

/// Callbacks invoked by [`City::run`][crate::City::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — stall counter
///
/// ```rust,ignore
/// struct StallWatch { first_stall: Option<Tick> }
///
/// impl CityObserver for StallWatch {
///     fn on_tick_end(&mut self, tick: Tick, summary: TickSummary) {
///         if summary.stalled > 0 && self.first_stall.is_none() {
///             self.first_stall = Some(tick);
///         }
///     }
/// }
/// ```
pub trait CityObserver {
    /// Called at the very start of each tick, before any vehicle moves.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after every vehicle has been updated.
    fn on_tick_end(&mut self, _tick: Tick, _summary: TickSummary) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks`
    /// ticks) with the fleet and the poses it just produced, both indexed by
    /// `VehicleId`.
    fn on_snapshot(
        &mut self,
        _tick:     Tick,
        _vehicles: &[VehicleAgent],
        _poses:    &[Pose],
    ) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`CityObserver`] that does nothing.
pub struct NoopObserver;

impl CityObserver for NoopObserver {}
