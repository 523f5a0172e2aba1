//! Plain data row types written by output backends.

/// One vehicle's world pose at a given tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehiclePoseRow {
    pub vehicle_id: u32,
    pub tick:       u64,
    /// Asset stem of the vehicle's model, e.g. `"taxi"`.
    pub model:      &'static str,
    /// Last committed cell.
    pub row:        i32,
    pub col:        i32,
    pub x:          f64,
    pub z:          f64,
    /// Yaw in radians, wrapped to `(-π, π]`.
    pub heading:    f64,
    pub stalled:    bool,
}

/// Fleet-wide counts for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummaryRow {
    pub tick:         u64,
    pub elapsed_secs: f64,
    pub moving:       u64,
    pub stalled:      u64,
    pub commits:      u64,
}

/// One placed asset: a road piece or a building.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutRow {
    /// `"road"` or `"building"`.
    pub kind:     &'static str,
    pub row:      i32,
    pub col:      i32,
    /// Scene position after centring the grid on the origin.
    pub x:        f64,
    pub z:        f64,
    pub asset:    &'static str,
    /// Yaw in radians.
    pub rotation: f64,
}
