//! Tick-crossing detection
//!
//! The tick index is a pure function of the angle and the layout. Counting is
//! shifted by π/2 so boundaries line up with the indicator at the top.

use std::f64::consts::FRAC_PI_2;

use super::geometry::SectorGeometry;

/// Tick index for an angle
pub fn tick_index(angle: f64, geometry: &SectorGeometry) -> i64 {
    ((angle + FRAC_PI_2) / geometry.tick_angle()).floor() as i64
}

/// Remembers the last observed tick index between frames
#[derive(Debug, Clone, Default)]
pub struct TickDetector {
    previous: Option<i64>,
}

impl TickDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Observe the current angle. Returns true when the tick index changed
    /// since the last observation; the first observation only records.
    /// Several boundaries crossed in one frame count as one crossing.
    pub fn observe(&mut self, angle: f64, geometry: &SectorGeometry) -> bool {
        let current = tick_index(angle, geometry);
        match self.previous.replace(current) {
            Some(previous) => previous != current,
            None => false,
        }
    }

    /// Forget the stored index; the next observation only records
    pub fn reset(&mut self) {
        self.previous = None;
    }

    pub fn previous(&self) -> Option<i64> {
        self.previous
    }
}
