//! Spin Wheel - a decelerating wheel of fortune
//!
//! Core modules:
//! - `wheel`: Rotation model, sector geometry and tick detection
//! - `renderer`: Draw-command projection and replay onto a canvas
//! - `animation`: Frame driver (update, draw, tick-check)
//! - `controller`: Settings lifecycle and label source selection
//! - `settings`: Persisted configuration

pub mod animation;
#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod controller;
pub mod error;
pub mod events;
pub mod renderer;
pub mod settings;
pub mod wheel;

pub use animation::{Animator, WheelEvent};
pub use controller::{ControllerEvent, WheelController};
pub use error::WheelError;
pub use events::{Notifier, SubscriberId};
pub use settings::{MemoryStore, SettingsStore, WheelConfig};
pub use wheel::{LabelSource, Wheel};

use glam::DVec2;

/// Wheel configuration constants
pub mod consts {
    /// Fallback sector palette
    pub const DEFAULT_SECTOR_COLORS: [&str; 8] = [
        "#ff8181", "#81dcff", "#81ffa2", "#ffef81", "#ff81ea", "#a681ff", "#ffa74d", "#4be1b8",
    ];

    /// Radius before the first viewport measurement
    pub const DEFAULT_RADIUS: f64 = 150.0;
    /// Gap between the wheel rim and the viewport edge
    pub const VIEWPORT_MARGIN: f64 = 20.0;

    /// Launch bounds used until a configuration is applied
    pub const UNCONFIGURED_MIN_SPEED: f64 = 10000.0;
    pub const UNCONFIGURED_RANDOM_SPEED: f64 = 10000.0;

    /// Configuration defaults (first run)
    pub const DEFAULT_MIN_SPEED: f64 = 2000.0;
    pub const DEFAULT_RANDOM_SPEED: f64 = 5000.0;
    pub const DEFAULT_TICKS_PER_SECTOR: i32 = 10;
    pub const DEFAULT_FONT_SIZE: f64 = 12.0;

    /// Angle advanced per update at full speed is π / SPEED_DIVISOR
    pub const SPEED_DIVISOR: f64 = 30.0;

    /// Drawing metrics
    pub const HUB_RADIUS: f64 = 10.0;
    pub const TICK_MARK_RADIUS: f64 = 2.0;
    pub const TICK_MARK_INSET: f64 = 10.0;
    pub const ARROW_INSET: f64 = 10.0;
    pub const ARROW_HALF_WIDTH: f64 = 10.0;
    pub const ARROW_LENGTH: f64 = 20.0;
    pub const SHADOW_BLUR: f64 = 5.0;

    /// Drawing colors
    pub const SHADOW_COLOR: &str = "#000";
    pub const BASE_FILL: &str = "#eddba8";
    pub const TICK_MARK_FILL: &str = "#444444";
    pub const LABEL_FILL: &str = "#000";
    pub const ARROW_FILL: &str = "red";
    pub const FONT_FAMILY: &str = "Arial";
}

/// Normalize an angle to [0, 2π)
#[inline]
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(std::f64::consts::TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= std::f64::consts::TAU {
        0.0
    } else {
        wrapped
    }
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f64, theta: f64) -> DVec2 {
    DVec2::new(r * theta.cos(), r * theta.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{PI, TAU};

    #[test]
    fn test_normalize_angle() {
        assert!((normalize_angle(TAU + 0.5) - 0.5).abs() < 1e-12);
        assert!((normalize_angle(-PI / 2.0) - 1.5 * PI).abs() < 1e-12);
        assert_eq!(normalize_angle(0.0), 0.0);
        assert!(normalize_angle(-1e-18) < TAU);
    }

    #[test]
    fn test_polar_to_cartesian() {
        let p = polar_to_cartesian(10.0, PI / 2.0);
        assert!(p.x.abs() < 1e-9);
        assert!((p.y - 10.0).abs() < 1e-9);
    }
}
