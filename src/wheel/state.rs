//! The wheel: labels, rotation and sector layout in one state object
//!
//! The wheel owns its RNG so that a seed fully determines every launch.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::geometry::SectorGeometry;
use super::rotation::RotationModel;
use crate::consts::{DEFAULT_RADIUS, VIEWPORT_MARGIN};
use crate::normalize_angle;
use crate::settings::WheelConfig;

#[derive(Debug, Clone)]
pub struct Wheel {
    /// Drawn radius; rendering input only
    pub radius: f64,
    values: Vec<String>,
    rotation: RotationModel,
    geometry: SectorGeometry,
    rng: Pcg32,
}

impl Wheel {
    pub fn new(seed: u64) -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            values: Vec::new(),
            rotation: RotationModel::new(),
            geometry: SectorGeometry::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Apply launch bounds, palette, tick density and font size
    pub fn apply_config(&mut self, config: &WheelConfig) {
        self.rotation.min_speed = config.min_speed;
        self.rotation.random_speed = config.random_speed;
        self.geometry.set_sector_colors(&config.colors);
        self.geometry.set_ticks_per_sector(config.tick_per_sector);
        self.geometry.font_size = config.font_size;
    }

    /// Replace the sector labels
    pub fn set_values(&mut self, values: &[String]) {
        self.values.clear();
        self.values.extend_from_slice(values);
        self.geometry.prepare(self.values.len());
        log::debug!("Wheel now has {} sectors", self.values.len());
    }

    pub fn launch(&mut self) {
        self.rotation.launch(&mut self.rng);
    }

    pub fn update(&mut self, elapsed_ms: f64) {
        self.rotation.update(elapsed_ms);
    }

    pub fn reset(&mut self) {
        self.rotation.reset();
    }

    /// Fit the radius to a viewport
    pub fn fit_viewport(&mut self, width: f64, height: f64) {
        self.radius = radius_for_viewport(width, height);
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn rotation(&self) -> &RotationModel {
        &self.rotation
    }

    pub fn geometry(&self) -> &SectorGeometry {
        &self.geometry
    }

    #[inline]
    pub fn angle(&self) -> f64 {
        self.rotation.angle
    }

    #[inline]
    pub fn is_spinning(&self) -> bool {
        self.rotation.is_spinning()
    }

    /// Sector currently under the top indicator
    pub fn selected_sector(&self) -> Option<usize> {
        match self.values.len() {
            0 => None,
            1 => Some(0),
            count => {
                // sectors start at -π/2 + angle; the indicator sits at -π/2
                let relative = normalize_angle(-self.rotation.angle);
                let sector = (relative / self.geometry.sector_angle()).floor() as usize;
                Some(sector.min(count - 1))
            }
        }
    }

    /// Label currently under the top indicator
    pub fn selected_label(&self) -> Option<&str> {
        self.selected_sector().map(|i| self.values[i].as_str())
    }
}

/// Radius that fits the wheel and its indicator inside a viewport
pub fn radius_for_viewport(width: f64, height: f64) -> f64 {
    (width.min(height) / 2.0 - VIEWPORT_MARGIN).max(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{PI, TAU};

    fn labels(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("v{i}")).collect()
    }

    fn fixed_config() -> WheelConfig {
        WheelConfig {
            min_speed: 2000.0,
            random_speed: 0.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_set_values_recomputes_geometry() {
        let mut wheel = Wheel::new(1);
        assert_eq!(wheel.geometry().sector_angle(), TAU);
        wheel.set_values(&labels(8));
        assert!((wheel.geometry().sector_angle() - TAU / 8.0).abs() < 1e-12);
        wheel.set_values(&[]);
        assert_eq!(wheel.geometry().sector_angle(), TAU);
    }

    #[test]
    fn test_apply_config() {
        let mut wheel = Wheel::new(1);
        let config = WheelConfig {
            colors: vec!["#abc".into()],
            tick_per_sector: 0,
            font_size: 20.0,
            ..fixed_config()
        };
        wheel.apply_config(&config);
        assert_eq!(wheel.geometry().colors(), ["#abc"]);
        assert_eq!(wheel.geometry().ticks_per_sector(), 1);
        assert_eq!(wheel.geometry().font_size, 20.0);
        assert_eq!(wheel.rotation().min_speed, 2000.0);
    }

    #[test]
    fn test_reset_keeps_values_and_radius() {
        let mut wheel = Wheel::new(1);
        wheel.apply_config(&fixed_config());
        wheel.set_values(&labels(3));
        wheel.radius = 200.0;
        wheel.launch();
        wheel.update(16.0);
        wheel.reset();
        assert_eq!(wheel.angle(), 0.0);
        assert_eq!(wheel.values().len(), 3);
        assert_eq!(wheel.radius, 200.0);
    }

    #[test]
    fn test_same_seed_same_spin() {
        let mut a = Wheel::new(42);
        let mut b = Wheel::new(42);
        a.launch();
        b.launch();
        for _ in 0..100 {
            a.update(16.0);
            b.update(16.0);
        }
        assert_eq!(a.angle(), b.angle());
        assert_eq!(a.rotation().initial_speed, b.rotation().initial_speed);
    }

    #[test]
    fn test_spin_on_empty_wheel() {
        let mut wheel = Wheel::new(3);
        wheel.apply_config(&fixed_config());
        wheel.launch();
        wheel.update(16.0);
        assert!(wheel.angle() > 0.0);
        assert_eq!(wheel.selected_sector(), None);
        assert_eq!(wheel.selected_label(), None);
    }

    #[test]
    fn test_selected_sector() {
        let mut wheel = Wheel::new(1);
        wheel.set_values(&labels(4));
        // at rest sector 0 starts under the indicator
        assert_eq!(wheel.selected_sector(), Some(0));

        // turning clockwise brings the preceding sectors under the indicator
        wheel.rotation.angle = PI / 4.0;
        assert_eq!(wheel.selected_sector(), Some(3));
        wheel.rotation.angle = 3.0 * PI / 4.0;
        assert_eq!(wheel.selected_sector(), Some(2));
        wheel.rotation.angle = TAU + 7.0 * PI / 4.0;
        assert_eq!(wheel.selected_sector(), Some(0));
        assert_eq!(wheel.selected_label(), Some("v0"));
    }

    #[test]
    fn test_single_value_always_selected() {
        let mut wheel = Wheel::new(1);
        wheel.set_values(&labels(1));
        wheel.rotation.angle = 2.5;
        assert_eq!(wheel.selected_sector(), Some(0));
    }

    #[test]
    fn test_radius_for_viewport() {
        assert_eq!(radius_for_viewport(800.0, 600.0), 280.0);
        assert_eq!(radius_for_viewport(10.0, 10.0), 1.0);
    }
}
