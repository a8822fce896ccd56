//! Angular state and the linear deceleration law
//!
//! Speed is expressed in milliseconds of remaining spin: every update subtracts
//! the elapsed time, and the angle advances by a step proportional to the
//! fraction of the launch speed still left. A wheel launched at speed `S`
//! therefore stops once `S` milliseconds have elapsed, however the time is
//! split across frames.

use std::f64::consts::PI;

use rand::Rng;

use crate::consts::{SPEED_DIVISOR, UNCONFIGURED_MIN_SPEED, UNCONFIGURED_RANDOM_SPEED};

#[derive(Debug, Clone)]
pub struct RotationModel {
    /// Cumulative rotation (radians)
    pub angle: f64,
    /// Speed at launch; 0 means never launched
    pub initial_speed: f64,
    /// Remaining speed; may end slightly negative
    pub current_speed: f64,
    /// Floor of the randomized launch speed
    pub min_speed: f64,
    /// Width of the random addition to `min_speed`
    pub random_speed: f64,
}

impl Default for RotationModel {
    fn default() -> Self {
        Self {
            angle: 0.0,
            initial_speed: 0.0,
            current_speed: 0.0,
            min_speed: UNCONFIGURED_MIN_SPEED,
            random_speed: UNCONFIGURED_RANDOM_SPEED,
        }
    }
}

impl RotationModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sample a new launch speed. The angle is kept, so launching mid-spin
    /// restarts the decay from wherever the wheel currently points.
    pub fn launch<R: Rng>(&mut self, rng: &mut R) {
        let unit: f64 = rng.random();
        self.initial_speed = unit * self.random_speed + self.min_speed;
        self.current_speed = self.initial_speed;
        log::debug!("Wheel launched at speed {:.1}", self.initial_speed);
    }

    /// Advance by `elapsed_ms`. No-op once stopped.
    ///
    /// The speed is not clamped at zero: the last moving update can leave it
    /// negative, and the guard only takes effect on the next call.
    pub fn update(&mut self, elapsed_ms: f64) {
        if self.is_spinning() {
            self.angle += (self.current_speed * PI) / (SPEED_DIVISOR * self.initial_speed);
            self.current_speed -= elapsed_ms;
        }
    }

    /// Back to the unlaunched state
    pub fn reset(&mut self) {
        self.angle = 0.0;
        self.current_speed = 0.0;
        self.initial_speed = 0.0;
    }

    #[inline]
    pub fn is_spinning(&self) -> bool {
        self.initial_speed > 0.0 && self.current_speed > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn fixed_speed(speed: f64) -> RotationModel {
        RotationModel {
            min_speed: speed,
            random_speed: 0.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_launch_without_random_range_is_exact() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut model = fixed_speed(2000.0);
        for _ in 0..5 {
            model.launch(&mut rng);
            assert_eq!(model.initial_speed, 2000.0);
            assert_eq!(model.current_speed, 2000.0);
        }
    }

    #[test]
    fn test_launch_within_bounds() {
        let mut rng = Pcg32::seed_from_u64(99);
        let mut model = RotationModel {
            min_speed: 2000.0,
            random_speed: 5000.0,
            ..Default::default()
        };
        for _ in 0..100 {
            model.launch(&mut rng);
            assert!(model.initial_speed >= 2000.0 && model.initial_speed < 7000.0);
        }
    }

    #[test]
    fn test_first_step_is_pi_over_thirty() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut model = fixed_speed(2000.0);
        model.launch(&mut rng);
        model.update(16.0);
        assert!((model.angle - PI / 30.0).abs() < 1e-12);
        assert_eq!(model.current_speed, 1984.0);
    }

    #[test]
    fn test_overshoot_is_not_clamped() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut model = fixed_speed(2000.0);
        model.launch(&mut rng);
        model.update(2500.0);
        assert_eq!(model.current_speed, -500.0);
        assert!(!model.is_spinning());

        let frozen = model.angle;
        model.update(16.0);
        assert_eq!(model.angle, frozen);
        assert_eq!(model.current_speed, -500.0);
    }

    #[test]
    fn test_reset_then_update_stays_at_zero() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut model = fixed_speed(2000.0);
        model.launch(&mut rng);
        model.update(16.0);
        model.reset();
        model.update(16.0);
        model.update(1000.0);
        assert_eq!(model.angle, 0.0);
        assert_eq!(model.initial_speed, 0.0);
    }

    #[test]
    fn test_unlaunched_update_is_noop() {
        let mut model = RotationModel::new();
        model.update(100.0);
        assert_eq!(model.angle, 0.0);
    }

    #[test]
    fn test_relaunch_keeps_angle() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut model = fixed_speed(1000.0);
        model.launch(&mut rng);
        for _ in 0..10 {
            model.update(16.0);
        }
        let angle = model.angle;
        model.launch(&mut rng);
        assert_eq!(model.angle, angle);
        assert_eq!(model.current_speed, 1000.0);
    }

    proptest! {
        #[test]
        fn prop_stops_once_elapsed_reaches_speed(
            steps in prop::collection::vec(1u32..400, 1..200),
        ) {
            let mut rng = Pcg32::seed_from_u64(11);
            let mut model = fixed_speed(2000.0);
            model.launch(&mut rng);

            let mut total = 0.0;
            for step in steps {
                let step = step as f64;
                let was_spinning = model.is_spinning();
                model.update(step);
                if was_spinning {
                    total += step;
                }
                prop_assert_eq!(model.is_spinning(), total < 2000.0);
            }

            let angle = model.angle;
            if total >= 2000.0 {
                model.update(50.0);
                prop_assert_eq!(model.angle, angle);
            }
        }
    }
}
