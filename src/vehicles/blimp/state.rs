use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use crate::utils::ORBIT_PERIOD;

/// Kinematic state of the blimp.
///
/// Motion is confined to the ground plane: position y stays 0 and the
/// orientation is a single heading angle about the vertical axis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlimpState {
    /// Position in world space; y is always 0.
    pub position: Vector3<f64>,
    /// Heading about the vertical axis [deg].
    pub orientation: f64,
    /// Scalar velocity along the heading [scene units/frame].
    pub velocity: f64,
    /// Turn intent, reflected by rudder deflection. The flags are not
    /// mutually exclusive; right takes precedence over left.
    pub turning_left: bool,
    pub turning_right: bool,
    /// Which update law applies this frame.
    pub guidance: GuidanceMode,
}

impl Default for BlimpState {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            orientation: 0.0,
            velocity: 0.0,
            turning_left: false,
            turning_right: false,
            guidance: GuidanceMode::Manual,
        }
    }
}

impl BlimpState {
    pub fn is_autopilot(&self) -> bool {
        matches!(self.guidance, GuidanceMode::Autopilot(_))
    }
}

/// Exactly one of the two update laws applies per frame, selected here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GuidanceMode {
    Manual,
    Autopilot(Orbit),
}

/// Parameters of an autopilot orbit, snapshotted at engagement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Orbit {
    /// Centre of the circular path; y is always 0.
    pub center: Vector3<f64>,
    /// Angular progress around the orbit [rad], accumulated negative.
    pub angle: f64,
    /// Timestamp of the previous update, latched on the first update
    /// after engagement.
    pub last_t: Option<f64>,
}

impl Orbit {
    pub fn new(center: Vector3<f64>) -> Self {
        Self {
            center,
            angle: 0.0,
            last_t: None,
        }
    }

    /// Integrate the orbit's angular rate over the time since the
    /// previous update. The first call latches the time origin and
    /// contributes no progress.
    pub fn advance(&mut self, t: f64) {
        let last = self.last_t.unwrap_or(t);
        self.angle -= TAU * (t - last) / ORBIT_PERIOD;
        self.last_t = Some(t);
    }

    /// Whether angular progress has reached a full turn, compared at
    /// one-decimal precision to absorb floating-point drift. Overshoot
    /// past the full turn still counts as complete.
    pub fn completed(&self) -> bool {
        (self.angle.abs() * 10.0).round() >= (TAU * 10.0).round()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_first_advance_latches_time() {
        let mut orbit = Orbit::new(Vector3::zeros());
        orbit.advance(1234.0);
        assert_relative_eq!(orbit.angle, 0.0);
        assert_eq!(orbit.last_t, Some(1234.0));
    }

    #[test]
    fn test_advance_accumulates_negative_angle() {
        let mut orbit = Orbit::new(Vector3::zeros());
        orbit.advance(0.0);
        orbit.advance(2500.0);
        assert_relative_eq!(orbit.angle, -TAU / 2.0, epsilon = 1e-9);
        assert!(!orbit.completed());
    }

    #[test]
    fn test_full_turn_completes() {
        let mut orbit = Orbit::new(Vector3::zeros());
        orbit.advance(0.0);
        for step in 1..=5 {
            orbit.advance(step as f64 * 1000.0);
        }
        assert!(orbit.completed());
    }

    #[test]
    fn test_overshoot_still_completes() {
        let mut orbit = Orbit::new(Vector3::zeros());
        orbit.advance(0.0);
        orbit.advance(5600.0);
        assert!(orbit.completed());
    }
}
